pub mod error;
pub mod history;
pub mod lexicon;
pub mod matcher;
pub mod preprocess;
pub mod related;
pub mod resolver;
pub mod score;
pub mod session;
pub mod table;

pub use error::{LoadError, LookupError};
pub use history::History;
pub use lexicon::Lexicon;
pub use matcher::find_matches;
pub use resolver::{Generative, resolve};
pub use related::{filter_related, synthesize};
pub use score::score;
pub use session::{SearchOutcome, Session};
pub use table::DefinitionTable;
