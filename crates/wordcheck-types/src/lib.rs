pub mod definition;
pub mod types;

pub use definition::{Definition, ErrorKind, LookupResult, Meaning};
pub use types::{AppEvent, DictionaryVariant, DisplayResult};
