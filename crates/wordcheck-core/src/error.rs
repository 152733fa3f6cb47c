use wordcheck_generative::GenerateError;
use wordcheck_types::{Definition, ErrorKind, LookupResult};

/// Why a lookup produced no definition. `Display` is the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a valid word (max 15 letters, no spaces or hyphens).")]
    Validation(String),

    #[error("\"{0}\" is not a word in the selected dictionary.")]
    NotFound(String),

    #[error("No definition available for \"{0}\".")]
    DefinitionUnavailable(String),

    #[error("API key not set.")]
    CredentialMissing,

    #[error("An error occurred while fetching the definition. Please check your API key and try again.")]
    ExternalService(#[source] GenerateError),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Validation(_) => ErrorKind::Validation,
            LookupError::NotFound(_) => ErrorKind::NotFound,
            LookupError::DefinitionUnavailable(_) => ErrorKind::DefinitionUnavailable,
            LookupError::CredentialMissing => ErrorKind::CredentialMissing,
            LookupError::ExternalService(_) => ErrorKind::ExternalService,
        }
    }
}

impl From<LookupError> for LookupResult {
    fn from(e: LookupError) -> Self {
        LookupResult::Error {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// Convert a resolver outcome into the front-end record
pub fn to_lookup_result(result: Result<Definition, LookupError>) -> LookupResult {
    match result {
        Ok(definition) => LookupResult::Found { definition },
        Err(e) => e.into(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
