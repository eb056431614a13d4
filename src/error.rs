use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Stored document '{document}' is not valid JSON: {source}")]
    StorageParse {
        document: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Insufficient credits: unlock costs {required}, balance is {available}")]
    InsufficientCredits { required: u32, available: u32 },
    #[error("Unknown organization member: {0}")]
    UnknownUser(String),
    #[error("Invalid username or password")]
    Unauthorized,
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl AppError {
    /// A parse failure means the on-disk document is unusable; repositories
    /// treat it as absent and reseed instead of poisoning the session.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, AppError::StorageParse { .. })
    }
}
