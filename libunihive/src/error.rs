//! Error types for UniHive

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UnihiveError>;

#[derive(Error, Debug)]
pub enum UnihiveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl UnihiveError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UnihiveError::Validation(_) => 3,
            UnihiveError::InvalidInput(_) => 3,
            UnihiveError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Recoverable rejections of user input.
///
/// The caller re-prompts and may resubmit; none of these leave the store
/// in a different state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an upload type")]
    MissingUploadType,

    #[error("Please add a caption to your post")]
    MissingCaption,

    #[error("Caption has {words} words; keep it to {limit} words or less")]
    CaptionTooLong { words: usize, limit: usize },

    #[error("Please select a competition category")]
    MissingCompetitionCategory,

    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
