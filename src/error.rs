use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Missing {field}")]
    MissingDate { field: String },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidDate {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl StatusError {
    /// True for the single engine failure kind: a date that is absent or unreadable.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StatusError::MissingDate { .. } | StatusError::InvalidDate { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
