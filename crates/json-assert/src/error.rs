use thiserror::Error;

/// A failed assertion. Displays as its formatted message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssertionError {
    #[error("{message}")]
    NotEqual { message: String },
    #[error("{message}")]
    UnexpectedlyEqual { message: String },
    /// The value under test was absent.
    #[error("{message}")]
    ActualMissing { message: String },
}

impl AssertionError {
    pub fn message(&self) -> &str {
        match self {
            Self::NotEqual { message }
            | Self::UnexpectedlyEqual { message }
            | Self::ActualMissing { message } => message,
        }
    }
}
