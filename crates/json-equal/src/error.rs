use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EqualError {
    /// The primary (actual) value was absent.
    #[error("cannot compare: actual value is missing")]
    InvalidState,
}
