use thiserror::Error;

/// Errors related to the core identifier types.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("identifier must not be empty or whitespace")]
    EmptyIdentifier,
}
