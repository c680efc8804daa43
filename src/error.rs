use thiserror::Error;

/// Top-level error type for the pairangle library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] MalformedInputError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning numeric text into vectors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MalformedInputError {
    /// The token stream ended with an unpaired coordinate.
    #[error("mismatched vector elements")]
    MismatchedElements { tokens: usize },

    #[error("token {index} is not a number: {token:?}")]
    InvalidToken { token: String, index: usize },
}

/// Errors related to geometric computations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
