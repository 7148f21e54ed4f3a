use thiserror::Error;

/// Errors raised while validating assignment inputs. Validation happens
/// up front; once inputs pass, the assignment itself cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MixerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("category '{0}' is missing from the headcount map")]
    MissingCategory(String),
}
