use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodeGenerationError {
    /// Every candidate collided with an existing code.
    #[error("Failed to generate a unique {prefix} code after {attempts} attempts")]
    ExhaustedRetries {
        prefix: &'static str,
        attempts: usize,
    },
}
