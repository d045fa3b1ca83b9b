use thiserror::Error;

/// Contract violations the type system cannot rule out.
///
/// Scoring itself never fails; these are raised by the validation gates
/// callers run before handing records to the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}
