use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhaseError {
    #[error("`{0}` is not an async phase, expected one of `success`, `error` or `busy`")]
    UnknownPhase(String),
    #[error("action type `{0}` does not end with an async phase suffix")]
    MissingSuffix(String),
}
