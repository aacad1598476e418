use thiserror::Error;

pub type McfResult<T> = Result<T, McfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum McfError {
    #[error("Arithmetic overflow while computing {what}")]
    Overflow { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },

    #[error("Negative-cost cycle reachable from the source (through node {node})")]
    NegativeCycle { node: usize },
}
