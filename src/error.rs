use thiserror::Error;

use crate::Weight;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Contract violations caused by invalid input.
///
/// A call that returns one of these leaves the graph untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge weight must not be negative, got {0}")]
    NegativeWeight(Weight),

    #[error("edge weight must be positive, got {0}")]
    NonPositiveWeight(Weight),

    #[error("unknown graph representation: {0}")]
    UnknownRepresentation(String),
}

/// A broken representation invariant.
///
/// These are never caused by callers: a correct implementation cannot reach them through
/// the public operations. Labels are rendered with `Debug` so the type stays label-agnostic.
/// Endpoints are named `from`/`to` since `thiserror` reserves `source`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("vertex record stored under {key} carries label {label}")]
    MislabeledVertex { key: String, label: String },

    #[error("edge {from} -> {to} has an endpoint outside the vertex set")]
    DanglingEdge { from: String, to: String },

    #[error("edge {from} -> {to} is stored more than once")]
    DuplicateEdge { from: String, to: String },

    #[error("edge {from} -> {to} has non-positive weight {weight}")]
    NonPositiveWeight {
        from: String,
        to: String,
        weight: Weight,
    },
}
