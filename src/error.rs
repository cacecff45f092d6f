// src/error.rs
use thiserror::Error;

use crate::core::status::{Field, Status};

/// Misuse of the progress model. Every variant is a sequencing bug in
/// whoever drives the model; lookup failures never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("invalid total {0}: must be zero or positive")]
    InvalidTotal(i64),

    #[error("entity index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("all {total} entities already tracked")]
    CapacityExceeded { total: usize },

    #[error("run already complete ({total}/{total})")]
    AlreadyComplete { total: usize },

    #[error("entity {index}: {field} cannot go {from} → {to}")]
    InvalidTransition {
        index: usize,
        field: Field,
        from: Status,
        to: Status,
    },
}
