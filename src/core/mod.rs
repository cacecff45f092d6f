// src/core/mod.rs
pub mod board;
pub mod model;
pub mod snapshot;
pub mod sanitize;
pub mod status;

pub use board::{Applied, RunHandle, RunId, SearchBoard};
pub use model::ProgressModel;
pub use snapshot::{Snapshot, percent};
pub use status::{EntityStatus, Field, Outcome, Status};
