// src/search/mod.rs
//
// Sequencing driver and the lookups it waits on.

pub mod driver;
pub mod lookup;

pub use driver::{FieldTally, RunReport, drive, run_search, spawn_search};
pub use lookup::{Lookup, LookupError, SimulatedLookup};
