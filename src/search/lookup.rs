// src/search/lookup.rs
use rand::{Rng, SeedableRng, rngs::StdRng};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::{Field, Outcome};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{field} lookup for {company:?} failed: {reason}")]
    Failed { company: String, field: Field, reason: String },

    #[error("{field} lookup for {company:?} panicked")]
    Panicked { company: String, field: Field },
}

/// One field lookup for one company.
/// `Ok(true)`: found. `Ok(false)`: nothing found. `Err`: the lookup broke.
pub trait Lookup: Send + Sync {
    fn lookup(&self, company: &str, field: Field) -> Result<bool, LookupError>;
}

/// Map a lookup result onto the field's terminal status.
/// Failures only affect this one field of this one company.
pub fn outcome_of(res: Result<bool, LookupError>) -> Outcome {
    match res {
        Ok(found) => found.into(),
        Err(e) => {
            loge!("Lookup: {}", e);
            Outcome::Error
        }
    }
}

/// Stand-in for a real backend: a biased coin per field.
pub struct SimulatedLookup {
    success_probability: f64,
    seed: Option<u64>,
}

impl SimulatedLookup {
    pub fn new(success_probability: f64, seed: Option<u64>) -> Self {
        let p = if success_probability.is_nan() { 0.0 } else { success_probability.clamp(0.0, 1.0) };
        Self { success_probability: p, seed }
    }
}

impl Lookup for SimulatedLookup {
    fn lookup(&self, company: &str, field: Field) -> Result<bool, LookupError> {
        let p = self.success_probability;
        let found = match self.seed {
            // Per (company, field) stream: same seed, same answers, whatever
            // order the concurrent lookups run in.
            Some(seed) => StdRng::from_seed(stream_seed(seed, company, field)).random_bool(p),
            None => rand::rng().random_bool(p),
        };
        logd!("Lookup: {} {} → {}", company, field, if found { "found" } else { "missing" });
        Ok(found)
    }
}

/// Seed for one (company, field) stream. SHA-256 so the mapping does not
/// depend on the toolchain's std hasher.
fn stream_seed(seed: u64, company: &str, field: Field) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(company.as_bytes());
    hasher.update([match field {
        Field::Contact => 0u8,
        Field::Person => 1,
    }]);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}
