// src/config/options.rs
use std::time::Duration;

use crate::core::sanitize::normalize_ws;

use super::consts::*;

/// Inclusive millisecond range a delay is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const ZERO: DelayRange = DelayRange { min_ms: 0, max_ms: 0 };

    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self { min_ms: ms, max_ms: ms }
    }

    /// Duration for a draw in `0.0..=1.0` (0 → min, 1 → max).
    pub fn at(&self, t: f64) -> Duration {
        let span = self.max_ms.saturating_sub(self.min_ms) as f64;
        let ms = self.min_ms + (span * t.clamp(0.0, 1.0)).round() as u64;
        Duration::from_millis(ms)
    }

    fn normalize(&mut self) {
        if self.min_ms > self.max_ms {
            std::mem::swap(&mut self.min_ms, &mut self.max_ms);
        }
    }
}

impl From<(u64, u64)> for DelayRange {
    fn from((min_ms, max_ms): (u64, u64)) -> Self {
        Self::new(min_ms, max_ms)
    }
}

/// Waits between the steps of one company and between companies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// `beginEntity` → contact resolved
    pub contact: DelayRange,
    /// contact resolved → person resolved
    pub person: DelayRange,
    /// company done → next company begins
    pub gap: DelayRange,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            contact: CONTACT_DELAY_MS.into(),
            person: PERSON_DELAY_MS.into(),
            gap: ENTITY_GAP_MS.into(),
        }
    }
}

impl Pacing {
    /// No waiting at all. Used by tests and `--no-delay`.
    pub const fn immediate() -> Self {
        Self { contact: DelayRange::ZERO, person: DelayRange::ZERO, gap: DelayRange::ZERO }
    }
}

/// How rows show up in the popup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// A row appears (loading) when its company is reached.
    #[default]
    Incremental,
    /// Every row is listed (idle) at start and turns loading when reached.
    Preloaded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOptions {
    pub companies: Vec<String>,
    pub success_probability: f64,
    pub pacing: Pacing,
    pub reveal: RevealMode,
    /// Fixed RNG seed for reproducible simulated runs.
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            companies: DEMO_COMPANIES
                .iter()
                .take(DEFAULT_SELECTED)
                .map(|s| s!(*s))
                .collect(),
            success_probability: SUCCESS_PROBABILITY,
            pacing: Pacing::default(),
            reveal: RevealMode::default(),
            seed: None,
        }
    }
}

impl SearchOptions {
    /// Bring user-supplied values into range instead of rejecting them.
    pub fn validate(&mut self) {
        self.success_probability = if self.success_probability.is_nan() {
            SUCCESS_PROBABILITY
        } else {
            self.success_probability.clamp(0.0, 1.0)
        };
        self.pacing.contact.normalize();
        self.pacing.person.normalize();
        self.pacing.gap.normalize();
    }
}

/// Parse `"Acme,  Globex ,,Acme"` → `["Acme", "Globex"]`.
/// Whitespace collapses, blanks drop out, first occurrence wins.
pub fn parse_company_list(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let name = normalize_ws(part);
        if name.is_empty() || out.contains(&name) {
            continue;
        }
        out.push(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_range_interpolates() {
        let r = DelayRange::new(800, 1200);
        assert_eq!(r.at(0.0), Duration::from_millis(800));
        assert_eq!(r.at(0.5), Duration::from_millis(1000));
        assert_eq!(r.at(1.0), Duration::from_millis(1200));
        assert_eq!(r.at(7.0), Duration::from_millis(1200));
        assert_eq!(DelayRange::fixed(300).at(0.9), Duration::from_millis(300));
    }

    #[test]
    fn validate_clamps_and_swaps() {
        let mut o = SearchOptions {
            success_probability: 1.5,
            pacing: Pacing { contact: DelayRange::new(900, 100), ..Pacing::immediate() },
            ..SearchOptions::default()
        };
        o.validate();
        assert_eq!(o.success_probability, 1.0);
        assert_eq!(o.pacing.contact, DelayRange::new(100, 900));

        o.success_probability = f64::NAN;
        o.validate();
        assert_eq!(o.success_probability, SUCCESS_PROBABILITY);
    }
}
