// src/core/snapshot.rs
use super::status::EntityStatus;

/// Full state of one run at a point in time.
///
/// Invariants (kept by `ProgressModel`, which is the only writer):
/// `current <= total`, `entities.len() <= total`, and entities stay in
/// processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub entities: Vec<EntityStatus>,
    pub current: usize,
    pub total: usize,
}

impl Snapshot {
    pub fn new(total: usize) -> Self {
        Self { entities: Vec::with_capacity(total), current: 0, total }
    }

    pub fn is_complete(&self) -> bool {
        self.current == self.total
    }

    pub fn percent(&self) -> u8 {
        percent(self.current, self.total)
    }
}

/// `round(100 * current / total)` clamped to `0..=100`.
/// `total == 0` yields 0; `current > total` clamps to 100.
pub fn percent(current: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let current = current.min(total) as u128;
    let total = total as u128;
    // integer round-half-up
    ((current * 200 + total) / (total * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn percent_defined_for_degenerate_input() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(3, 0), 0);
        assert_eq!(percent(9, 4), 100);
        assert_eq!(percent(usize::MAX, usize::MAX), 100);
    }
}
