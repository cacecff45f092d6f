// src/core/model.rs
use crate::error::ProgressError;

use super::{
    snapshot::Snapshot,
    status::{EntityStatus, Field, Outcome, Status},
};

/// Progress of one batch run: tracked companies, their field statuses and
/// the `current / total` counter.
///
/// Every mutation returns the updated snapshot so callers can publish it.
/// `current` counts companies that are fully processed, independent of
/// field-level events.
#[derive(Debug, Default)]
pub struct ProgressModel {
    snap: Snapshot,
    started: bool,
    signalled: bool,
}

type Res<'a> = Result<&'a Snapshot, ProgressError>;

impl ProgressModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a fresh run over `total` companies.
    /// `total == 0` is complete right away.
    pub fn start(&mut self, total: i64) -> Res<'_> {
        let total = usize::try_from(total).map_err(|_| ProgressError::InvalidTotal(total))?;
        self.snap = Snapshot::new(total);
        self.started = true;
        self.signalled = false;
        Ok(&self.snap)
    }

    /// Append a company with both fields loading.
    pub fn begin_entity(&mut self, name: impl Into<String>) -> Res<'_> {
        self.ensure_room(1)?;
        self.snap.entities.push(EntityStatus::loading(name));
        Ok(&self.snap)
    }

    /// Append every company up front with both fields idle.
    /// All-or-nothing: fails without touching the snapshot if they don't fit.
    pub fn preload<I, S>(&mut self, names: I) -> Res<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<EntityStatus> = names.into_iter().map(EntityStatus::idle).collect();
        self.ensure_room(rows.len())?;
        self.snap.entities.extend(rows);
        Ok(&self.snap)
    }

    /// Move a preloaded company from idle to loading on both fields.
    pub fn activate(&mut self, index: usize) -> Res<'_> {
        for field in Field::ALL {
            self.transition(index, field, Status::Loading)?;
        }
        Ok(&self.snap)
    }

    /// Settle one field of the company at `index`.
    pub fn resolve_field(&mut self, index: usize, field: Field, outcome: Outcome) -> Res<'_> {
        self.transition(index, field, outcome.into())?;
        Ok(&self.snap)
    }

    /// Count one more company as fully processed.
    pub fn advance(&mut self) -> Res<'_> {
        if self.snap.current >= self.snap.total {
            return Err(ProgressError::AlreadyComplete { total: self.snap.total });
        }
        self.snap.current += 1;
        Ok(&self.snap)
    }

    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snap
    }

    /// A run was started and `current == total`.
    pub fn is_complete(&self) -> bool {
        self.started && self.snap.is_complete()
    }

    /// Returns `true` exactly once per run: the first time it is asked after
    /// the run became complete.
    pub fn take_completion(&mut self) -> bool {
        if self.is_complete() && !self.signalled {
            self.signalled = true;
            true
        } else {
            false
        }
    }

    fn ensure_room(&self, extra: usize) -> Result<(), ProgressError> {
        let total = self.snap.total;
        if self.snap.entities.len() + extra > total {
            return Err(ProgressError::CapacityExceeded { total });
        }
        Ok(())
    }

    fn transition(&mut self, index: usize, field: Field, to: Status) -> Result<(), ProgressError> {
        let len = self.snap.entities.len();
        let entity = self
            .snap
            .entities
            .get_mut(index)
            .ok_or(ProgressError::IndexOutOfRange { index, len })?;

        let slot = entity.slot_mut(field);
        if !slot.can_become(to) {
            return Err(ProgressError::InvalidTransition { index, field, from: *slot, to });
        }
        *slot = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preload_then_activate() {
        let mut m = ProgressModel::new();
        m.start(2).unwrap();
        m.preload(["A", "B"]).unwrap();
        assert_eq!(m.snapshot().entities[1], EntityStatus::idle("B"));

        let snap = m.activate(1).unwrap();
        assert_eq!(snap.entities[1], EntityStatus::loading("B"));
        assert_eq!(snap.entities[0], EntityStatus::idle("A"));

        // already loading
        assert!(matches!(m.activate(1), Err(ProgressError::InvalidTransition { .. })));
    }

    #[test]
    fn preload_is_all_or_nothing() {
        let mut m = ProgressModel::new();
        m.start(2).unwrap();
        m.begin_entity("A").unwrap();
        assert_eq!(
            m.preload(["B", "C"]),
            Err(ProgressError::CapacityExceeded { total: 2 })
        );
        assert_eq!(m.snapshot().entities.len(), 1);
    }

    #[test]
    fn fresh_model_never_signals() {
        let mut m = ProgressModel::new();
        assert!(!m.is_complete());
        assert!(!m.take_completion());
    }

    #[test]
    fn restart_rearms_completion() {
        let mut m = ProgressModel::new();
        m.start(0).unwrap();
        assert!(m.take_completion());
        assert!(!m.take_completion());

        m.start(1).unwrap();
        assert!(!m.take_completion());
        m.begin_entity("A").unwrap();
        m.advance().unwrap();
        assert!(m.take_completion());
    }
}
