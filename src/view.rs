// src/view.rs
//
// Framework-free projection of a snapshot into what the popup shows.
// The egui popup and the CLI both render from these values.

use crate::core::{EntityStatus, Snapshot, Status, percent};

/// Visual state of one status cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    Blank,
    Spinner,
    Positive,
    Negative,
}

impl From<Status> for Indicator {
    fn from(s: Status) -> Self {
        match s {
            Status::Idle => Indicator::Blank,
            Status::Loading => Indicator::Spinner,
            Status::Success => Indicator::Positive,
            Status::Error => Indicator::Negative,
        }
    }
}

impl Indicator {
    /// Single-glyph form for text frontends.
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Blank => " ",
            Indicator::Spinner => "…",
            Indicator::Positive => "✔",
            Indicator::Negative => "✖",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub name: String,
    pub contact: Indicator,
    pub person: Indicator,
}

impl From<&EntityStatus> for RowView {
    fn from(e: &EntityStatus) -> Self {
        Self { name: e.name.clone(), contact: e.contact.into(), person: e.person.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopupView {
    pub title: String,
    /// 0..=100
    pub percent: u8,
    pub rows: Vec<RowView>,
}

impl PopupView {
    /// Build from raw popup inputs. Tolerates `current > total`.
    pub fn project(entities: &[EntityStatus], current: usize, total: usize) -> Self {
        Self {
            title: format!("searched {current} out of {total}"),
            percent: percent(current, total),
            rows: entities.iter().map(RowView::from).collect(),
        }
    }

    pub fn from_snapshot(snap: &Snapshot) -> Self {
        Self::project(&snap.entities, snap.current, snap.total)
    }

    /// Progress-bar fill in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }
}
