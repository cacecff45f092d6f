// src/core/status.rs
use std::fmt;

/// Resolution state of one field of one company.
/// Moves `Idle → Loading → {Success | Error}` and never leaves a terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Error)
    }

    /// Whether `self → next` is a legal step of the field state machine.
    pub fn can_become(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Status::Idle, Status::Loading)
                | (Status::Loading, Status::Success)
                | (Status::Loading, Status::Error)
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading => "loading",
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two independently resolved sub-fields of a company.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Contact,
    Person,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Contact, Field::Person];

    pub fn label(self) -> &'static str {
        match self {
            Field::Contact => "contact",
            Field::Person => "person",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final result of one field lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Error,
}

impl From<Outcome> for Status {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Success => Status::Success,
            Outcome::Error => Status::Error,
        }
    }
}

impl From<bool> for Outcome {
    fn from(found: bool) -> Self {
        if found { Outcome::Success } else { Outcome::Error }
    }
}

/// One row of the popup: a company and its two field statuses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityStatus {
    pub name: String,
    pub contact: Status,
    pub person: Status,
}

impl EntityStatus {
    pub fn idle(name: impl Into<String>) -> Self {
        Self { name: name.into(), contact: Status::Idle, person: Status::Idle }
    }

    pub fn loading(name: impl Into<String>) -> Self {
        Self { name: name.into(), contact: Status::Loading, person: Status::Loading }
    }

    #[inline]
    pub fn get(&self, field: Field) -> Status {
        match field {
            Field::Contact => self.contact,
            Field::Person => self.person,
        }
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut Status {
        match field {
            Field::Contact => &mut self.contact,
            Field::Person => &mut self.person,
        }
    }
}
