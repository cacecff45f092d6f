// tests/progress_model.rs
//
// Tests for ProgressModel: the start/begin/resolve/advance protocol.
//
use search_status::core::{EntityStatus, Field, Outcome, ProgressModel, Status};
use search_status::error::ProgressError;

fn row(name: &str, contact: Status, person: Status) -> EntityStatus {
    EntityStatus { name: name.into(), contact, person }
}

#[test]
fn walkthrough_of_one_company() {
    use Status::*;
    let mut m = ProgressModel::new();

    let s = m.start(3).unwrap();
    assert_eq!((s.current, s.total), (0, 3));
    assert!(s.entities.is_empty());

    let s = m.begin_entity("A").unwrap();
    assert_eq!(s.entities, vec![row("A", Loading, Loading)]);

    let s = m.resolve_field(0, Field::Contact, Outcome::Success).unwrap();
    assert_eq!(s.entities, vec![row("A", Success, Loading)]);

    let s = m.resolve_field(0, Field::Person, Outcome::Error).unwrap();
    assert_eq!(s.entities, vec![row("A", Success, Error)]);

    let s = m.advance().unwrap();
    assert_eq!(s.current, 1);
    assert_eq!(s.percent(), 33);
    assert!(!m.is_complete());
    assert!(!m.take_completion());
}

#[test]
fn empty_run_is_complete_immediately() {
    let mut m = ProgressModel::new();
    let s = m.start(0).unwrap();
    assert!(s.entities.is_empty());
    assert_eq!(s.percent(), 0);
    assert!(m.is_complete());
    assert!(m.take_completion());
    assert!(!m.take_completion(), "completion must fire once");
}

#[test]
fn negative_total_is_rejected() {
    let mut m = ProgressModel::new();
    assert_eq!(m.start(-1), Err(ProgressError::InvalidTotal(-1)));
    assert!(!m.is_complete());
}

#[test]
fn negative_total_keeps_previous_run() {
    let mut m = ProgressModel::new();
    m.start(2).unwrap();
    m.begin_entity("A").unwrap();
    assert!(m.start(-5).is_err());
    assert_eq!(m.snapshot().entities.len(), 1);
    assert_eq!(m.snapshot().total, 2);
}

#[test]
fn resolve_out_of_range() {
    let mut m = ProgressModel::new();
    m.start(2).unwrap();
    assert_eq!(
        m.resolve_field(0, Field::Contact, Outcome::Success),
        Err(ProgressError::IndexOutOfRange { index: 0, len: 0 })
    );
    m.begin_entity("A").unwrap();
    assert_eq!(
        m.resolve_field(5, Field::Person, Outcome::Error),
        Err(ProgressError::IndexOutOfRange { index: 5, len: 1 })
    );
}

#[test]
fn begin_beyond_total_fails() {
    let mut m = ProgressModel::new();
    m.start(1).unwrap();
    m.begin_entity("A").unwrap();
    assert_eq!(m.begin_entity("B"), Err(ProgressError::CapacityExceeded { total: 1 }));
    assert_eq!(m.snapshot().entities.len(), 1);
}

#[test]
fn advance_stops_at_total() {
    let mut m = ProgressModel::new();
    m.start(1).unwrap();
    m.begin_entity("A").unwrap();
    m.advance().unwrap();
    assert_eq!(m.advance(), Err(ProgressError::AlreadyComplete { total: 1 }));
    assert_eq!(m.snapshot().current, 1);
}

#[test]
fn terminal_fields_are_immutable() {
    let mut m = ProgressModel::new();
    m.start(1).unwrap();
    m.begin_entity("A").unwrap();
    m.resolve_field(0, Field::Contact, Outcome::Error).unwrap();

    let err = m.resolve_field(0, Field::Contact, Outcome::Success).unwrap_err();
    assert_eq!(
        err,
        ProgressError::InvalidTransition {
            index: 0,
            field: Field::Contact,
            from: Status::Error,
            to: Status::Success,
        }
    );
    assert_eq!(m.snapshot().entities[0].contact, Status::Error);
    // the other field is untouched
    assert_eq!(m.snapshot().entities[0].person, Status::Loading);
}

#[test]
fn idle_field_cannot_skip_loading() {
    let mut m = ProgressModel::new();
    m.start(1).unwrap();
    m.preload(["A"]).unwrap();
    assert!(matches!(
        m.resolve_field(0, Field::Person, Outcome::Success),
        Err(ProgressError::InvalidTransition { from: Status::Idle, .. })
    ));
}

#[test]
fn completion_fires_when_last_company_advances() {
    let mut m = ProgressModel::new();
    m.start(2).unwrap();
    for (i, name) in ["A", "B"].into_iter().enumerate() {
        m.begin_entity(name).unwrap();
        m.resolve_field(i, Field::Contact, Outcome::Success).unwrap();
        m.resolve_field(i, Field::Person, Outcome::Success).unwrap();
        assert!(!m.take_completion());
        m.advance().unwrap();
    }
    assert!(m.take_completion());
    assert!(!m.take_completion());
    assert_eq!(m.snapshot().percent(), 100);
}
