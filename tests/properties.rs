// tests/properties.rs
//
// Property tests for the progress model invariants.
//
use proptest::prelude::*;
use search_status::core::{Field, Outcome, ProgressModel, Status, percent};

#[derive(Debug, Clone)]
enum Op {
    Begin,
    Resolve(usize, bool, bool),
    Advance,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Begin),
        (0usize..12, any::<bool>(), any::<bool>()).prop_map(|(i, c, ok)| Op::Resolve(i, c, ok)),
        Just(Op::Advance),
    ]
}

proptest! {
    #[test]
    fn percent_stays_in_range(current in 0usize..10_000, total in 0usize..10_000) {
        let p = percent(current, total);
        prop_assert!(p <= 100);
        if total == 0 {
            prop_assert_eq!(p, 0);
        } else if current <= total {
            let exact = 100.0 * current as f64 / total as f64;
            prop_assert!((f64::from(p) - exact).abs() <= 0.5 + 1e-9);
        } else {
            prop_assert_eq!(p, 100);
        }
    }

    #[test]
    fn random_op_sequences_keep_invariants(total in 0i64..10, ops in prop::collection::vec(op(), 0..60)) {
        let mut m = ProgressModel::new();
        m.start(total).unwrap();
        let mut prev = m.snapshot().clone();
        let mut completions = 0;
        if m.take_completion() { completions += 1; }

        for op in ops {
            let _ = match op {
                Op::Begin => m.begin_entity("X").map(|_| ()),
                Op::Resolve(i, contact, ok) => {
                    let f = if contact { Field::Contact } else { Field::Person };
                    m.resolve_field(i, f, Outcome::from(ok)).map(|_| ())
                }
                Op::Advance => m.advance().map(|_| ()),
            };
            if m.take_completion() { completions += 1; }

            let s = m.snapshot();
            prop_assert!(s.current <= s.total);
            prop_assert!(s.entities.len() <= s.total);
            prop_assert!(s.current >= prev.current);
            for (a, b) in prev.entities.iter().zip(&s.entities) {
                for f in Field::ALL {
                    if a.get(f).is_terminal() {
                        prop_assert_eq!(a.get(f), b.get(f));
                    }
                    prop_assert!(b.get(f) != Status::Idle);
                }
            }
            prev = s.clone();
        }

        prop_assert_eq!(completions, usize::from(m.is_complete()));
    }
}
