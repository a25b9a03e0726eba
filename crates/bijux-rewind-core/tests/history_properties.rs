// SPDX-License-Identifier: Apache-2.0

use bijux_rewind_core::{History, RewindError};
use proptest::prelude::*;
use proptest::test_runner::Config;
use time::macros::datetime;
use time::OffsetDateTime;

const AT: OffsetDateTime = datetime!(2024-01-01 00:00 UTC);

#[derive(Debug, Clone)]
enum Step {
    Record(u16),
    Undo,
    Redo,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => any::<u16>().prop_map(Step::Record),
        2 => Just(Step::Undo),
        1 => Just(Step::Redo),
    ]
}

fn current(history: &History<u16>) -> Option<u16> {
    history.current().map(|entry| *entry.state())
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn plain_recording_enables_undo_from_second_entry(values in prop::collection::vec(any::<u16>(), 1..40)) {
        let mut history = History::new(64);
        for (index, value) in values.iter().enumerate() {
            history.record("step", *value, AT);
            prop_assert_eq!(history.can_undo(), index >= 1);
            prop_assert!(!history.can_redo());
        }
    }

    #[test]
    fn undo_then_redo_restores_previous_state(
        values in prop::collection::vec(any::<u16>(), 2..30),
        undos in 0_usize..10
    ) {
        let mut history = History::new(64);
        for value in &values {
            history.record("step", *value, AT);
        }
        for _ in 0..undos {
            if history.undo().is_err() {
                break;
            }
        }
        let before = current(&history);
        if history.undo().is_ok() {
            let redone = history.redo().copied().expect("redo after undo");
            prop_assert_eq!(Some(redone), before);
            prop_assert_eq!(current(&history), before);
        }
    }

    #[test]
    fn recording_after_undo_makes_discarded_branch_unreachable(
        values in prop::collection::vec(0_u16..1000, 2..20),
        undos in 1_usize..20,
        fresh in 1000_u16..2000
    ) {
        let mut history = History::new(64);
        for value in &values {
            history.record("step", *value, AT);
        }
        let undone = undos.min(values.len() - 1);
        for _ in 0..undone {
            history.undo().expect("undo within bounds");
        }
        history.record("fresh", fresh, AT);

        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.redo().err(), Some(RewindError::NoFuture));
        prop_assert_eq!(history.len(), values.len() - undone + 1);
        let kept: Vec<u16> = history.entries().map(|e| *e.state()).collect();
        prop_assert_eq!(&kept[..kept.len() - 1], &values[..values.len() - undone]);
    }

    #[test]
    fn length_never_exceeds_capacity(
        capacity in 1_usize..12,
        steps in prop::collection::vec(step_strategy(), 0..80)
    ) {
        let mut history = History::new(capacity);
        let mut last_recorded = None;
        for step in steps {
            match step {
                Step::Record(value) => {
                    history.record("step", value, AT);
                    last_recorded = Some(value);
                    prop_assert_eq!(current(&history), last_recorded);
                }
                Step::Undo => {
                    let _ = history.undo();
                }
                Step::Redo => {
                    let _ = history.redo();
                }
            }
            prop_assert!(history.len() <= capacity);
            let info = history.info();
            prop_assert_eq!(info.total, history.len());
            match history.cursor() {
                None => prop_assert!(history.is_empty()),
                Some(cursor) => prop_assert!(cursor < history.len()),
            }
        }
    }

    #[test]
    fn eviction_drops_oldest_first(capacity in 1_usize..8, extra in 1_usize..8) {
        let mut history = History::new(capacity);
        let total = capacity + extra;
        for value in 0..total {
            history.record("step", value as u16, AT);
        }
        let kept: Vec<u16> = history.entries().map(|e| *e.state()).collect();
        let expected: Vec<u16> = (extra..total).map(|v| v as u16).collect();
        prop_assert_eq!(kept, expected);
    }
}
