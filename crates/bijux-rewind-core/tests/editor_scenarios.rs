// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use bijux_rewind_core::{EditorSession, FixedClock, OperationKind, RewindError};
use time::macros::datetime;

fn session() -> EditorSession {
    EditorSession::new(100, Arc::new(FixedClock(datetime!(2024-05-01 09:00 UTC))))
}

#[test]
fn insert_undo_redo_round_trip() {
    let mut editor = session();
    editor.insert(0, "Hello").expect("insert hello");
    editor.insert(5, " World").expect("insert world");
    assert_eq!(editor.document().as_str(), "Hello World");

    editor.undo().expect("undo");
    assert_eq!(editor.document().as_str(), "Hello");
    editor.redo().expect("redo");
    assert_eq!(editor.document().as_str(), "Hello World");

    let info = editor.info();
    assert!(info.can_undo);
    assert!(!info.can_redo);
}

#[test]
fn first_mutation_is_undoable_back_to_empty_document() {
    let mut editor = session();
    editor.insert(0, "abc").expect("insert");
    editor.undo().expect("undo first mutation");
    assert_eq!(editor.document().as_str(), "");
    assert_eq!(editor.undo(), Err(RewindError::NoHistory));
}

#[test]
fn redo_is_unavailable_after_a_new_mutation() {
    let mut editor = session();
    editor.insert(0, "abc").expect("insert");
    editor.insert(3, "def").expect("insert");
    editor.undo().expect("undo");
    editor.delete(0, 1).expect("delete");
    assert_eq!(editor.document().as_str(), "bc");
    assert_eq!(editor.redo(), Err(RewindError::NoFuture));
}

#[test]
fn rejected_operation_leaves_everything_untouched() {
    let mut editor = session();
    editor.insert(0, "abc").expect("insert");
    let history_before = editor.history().len();
    let log_before = editor.log().len();

    assert!(matches!(editor.delete(2, 9), Err(RewindError::Validation(_))));
    assert!(matches!(editor.insert(7, "x"), Err(RewindError::Validation(_))));
    assert_eq!(editor.document().as_str(), "abc");
    assert_eq!(editor.history().len(), history_before);
    assert_eq!(editor.log().len(), log_before);
}

#[test]
fn macro_replay_applies_each_step_in_order() {
    let mut editor = session();
    editor.start_macro("m1").expect("start");
    editor.insert(0, "A").expect("A");
    editor.insert(1, "B").expect("B");
    let sealed = editor.finish_macro().expect("finish");
    assert_eq!(sealed.len(), 2);

    assert!(editor.clear_document());
    editor.insert(0, "X").expect("X");
    let history_before = editor.history().len();
    let log_before = editor.log().len();

    assert_eq!(editor.execute_macro("m1"), Ok(2));
    assert_eq!(editor.document().as_str(), "ABX");
    assert_eq!(editor.history().len(), history_before + 2);
    assert_eq!(editor.log().len(), log_before + 2);

    editor.undo().expect("undo last replayed step");
    assert_eq!(editor.document().as_str(), "AX");
}

#[test]
fn macro_replay_is_rejected_as_a_whole_when_a_step_does_not_fit() {
    let mut editor = session();
    editor.insert(0, "0123456789").expect("seed");
    editor.start_macro("recorte").expect("start");
    editor.delete(0, 2).expect("first");
    editor.delete(0, 6).expect("second");
    editor.finish_macro().expect("finish");
    assert_eq!(editor.document().as_str(), "89");

    let history_before = editor.history().len();
    let err = editor.execute_macro("recorte").expect_err("too short");
    assert!(matches!(err, RewindError::Validation(_)));
    assert_eq!(editor.document().as_str(), "89");
    assert_eq!(editor.history().len(), history_before);
}

#[test]
fn recorder_misuse_is_reported() {
    let mut editor = session();
    assert_eq!(editor.finish_macro().err(), Some(RewindError::NotRecording));
    assert_eq!(editor.cancel_macro(), Err(RewindError::NotRecording));

    editor.start_macro("m1").expect("start");
    assert_eq!(
        editor.start_macro("m2"),
        Err(RewindError::AlreadyRecording("m1".to_string()))
    );
    editor.finish_macro().expect("finish");
    assert_eq!(
        editor.start_macro(" m1 "),
        Err(RewindError::DuplicateMacroName("m1".to_string()))
    );
    assert_eq!(
        editor.execute_macro("nope"),
        Err(RewindError::MacroNotFound("nope".to_string()))
    );
}

#[test]
fn rejected_operations_are_not_captured_while_recording() {
    let mut editor = session();
    editor.start_macro("m1").expect("start");
    editor.insert(0, "ok").expect("insert");
    assert!(editor.delete(5, 9).is_err());
    assert_eq!(editor.recorder().recorded_so_far(), 1);
    editor.cancel_macro().expect("cancel");
    assert!(editor.macros().next().is_none());
}

#[test]
fn undo_and_redo_are_logged_but_not_recorded() {
    let mut editor = session();
    editor.insert(0, "abc").expect("insert");
    editor.start_macro("m1").expect("start");
    editor.undo().expect("undo");
    editor.redo().expect("redo");
    let sealed = editor.finish_macro().expect("finish");
    assert!(sealed.is_empty());

    let kinds: Vec<OperationKind> = editor.log().entries().iter().map(|e| e.operation).collect();
    assert_eq!(
        kinds,
        vec![
            OperationKind::Insertar,
            OperationKind::Deshacer,
            OperationKind::Rehacer
        ]
    );
}

#[test]
fn clear_document_is_an_undoable_step() {
    let mut editor = session();
    assert!(!editor.clear_document());
    editor.insert(0, "texto").expect("insert");
    assert!(editor.clear_document());
    assert_eq!(editor.document().as_str(), "");
    editor.undo().expect("undo clear");
    assert_eq!(editor.document().as_str(), "texto");
}

#[test]
fn clearing_history_keeps_document_and_restarts_from_baseline() {
    let mut editor = session();
    editor.insert(0, "abc").expect("insert");
    editor.clear_history();
    assert_eq!(editor.undo(), Err(RewindError::NoHistory));
    assert_eq!(editor.document().as_str(), "abc");

    editor.insert(3, "d").expect("insert");
    editor.undo().expect("undo to baseline");
    assert_eq!(editor.document().as_str(), "abc");
}

#[test]
fn reset_returns_to_a_blank_session() {
    let mut editor = session();
    editor.insert(0, "abc").expect("insert");
    editor.start_macro("m1").expect("start");
    editor.reset();
    let info = editor.info();
    assert_eq!(info.total_commands, 0);
    assert!(!info.recording);
    assert_eq!(info.macros_available, 0);
    assert!(editor.document().is_empty());
    assert!(editor.log().is_empty());
}

#[test]
fn positions_count_characters_not_bytes() {
    let mut editor = session();
    editor.insert(0, "añoño").expect("insert");
    editor.replace(1, 1, "N").expect("replace");
    editor.delete(3, 4).expect("delete");
    assert_eq!(editor.document().as_str(), "aNoo");
    assert_eq!(editor.document().len(), 4);
}

#[test]
fn each_command_is_one_history_entry() {
    let mut editor = session();
    editor.insert(0, "hola").expect("insert");
    let info = editor.info();
    assert_eq!(info.total_commands, 1);
    assert!(info.can_undo);
    assert_eq!(editor.history().len(), 1);

    editor.undo().expect("undo back to empty");
    let info = editor.info();
    assert_eq!(info.total_commands, 1);
    assert!(!info.can_undo);
    assert!(info.can_redo);
    editor.redo().expect("redo first command");
    assert_eq!(editor.document().as_str(), "hola");
}

#[test]
fn macro_replay_on_cleared_history_adds_one_entry_per_step() {
    let mut editor = session();
    editor.start_macro("m1").expect("start");
    editor.insert(0, "A").expect("A");
    editor.insert(1, "B").expect("B");
    editor.finish_macro().expect("finish");
    editor.clear_history();
    assert!(editor.history().is_empty());

    assert_eq!(editor.execute_macro("m1"), Ok(2));
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.info().total_commands, 2);
    assert_eq!(editor.document().as_str(), "ABAB");

    editor.undo().expect("undo B");
    editor.undo().expect("undo A");
    assert_eq!(editor.document().as_str(), "AB");
    assert_eq!(editor.undo(), Err(RewindError::NoHistory));
}

#[test]
fn new_command_after_undoing_everything_starts_a_fresh_branch() {
    let mut editor = session();
    editor.insert(0, "abc").expect("insert");
    editor.insert(3, "d").expect("insert");
    editor.undo().expect("undo d");
    editor.undo().expect("undo abc");
    editor.insert(0, "z").expect("insert z");
    assert_eq!(editor.document().as_str(), "z");
    assert_eq!(editor.history().len(), 1);
    assert_eq!(editor.redo(), Err(RewindError::NoFuture));
    editor.undo().expect("undo z");
    assert_eq!(editor.document().as_str(), "");
}

#[test]
fn full_history_still_undoes_capacity_steps() {
    let mut editor =
        EditorSession::new(2, Arc::new(FixedClock(datetime!(2024-05-01 09:00 UTC))));
    for (pos, letter) in ["a", "b", "c"].into_iter().enumerate() {
        editor.insert(pos, letter).expect("insert");
    }
    assert_eq!(editor.history().len(), 2);
    editor.undo().expect("undo c");
    editor.undo().expect("undo b");
    assert_eq!(editor.document().as_str(), "a");
    assert_eq!(editor.undo(), Err(RewindError::NoHistory));
}

#[test]
fn replaying_a_macro_while_recording_captures_its_steps() {
    let mut editor = session();
    editor.start_macro("inner").expect("start inner");
    editor.insert(0, "A").expect("A");
    editor.insert(1, "B").expect("B");
    editor.finish_macro().expect("finish inner");

    editor.start_macro("outer").expect("start outer");
    editor.insert(0, "X").expect("X");
    editor.execute_macro("inner").expect("replay inner");
    let outer = editor.finish_macro().expect("finish outer");
    assert_eq!(outer.len(), 3);
    assert_eq!(editor.document().as_str(), "ABXAB");

    assert!(editor.clear_document());
    assert_eq!(editor.execute_macro("outer"), Ok(3));
    assert_eq!(editor.document().as_str(), "ABX");
}
