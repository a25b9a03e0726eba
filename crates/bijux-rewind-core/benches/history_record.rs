use std::sync::Arc;

use bijux_rewind_core::{EditorSession, FixedClock, History};
use criterion::{criterion_group, criterion_main, Criterion};
use time::macros::datetime;

fn bench_history_record(c: &mut Criterion) {
    let at = datetime!(2024-01-01 00:00 UTC);

    c.bench_function("history.record_at_capacity_100", |b| {
        let mut history = History::new(100);
        let mut value = 0u64;
        b.iter(|| {
            value += 1;
            history.record("step", value, at);
        });
    });

    c.bench_function("history.undo_redo_cycle", |b| {
        let mut history = History::new(100);
        for value in 0..100u64 {
            history.record("step", value, at);
        }
        b.iter(|| {
            let _ = history.undo();
            let _ = history.redo();
        });
    });

    c.bench_function("editor.insert_then_undo_4k_document", |b| {
        let mut session = EditorSession::new(100, Arc::new(FixedClock(at)));
        session.insert(0, "x".repeat(4096)).expect("seed");
        b.iter(|| {
            session.insert(2048, "abc").expect("insert");
            session.undo().expect("undo");
        });
    });
}

criterion_group!(benches, bench_history_record);
criterion_main!(benches);
