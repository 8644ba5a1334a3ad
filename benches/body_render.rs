//! Benchmarks for body rendering and wheel smoothing.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridview::merge::MergeSpan;
use gridview::scroll::{
    MemoryPane, PaneRegistry, PaneRole, QueuedTicks, ScrollState, WheelContext, WheelOptions,
    WheelSmoother,
};
use gridview::{Column, FixedSide, PaneSide, TableSnapshot, TableState, TreeOpts};
use serde_json::json;

/// Flat table of `rows` x 20 columns, two of them fixed left.
fn flat_snapshot(rows: usize) -> TableSnapshot {
    let mut snapshot = TableSnapshot::default();
    snapshot.config.row_id = Some("id".to_string());
    snapshot.config.stripe = true;
    for col in 0..20 {
        let id = format!("c{col}");
        let mut column = Column::new(&id, &id).width(100.0);
        if col < 2 {
            column = column.fixed(FixedSide::Left);
        }
        snapshot.columns.push(column);
    }
    snapshot.data = (0..rows)
        .map(|row| {
            let mut record = serde_json::Map::new();
            record.insert("id".to_string(), json!(format!("r{row}")));
            for col in 0..20 {
                record.insert(format!("c{col}"), json!(row * col));
            }
            serde_json::Value::Object(record)
        })
        .collect();
    snapshot
}

/// Tree of `roots` parents with 10 children each, every parent expanded.
fn tree_snapshot(roots: usize) -> TableSnapshot {
    let mut snapshot = TableSnapshot::default();
    snapshot.config.row_id = Some("id".to_string());
    snapshot.config.tree_config = Some(TreeOpts {
        show_line: true,
        ..TreeOpts::default()
    });
    snapshot
        .columns
        .push(Column::new("name", "name").tree_node().width(240.0));
    snapshot.columns.push(Column::new("size", "size").width(100.0));
    snapshot.data = (0..roots)
        .map(|root| {
            let children: Vec<_> = (0..10)
                .map(|child| json!({"id": format!("n{root}-{child}"), "name": "child", "size": child}))
                .collect();
            json!({"id": format!("n{root}"), "name": "parent", "size": root, "children": children})
        })
        .collect();
    snapshot.tree_expanded = (0..roots).map(|root| format!("n{root}")).collect();
    snapshot
}

/// Benchmark rendering the main pane across table sizes
fn bench_flat_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_body");

    for rows in [100, 1_000] {
        let table = TableState::from_snapshot(flat_snapshot(rows));
        group.throughput(Throughput::Elements((rows * 20) as u64));
        group.bench_with_input(BenchmarkId::new("main", rows), &table, |b, table| {
            b.iter(|| table.render(black_box(PaneSide::Main)))
        });
    }

    group.finish();
}

/// Benchmark a fixed pane that has to render every column to honor merges
fn bench_merged_fixed_pane(c: &mut Criterion) {
    let mut snapshot = flat_snapshot(1_000);
    snapshot.view.merge_list = (0..100)
        .map(|i| MergeSpan::new(i * 10, 1, 3, 4))
        .collect();
    let table = TableState::from_snapshot(snapshot);

    c.bench_function("merged_left_pane", |b| {
        b.iter(|| table.render(black_box(PaneSide::Left)))
    });
}

/// Benchmark an expanded tree with guide lines
fn bench_tree_body(c: &mut Criterion) {
    let table = TableState::from_snapshot(tree_snapshot(200));

    c.bench_function("tree_lines_2200_rows", |b| {
        b.iter(|| table.render(black_box(PaneSide::Main)))
    });
}

/// Benchmark decoding a snapshot from JSON
fn bench_snapshot_decode(c: &mut Criterion) {
    let json = serde_json::to_string(&flat_snapshot(1_000)).expect("Failed to serialize");

    let mut group = c.benchmark_group("snapshot");
    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("decode_1000x20", |b| {
        b.iter(|| TableState::from_json(black_box(&json)).expect("Failed to decode"))
    });
    group.finish();
}

/// Benchmark one full wheel gesture across three mounted panes
fn bench_wheel_gesture(c: &mut Criterion) {
    c.bench_function("wheel_gesture_600px", |b| {
        b.iter(|| {
            let mut state = ScrollState::new();
            let mut panes = PaneRegistry::new();
            for role in [PaneRole::MainBody, PaneRole::LeftBody, PaneRole::RightBody] {
                panes.mount(role, MemoryPane::new(50_000.0, 600.0));
            }
            let mut sink = TableState::default();
            let mut ticks = QueuedTicks::new();
            let mut smoother = WheelSmoother::new(PaneSide::Main);
            let mut ctx = WheelContext {
                state: &mut state,
                panes: &mut panes,
                sink: &mut sink,
                scheduler: &mut ticks,
                options: WheelOptions {
                    wheel_mode: true,
                    ..WheelOptions::default()
                },
            };
            smoother.on_wheel(&mut ctx, 0.0, black_box(600.0), 0.0);
            while ctx.scheduler.pop().is_some() {
                smoother.on_tick(&mut ctx);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_flat_body,
    bench_merged_fixed_pane,
    bench_tree_body,
    bench_snapshot_decode,
    bench_wheel_gesture,
);

criterion_main!(benches);
