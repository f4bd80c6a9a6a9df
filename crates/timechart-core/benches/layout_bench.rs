use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timechart_core::{
    compute_layout, AxisSlot, InteractionConfig, InteractionState, LayoutOptions, Modifiers, PointerEvent,
    RowDescriptor, TimeRange,
};

fn build_rows(n: usize) -> Vec<RowDescriptor> {
    (0..n)
        .map(|i| {
            let mut row = RowDescriptor::new(80.0);
            for a in 0..(i % 3) {
                row = row.axis(AxisSlot::new(format!("l{i}_{a}"), 30.0 + a as f64 * 5.0));
            }
            row = row.plot();
            for a in 0..(i % 2) {
                row = row.axis(AxisSlot::new(format!("r{i}_{a}"), 40.0));
            }
            row
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");
    let range = TimeRange::from_millis(0, 86_400_000).unwrap();
    let opts = LayoutOptions { width: 1200.0, ..LayoutOptions::default() };
    for &n in &[4usize, 64usize] {
        let rows = build_rows(n);
        group.bench_function(format!("rows_{n}"), |b| {
            b.iter(|| black_box(compute_layout(&rows, Some(range), &opts).unwrap()));
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let rows = build_rows(4);
    let range = TimeRange::from_millis(0, 86_400_000).unwrap();
    let opts = LayoutOptions { width: 1200.0, ..LayoutOptions::default() };
    let layout = compute_layout(&rows, Some(range), &opts).unwrap();
    let cfg = InteractionConfig { pan_enabled: true, ..InteractionConfig::default() };
    let left = layout.plot_left();

    c.bench_function("pan_drag_200_moves", |b| {
        b.iter(|| {
            let mut s = InteractionState::new()
                .handle(&PointerEvent::Down { x: left + 10.0, y: 10.0, modifiers: Modifiers::NONE }, &layout, &cfg)
                .state;
            for i in 0..200 {
                let ev = PointerEvent::Move { x: left + 10.0 + i as f64, y: 10.0, button_held: true };
                s = s.handle(&ev, &layout, &cfg).state;
            }
            black_box(s)
        });
    });
}

criterion_group!(benches, bench_layout, bench_drag);
criterion_main!(benches);
