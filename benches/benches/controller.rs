// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use digitizer_interaction::{Controller, PointerButton};
use kurbo::Point;

fn seeded(count: usize) -> Controller {
    let mut c = Controller::default();
    let side = (count as f64).sqrt().ceil() as usize;
    for i in 0..count {
        let x = (i % side) as f64 * 12.0;
        let y = (i / side) as f64 * 12.0;
        c.create_point(x, y);
    }
    c
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_pointer_move");
    for &count in &[100usize, 1_000, 3_000] {
        let mut ctl = seeded(count);
        group.throughput(Throughput::Elements(64));
        group.bench_function(format!("sweep_n{count}"), |b| {
            b.iter(|| {
                for step in 0..64 {
                    let t = f64::from(step) * 5.0;
                    black_box(ctl.pointer_move(Point::new(t, t)));
                }
            });
        });
    }
    group.finish();
}

// Every edit rebuilds the index, so this measures the per-click cost at a given size.
fn bench_create_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_edit");
    for &count in &[100usize, 1_000, 3_000] {
        let mut ctl = seeded(count);
        group.bench_function(format!("create_delete_n{count}"), |b| {
            b.iter(|| {
                let _ = ctl.pointer_move(Point::new(-50.0, -50.0));
                let _ = ctl.pointer_down(PointerButton::Primary);
                let _ = ctl.pointer_down(PointerButton::Secondary);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pointer_move, bench_create_delete);
criterion_main!(benches);
