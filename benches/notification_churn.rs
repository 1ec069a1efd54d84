// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification churn.
//!
//! Measures the performance of:
//! - Showing into a full position (eviction on every call)
//! - Ticking many running countdowns
//! - Clearing every position at once

use criterion::{criterion_group, criterion_main, Criterion};
use iced_snackbar::config::Config;
use iced_snackbar::notifications::{Manager, ManualClock, NotificationRequest, Position};
use std::hint::black_box;

fn filled_manager(clock: &ManualClock) -> Manager {
    let config = Config {
        max_visible: 20,
        history_capacity: 1024,
        ..Config::default()
    };
    let mut manager = Manager::with_clock(&config, clock.clone());
    for position in Position::ALL {
        for n in 0..manager.max_visible() {
            manager.show(NotificationRequest::new(format!("{position} #{n}")).with_position(position));
        }
    }
    manager
}

/// Every show evicts the oldest entry of a full bucket.
fn bench_show_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let clock = ManualClock::new();
    let mut manager = filled_manager(&clock);

    group.bench_function("show_evicting", |b| {
        b.iter(|| {
            let id = manager.show(
                NotificationRequest::info("churn").with_position(Position::BottomRight),
            );
            black_box(id);
        });
    });

    group.finish();
}

/// Ticks 180 running countdowns; the clock is frozen so none expire.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let clock = ManualClock::new();
    let mut manager = filled_manager(&clock);

    group.bench_function("tick_running", |b| {
        b.iter(|| {
            black_box(manager.tick());
        });
    });

    group.finish();
}

fn bench_close_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let clock = ManualClock::new();

    group.bench_function("close_all", |b| {
        b.iter_batched(
            || filled_manager(&clock),
            |mut manager| black_box(manager.close_all()),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_show_with_eviction,
    bench_tick,
    bench_close_all
);
criterion_main!(benches);
