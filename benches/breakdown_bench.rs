use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kolixx_tour::models::countdown::TimeBreakdown;
use kolixx_tour::services::countdown::{compute_breakdown, labeled_units};
use kolixx_tour::services::settings::default_target;

fn bench_breakdown(c: &mut Criterion) {
    let target = default_target();
    let now = target.with_timezone(&Utc) - Duration::days(42);

    c.bench_function("compute_breakdown", |b| {
        b.iter(|| compute_breakdown(black_box(target), black_box(now)))
    });

    let breakdown = TimeBreakdown::from_millis(3_661_001);
    c.bench_function("labeled_units", |b| {
        b.iter(|| labeled_units(black_box(&breakdown)))
    });
}

criterion_group!(benches, bench_breakdown);
criterion_main!(benches);
