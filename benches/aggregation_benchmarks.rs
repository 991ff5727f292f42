//! Performance benchmarks for the ledger's aggregation functions.
//!
//! The aggregates are recomputed on every read rather than cached, so
//! these benches track how that holds up as the ledger grows:
//! - Total earnings over 1,000 entries: well under 1ms
//! - Monthly report over 1,000 entries: well under 1ms
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use worklog_engine::calculation::{
    SortDirection, SortField, dashboard_stats, monthly_report, sort_entries, total_earnings,
};
use worklog_engine::config::RatePolicy;
use worklog_engine::models::{RateSchedule, WorkEntry};

/// Creates a ledger of `count` entries spread across 2024.
fn create_entries(count: usize) -> Vec<WorkEntry> {
    (0..count)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let day = (i % 28) as u32 + 1;
            WorkEntry {
                id: format!("entry-{i}"),
                user_id: "user-bench".to_string(),
                date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
                regular_days: (i % 5) as u32,
                weekend_days: (i % 2) as u32,
                holiday_days: (i % 3 == 0) as u32,
                notes: String::new(),
            }
        })
        .collect()
}

fn bench_schedule() -> RateSchedule {
    RateSchedule::from_hourly(Decimal::new(2550, 2), &RatePolicy::default())
}

fn bench_total_earnings(c: &mut Criterion) {
    let schedule = bench_schedule();
    let mut group = c.benchmark_group("total_earnings");
    for size in [10usize, 100, 1000] {
        let entries = create_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| total_earnings(black_box(entries), black_box(&schedule)));
        });
    }
    group.finish();
}

fn bench_monthly_report(c: &mut Criterion) {
    let schedule = bench_schedule();
    let mut group = c.benchmark_group("monthly_report");
    for size in [10usize, 100, 1000] {
        let entries = create_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| monthly_report(black_box(entries), black_box(2024), black_box(&schedule)));
        });
    }
    group.finish();
}

fn bench_dashboard_stats(c: &mut Criterion) {
    let entries = create_entries(1000);
    c.bench_function("dashboard_stats/1000", |b| {
        b.iter(|| dashboard_stats(black_box(&entries)));
    });
}

fn bench_sort_entries(c: &mut Criterion) {
    let entries = create_entries(1000);
    c.bench_function("sort_entries/date_desc/1000", |b| {
        b.iter(|| {
            sort_entries(
                black_box(&entries),
                SortField::Date,
                SortDirection::Descending,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_total_earnings,
    bench_monthly_report,
    bench_dashboard_stats,
    bench_sort_entries
);
criterion_main!(benches);
