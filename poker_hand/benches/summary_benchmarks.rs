use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chrono::{Duration, TimeZone, Utc};
use poker_hand::charts::{bankroll_chart, bankroll_series, roi_series};
use poker_hand::summary::{classify, parse_summary_text};
use poker_hand::tournament::{TournamentRecord, TournamentType};

const SUMMARY: &str = "\
Tournament #183300341, Bounty Hunters Special $2.50 [7-Max], Hold'em No Limit
Buy-in: $1.3+$0.2+$1
2245 Players
Total Prize Pool: $5,163.5
Tournament started 2025/01/13 12:30:00
316th : Hero, $1
You finished the tournament in 316th place.
You made 1 re-entries and received a total of $1.";

/// Records spread over consecutive days, a few per day
fn history(n: usize) -> Vec<TournamentRecord> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 0).unwrap();
    (0..n)
        .map(|i| TournamentRecord {
            id: i.to_string(),
            name: format!("Tournament #{i}, Turbo $1, Hold'em No Limit"),
            kind: TournamentType::Turbo,
            buy_in: 1.0 + (i % 5) as f64,
            players: 500,
            total_prize_pool: 500.0,
            started: start + Duration::hours(i as i64 * 6),
            my_place: (i % 200) as u32 + 1,
            my_prize: if i % 7 == 0 { 12.5 } else { 0.0 },
            reentries: 0,
            free: i % 11 == 0,
        })
        .collect()
}

/// Benchmark parsing a complete summary
fn bench_parse_summary(c: &mut Criterion) {
    c.bench_function("parse_summary", |b| {
        b.iter(|| parse_summary_text(black_box(SUMMARY)));
    });
}

/// Benchmark the worst case of the classification table (Classic fallback)
fn bench_classify_fallback(c: &mut Criterion) {
    let line = "Tournament #1, Evening Mystery Event $3, Hold'em No Limit";
    c.bench_function("classify_fallback", |b| {
        b.iter(|| classify(black_box("Evening Mystery Event $3"), black_box(line)));
    });
}

/// Benchmark chart series over growing histories
fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_series");

    for n in [100, 1_000, 10_000] {
        let records = history(n);
        group.bench_with_input(BenchmarkId::new("bankroll", n), &records, |b, records| {
            b.iter(|| bankroll_series(records));
        });
        group.bench_with_input(BenchmarkId::new("roi", n), &records, |b, records| {
            b.iter(|| roi_series(records));
        });
    }

    group.finish();
}

/// Benchmark rendering the bankroll page
fn bench_render(c: &mut Criterion) {
    let records = history(1_000);
    c.bench_function("render_bankroll_chart", |b| {
        b.iter(|| bankroll_chart(&records).map(|chart| chart.render()));
    });
}

criterion_group!(summary, bench_parse_summary, bench_classify_fallback);
criterion_group!(charts, bench_series, bench_render);
criterion_main!(summary, charts);
