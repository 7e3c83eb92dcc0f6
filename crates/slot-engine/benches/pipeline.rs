//! Criterion benchmark for the end-to-end suggestion pipeline.
//!
//! Simulates a realistic week-long request: five business days of preferred
//! ranges, twenty participants, a few hundred busy intervals.

use chrono::{Duration, TimeZone, Utc};
use chrono_tz::Tz;
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::{suggest_times, BusyInterval, ProposalSpec, TimeRange};
use std::hint::black_box;

fn week_request() -> (ProposalSpec, Vec<BusyInterval>) {
    let monday = Utc.with_ymd_and_hms(2026, 3, 16, 8, 0, 0).unwrap();

    // Mon-Fri, 08:00-18:00 each day.
    let preferred_ranges: Vec<TimeRange> = (0..5)
        .map(|day| TimeRange {
            start: monday + Duration::days(day),
            end: monday + Duration::days(day) + Duration::hours(10),
        })
        .collect();

    let participant_ids: Vec<String> = (0..20).map(|i| format!("p{i}")).collect();

    // A deterministic spread of one-hour commitments across the week.
    let mut busy_intervals = Vec::new();
    for day in 0..5i64 {
        for (i, id) in participant_ids.iter().enumerate() {
            for meeting in 0..3i64 {
                let start = monday
                    + Duration::days(day)
                    + Duration::minutes(30 * ((i as i64 + meeting * 7 + day * 3) % 18));
                busy_intervals.push(BusyInterval {
                    participant_id: id.clone(),
                    start,
                    end: start + Duration::hours(1),
                });
            }
        }
    }

    let spec = ProposalSpec {
        duration_minutes: 60,
        preferred_ranges,
        priority: 5,
        participant_ids,
        timezone: Tz::UTC,
    };

    (spec, busy_intervals)
}

fn bench_suggest(c: &mut Criterion) {
    let (spec, busy_intervals) = week_request();

    c.bench_function("suggest_week_20_participants", |b| {
        b.iter(|| suggest_times(black_box(&spec), black_box(&busy_intervals)).unwrap())
    });
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
