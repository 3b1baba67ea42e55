//! Earnings analytics engine
//!
//! Stateless components that turn a batch of earnings records into day-of-week
//! × hour-of-day profit buckets, optimal work windows, point profit queries,
//! and platform rankings. Each component owns only its constructor-injected
//! configuration; no state survives a call.

pub mod buckets;
pub mod query;
pub mod ranking;
pub mod windows;

pub use buckets::{ProfitMatrix, TimeBucketAggregator};
pub use query::ProfitQueryEngine;
pub use ranking::{platform_totals, rank_by_profit};
pub use windows::{format_hour, format_schedule, WindowOptimizer, WorkWindow};

use chrono::{Datelike, FixedOffset, LocalResult, TimeZone, Timelike, Weekday};

/// Days of the week in matrix row order (Monday first).
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Derives the local day-of-week and hour-of-day for a timestamp.
///
/// The time zone is an explicit parameter rather than the ambient machine
/// zone, so derivation is deterministic wherever the analysis runs. Returns
/// `None` for timestamps chrono cannot represent.
pub fn local_day_and_hour(timestamp_ms: i64, tz: &FixedOffset) -> Option<(Weekday, u32)> {
    match tz.timestamp_millis_opt(timestamp_ms) {
        LocalResult::Single(local) => Some((local.weekday(), local.hour())),
        _ => None,
    }
}
