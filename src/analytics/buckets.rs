//! Day-of-week × hour-of-day profit bucketing.

use super::local_day_and_hour;
use crate::earnings::{DateRange, EarningsRecord};
use chrono::{FixedOffset, Weekday};
use tracing::debug;

/// 7×24 grid of accumulated profit, indexed by local day-of-week and hour.
///
/// Rows follow `Weekday::num_days_from_monday` (0 = Monday … 6 = Sunday).
/// A matrix is built once per aggregation call and is immutable afterwards;
/// it is never cached or shared across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitMatrix {
    cells: [[f64; 24]; 7],
}

impl ProfitMatrix {
    pub(crate) fn new() -> Self {
        ProfitMatrix {
            cells: [[0.0; 24]; 7],
        }
    }

    pub(crate) fn add(&mut self, day: Weekday, hour: u32, profit: f64) {
        self.cells[day.num_days_from_monday() as usize][(hour % 24) as usize] += profit;
    }

    /// Accumulated profit for one bucket. `hour` is taken modulo 24.
    pub fn get(&self, day: Weekday, hour: u32) -> f64 {
        self.cells[day.num_days_from_monday() as usize][(hour % 24) as usize]
    }

    /// The 24 hourly buckets for one day.
    pub fn day_profile(&self, day: Weekday) -> &[f64; 24] {
        &self.cells[day.num_days_from_monday() as usize]
    }

    /// Sum over all 168 buckets.
    pub fn total(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }
}

/// Groups earnings records into a profit matrix for a date range.
///
/// The aggregator is a pure fold: it re-filters records against the range
/// (independently of any filtering the caller already applied), skips records
/// without a timestamp, and accumulates each survivor's profit into the bucket
/// derived in the aggregator's time zone. It raises no errors; an empty input
/// yields an all-zero matrix.
#[derive(Debug, Clone, Copy)]
pub struct TimeBucketAggregator {
    tz: FixedOffset,
}

impl TimeBucketAggregator {
    /// Creates an aggregator that derives buckets in the given time zone.
    pub fn new(tz: FixedOffset) -> Self {
        TimeBucketAggregator { tz }
    }

    /// Buckets all in-range records into a fresh profit matrix.
    pub fn aggregate(&self, records: &[EarningsRecord], range: &DateRange) -> ProfitMatrix {
        let mut matrix = ProfitMatrix::new();
        let mut bucketed = 0usize;

        for record in records {
            let ts = match record.timestamp_ms {
                Some(ts) => ts,
                None => continue,
            };
            if !range.contains(ts) {
                continue;
            }
            if let Some((day, hour)) = local_day_and_hour(ts, &self.tz) {
                matrix.add(day, hour, record.profit());
                bucketed += 1;
            }
        }

        debug!(
            "bucketed {} of {} records into profit matrix",
            bucketed,
            records.len()
        );

        matrix
    }
}
