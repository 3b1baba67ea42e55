//! Ad-hoc expected-profit queries over raw records.

use super::local_day_and_hour;
use crate::earnings::{DateRange, EarningsRecord};
use crate::error::EngineError;
use chrono::FixedOffset;
use tracing::debug;

/// Answers "expected profit if I work day X, hours [a, b]" directly from raw
/// records.
///
/// The engine deliberately does not build a `ProfitMatrix`: the caller's hour
/// bounds are arbitrary and may wrap past midnight, so a single O(records)
/// pass is simpler than materializing all 168 buckets for one question.
#[derive(Debug, Clone, Copy)]
pub struct ProfitQueryEngine {
    tz: FixedOffset,
}

impl ProfitQueryEngine {
    /// Creates a query engine that derives local time in the given zone.
    pub fn new(tz: FixedOffset) -> Self {
        ProfitQueryEngine { tz }
    }

    /// Sums historical profit for the reference timestamp's day of week over
    /// the hour span `[start_hour, end_hour]`.
    ///
    /// A span with `start_hour > end_hour` wraps past midnight: 21 → 2 means
    /// 9 PM through 2 AM. No matching records is a valid outcome and returns
    /// 0.0, not an error.
    ///
    /// # Errors
    /// `EngineError::InvalidHour` when either hour exceeds 23, and
    /// `EngineError::InvalidTimestamp` when the reference timestamp is
    /// negative. The date range is valid by construction.
    pub fn expected_profit(
        &self,
        records: &[EarningsRecord],
        reference_ts_ms: i64,
        range: &DateRange,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<f64, EngineError> {
        if start_hour > 23 {
            return Err(EngineError::InvalidHour(
                "start hour must be between 0 and 23".to_string(),
            ));
        }
        if end_hour > 23 {
            return Err(EngineError::InvalidHour(
                "end hour must be between 0 and 23".to_string(),
            ));
        }
        if reference_ts_ms < 0 {
            return Err(EngineError::InvalidTimestamp(
                "reference timestamp must be non-negative".to_string(),
            ));
        }

        let (target_day, _) = local_day_and_hour(reference_ts_ms, &self.tz).ok_or_else(|| {
            EngineError::InvalidTimestamp(
                "reference timestamp is outside the representable range".to_string(),
            )
        })?;

        let total = records
            .iter()
            .filter_map(|record| {
                let ts = record.timestamp_ms?;
                if !range.contains(ts) {
                    return None;
                }
                let (day, hour) = local_day_and_hour(ts, &self.tz)?;
                if day != target_day {
                    return None;
                }
                let in_span = if start_hour <= end_hour {
                    hour >= start_hour && hour <= end_hour
                } else {
                    // Overnight span, e.g. 21 -> 2
                    hour >= start_hour || hour <= end_hour
                };
                in_span.then(|| record.profit())
            })
            .sum();

        debug!(
            "expected profit for {:?} hours {}..={}: {}",
            target_day, start_hour, end_hour, total
        );

        Ok(total)
    }
}
