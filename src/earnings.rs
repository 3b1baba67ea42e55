//! Earnings records, date ranges, and the record-source abstraction.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// One completed delivery or work event.
///
/// Records arrive already deserialized from the storage collaborator; a record
/// whose source row carried no timestamp has `timestamp_ms == None` and is
/// skipped by the analytics rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsRecord {
    /// Completion time in milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
    /// Pay from the platform for this event
    pub base_pay: f64,
    /// Customer tip
    #[serde(default)]
    pub tips: f64,
    /// Platform or restaurant label; may be empty
    #[serde(default)]
    pub platform: String,
}

impl EarningsRecord {
    /// Creates a validated EarningsRecord.
    ///
    /// This is the data-entry boundary: a negative timestamp, base pay, or tip
    /// is rejected here so the analytics never have to clamp.
    pub fn new(
        timestamp_ms: i64,
        base_pay: f64,
        tips: f64,
        platform: impl Into<String>,
    ) -> Result<Self, EngineError> {
        if timestamp_ms < 0 {
            return Err(EngineError::InvalidTimestamp(
                "timestamp must be non-negative".to_string(),
            ));
        }
        if base_pay < 0.0 {
            return Err(EngineError::InvalidRecord(
                "base pay must be non-negative".to_string(),
            ));
        }
        if tips < 0.0 {
            return Err(EngineError::InvalidRecord(
                "tips must be non-negative".to_string(),
            ));
        }
        Ok(EarningsRecord {
            timestamp_ms: Some(timestamp_ms),
            base_pay,
            tips,
            platform: platform.into(),
        })
    }

    /// Profit for this event. Derived, never stored.
    pub fn profit(&self) -> f64 {
        self.base_pay + self.tips
    }

    /// Platform label with the empty string rendered as "Unknown".
    pub fn platform_label(&self) -> &str {
        if self.platform.is_empty() {
            "Unknown"
        } else {
            &self.platform
        }
    }
}

/// Inclusive date range in epoch milliseconds.
///
/// The `start <= end` invariant is enforced at construction; an inverted range
/// is an error, never silently swapped. Fields are private so a constructed
/// range always satisfies the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start_ms: i64,
    end_ms: i64,
}

impl DateRange {
    /// Creates a new DateRange.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDateRange` when `start_ms > end_ms`.
    pub fn new(start_ms: i64, end_ms: i64) -> Result<Self, EngineError> {
        if start_ms > end_ms {
            return Err(EngineError::InvalidDateRange(format!(
                "start ({}) must not be after end ({})",
                start_ms, end_ms
            )));
        }
        Ok(DateRange { start_ms, end_ms })
    }

    /// Range covering the `days` days ending at `reference_ms`.
    pub fn days_back(reference_ms: i64, days: i64) -> Result<Self, EngineError> {
        if days < 0 {
            return Err(EngineError::InvalidDateRange(
                "days back must be non-negative".to_string(),
            ));
        }
        DateRange::new(reference_ms - days * MS_PER_DAY, reference_ms)
    }

    /// Start of the range (inclusive).
    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// End of the range (inclusive).
    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    /// Whether `timestamp_ms` falls inside the range.
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms <= self.end_ms
    }

    /// Whole days spanned by the range (floored).
    ///
    /// A range whose endpoints coincide spans 0 days, which the planner treats
    /// as "no history yet" rather than invalid input.
    pub fn days(&self) -> i64 {
        (self.end_ms - self.start_ms) / MS_PER_DAY
    }
}

/// Errors that can occur when querying a record source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Source could not be reached or opened
    SourceUnavailable(String),
    /// Source content could not be decoded into earnings records
    Malformed(String),
    /// Generic error message
    Other(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
            ProviderError::Malformed(msg) => write!(f, "Malformed source data: {}", msg),
            ProviderError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trait for record-source abstraction.
///
/// The engine never fetches data itself; a provider hands it a finite,
/// already-materialized batch of records for a requested range. Implementations
/// can be in-memory (for testing), file-backed, or a database client.
pub trait EarningsProvider {
    /// Returns all records whose timestamp falls within `range`.
    ///
    /// The engine re-filters records against the range regardless, so a
    /// provider returning a superset is tolerated but wasteful.
    fn earnings(&self, range: &DateRange) -> Result<Vec<EarningsRecord>, ProviderError>;
}

/// In-memory record source for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEarningsProvider {
    records: Vec<EarningsRecord>,
}

impl InMemoryEarningsProvider {
    /// Creates a new empty in-memory provider.
    pub fn new() -> Self {
        InMemoryEarningsProvider {
            records: Vec::new(),
        }
    }

    /// Adds records to the store.
    pub fn add_records(&mut self, records: Vec<EarningsRecord>) {
        self.records.extend(records);
    }

    /// Clears all stored records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl EarningsProvider for InMemoryEarningsProvider {
    fn earnings(&self, range: &DateRange) -> Result<Vec<EarningsRecord>, ProviderError> {
        let matching: Vec<EarningsRecord> = self
            .records
            .iter()
            .filter(|record| {
                record
                    .timestamp_ms
                    .map(|ts| range.contains(ts))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        Ok(matching)
    }
}
