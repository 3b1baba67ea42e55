//! Error types for the analytics engine

/// Caller-input violations rejected by the engine.
///
/// Every variant is raised synchronously at the call that supplied the bad
/// input; validation is never deferred into a later computation step. Empty
/// results are not errors: zero matching records, a zero-day range, and an
/// unprofitable window all resolve to zero values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Date range with start after end
    InvalidDateRange(String),
    /// Hour outside 0-23
    InvalidHour(String),
    /// Negative or unrepresentable timestamp
    InvalidTimestamp(String),
    /// Window length outside 1-24 hours
    InvalidWindowLength(u32),
    /// Negative monetary goal, expense, or income
    InvalidGoal(String),
    /// Earnings record with a negative amount
    InvalidRecord(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidDateRange(msg) => write!(f, "Invalid date range: {}", msg),
            EngineError::InvalidHour(msg) => write!(f, "Invalid hour: {}", msg),
            EngineError::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {}", msg),
            EngineError::InvalidWindowLength(hours) => {
                write!(f, "hours must be between 1 and 24 (got {})", hours)
            }
            EngineError::InvalidGoal(msg) => write!(f, "Invalid goal: {}", msg),
            EngineError::InvalidRecord(msg) => write!(f, "Invalid record: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
