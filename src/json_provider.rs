//! File-backed record source for the server binary.

use crate::earnings::{DateRange, EarningsProvider, EarningsRecord, ProviderError};

/// Record source backed by a JSON file holding an array of earnings records.
///
/// The file is read once at construction; range queries are served from
/// memory. Records arrive already materialized as `EarningsRecord` values —
/// this provider defines no schema beyond the record type itself.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    records: Vec<EarningsRecord>,
}

impl JsonFileProvider {
    /// Loads all records from `path`.
    ///
    /// # Errors
    /// `ProviderError::SourceUnavailable` when the file cannot be read and
    /// `ProviderError::Malformed` when its content is not a JSON array of
    /// earnings records.
    pub fn load(path: &str) -> Result<Self, ProviderError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ProviderError::SourceUnavailable(format!("{}: {}", path, err)))?;

        let records: Vec<EarningsRecord> = serde_json::from_str(&raw)
            .map_err(|err| ProviderError::Malformed(err.to_string()))?;

        let unstamped = records
            .iter()
            .filter(|record| record.timestamp_ms.is_none())
            .count();
        if unstamped > 0 {
            log::warn!(
                "{} of {} records carry no timestamp and will be skipped by analytics",
                unstamped,
                records.len()
            );
        }
        log::info!("Loaded {} earnings records from {}", records.len(), path);

        Ok(JsonFileProvider { records })
    }

    /// Every record in the file, unfiltered.
    pub fn all(&self) -> &[EarningsRecord] {
        &self.records
    }
}

impl EarningsProvider for JsonFileProvider {
    fn earnings(&self, range: &DateRange) -> Result<Vec<EarningsRecord>, ProviderError> {
        let matching = self
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
