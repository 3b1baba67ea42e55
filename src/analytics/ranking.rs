//! Label-by-profit ranking.

use crate::earnings::EarningsRecord;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Ranks labels by their paired profit, descending.
///
/// A lenient convenience utility, not a validating boundary: mismatched slice
/// lengths yield an empty vec. The sort is stable, so equal-profit labels keep
/// their original relative order. Works identically for platforms and
/// restaurants — anything that is a label with a score.
pub fn rank_by_profit(labels: &[String], profits: &[f64]) -> Vec<String> {
    if labels.len() != profits.len() {
        return Vec::new();
    }

    let mut ranked: Vec<(&String, f64)> = labels.iter().zip(profits.iter().copied()).collect();
    // sort_by_key is stable; OrderedFloat totals the order over f64
    ranked.sort_by_key(|&(_, profit)| Reverse(OrderedFloat(profit)));

    ranked.into_iter().map(|(label, _)| label.clone()).collect()
}

/// Accumulates per-platform profit totals from a record batch.
///
/// Returns parallel label/total slices in first-appearance order, ready for
/// `rank_by_profit`. Records with an empty platform are grouped under
/// "Unknown".
pub fn platform_totals(records: &[EarningsRecord]) -> (Vec<String>, Vec<f64>) {
    let mut labels: Vec<String> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let label = record.platform_label();
        match index.get(label) {
            Some(&i) => totals[i] += record.profit(),
            None => {
                index.insert(label.to_string(), labels.len());
                labels.push(label.to_string());
                totals.push(record.profit());
            }
        }
    }

    (labels, totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ranks_descending_by_profit() {
        let ranked = rank_by_profit(&labels(&["Grubhub", "DoorDash", "UberEats"]), &[120.0, 300.0, 210.5]);
        assert_eq!(ranked, labels(&["DoorDash", "UberEats", "Grubhub"]));
    }

    #[test]
    fn test_ties_keep_original_order() {
        let ranked = rank_by_profit(&labels(&["A", "B", "C"]), &[5.0, 5.0, 3.0]);
        assert_eq!(ranked, labels(&["A", "B", "C"]));
    }

    #[test]
    fn test_length_mismatch_yields_empty() {
        let ranked = rank_by_profit(&labels(&["A", "B"]), &[5.0]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_inputs_yield_empty() {
        assert!(rank_by_profit(&[], &[]).is_empty());
    }

    #[test]
    fn test_platform_totals_accumulate_and_rename_empty() {
        let records = vec![
            EarningsRecord::new(0, 10.0, 2.0, "DoorDash").unwrap(),
            EarningsRecord::new(1, 5.0, 0.0, "").unwrap(),
            EarningsRecord::new(2, 4.0, 1.0, "DoorDash").unwrap(),
        ];

        let (names, totals) = platform_totals(&records);

        assert_eq!(names, labels(&["DoorDash", "Unknown"]));
        assert_eq!(totals, vec![17.0, 5.0]);
    }
}
