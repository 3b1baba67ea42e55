//! Optimal work-window search over a profit matrix.

use super::{ProfitMatrix, WEEK};
use crate::error::EngineError;
use chrono::Weekday;
use std::collections::HashMap;

/// The best contiguous block of hours for one day of the week.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkWindow {
    /// Day of week the window belongs to
    pub day: Weekday,
    /// First hour of the window (0-23, local time)
    pub start_hour: u32,
    /// Window length in hours (1-24)
    pub length_hours: u32,
    /// Accumulated profit over the window's buckets
    pub total_profit: f64,
}

impl WorkWindow {
    /// Hour the window ends at, wrapping past midnight when needed.
    pub fn end_hour(&self) -> u32 {
        (self.start_hour + self.length_hours) % 24
    }

    /// Human-readable label, e.g. "Monday 5:00 PM - 9:00 PM".
    pub fn label(&self) -> String {
        format!(
            "{} {} - {}",
            day_name(self.day),
            format_hour(self.start_hour),
            format_hour(self.end_hour())
        )
    }
}

/// Finds the most profitable contiguous hour block per day of week.
///
/// The search is exhaustive: every start hour is a candidate, and windows wrap
/// around midnight within the day's own 24-hour profile (a window never
/// crosses into the next day's buckets). Ties go to the earliest start hour,
/// so results are reproducible across runs; a 24-hour window always reports
/// start hour 0.
#[derive(Debug, Clone, Copy)]
pub struct WindowOptimizer {
    window_hours: u32,
}

impl WindowOptimizer {
    /// Creates an optimizer for windows of `window_hours` contiguous hours.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidWindowLength` unless `1 <= window_hours <= 24`.
    pub fn new(window_hours: u32) -> Result<Self, EngineError> {
        if !(1..=24).contains(&window_hours) {
            return Err(EngineError::InvalidWindowLength(window_hours));
        }
        Ok(WindowOptimizer { window_hours })
    }

    /// Window length this optimizer searches for.
    pub fn window_hours(&self) -> u32 {
        self.window_hours
    }

    /// Returns the best window for every day of the week.
    pub fn find_best_windows(&self, matrix: &ProfitMatrix) -> HashMap<Weekday, WorkWindow> {
        let mut best = HashMap::with_capacity(WEEK.len());

        for &day in WEEK.iter() {
            let profile = matrix.day_profile(day);
            let mut best_start = 0u32;
            let mut best_sum = window_sum(profile, 0, self.window_hours);

            for start in 1..24 {
                let sum = window_sum(profile, start, self.window_hours);
                // Strict comparison keeps the earliest start on ties
                if sum > best_sum {
                    best_sum = sum;
                    best_start = start;
                }
            }

            best.insert(
                day,
                WorkWindow {
                    day,
                    start_hour: best_start,
                    length_hours: self.window_hours,
                    total_profit: best_sum,
                },
            );
        }

        best
    }
}

fn window_sum(profile: &[f64; 24], start: u32, length: u32) -> f64 {
    (0..length)
        .map(|k| profile[((start + k) % 24) as usize])
        .sum()
}

/// Formats an hour of day as a 12-hour clock label, e.g. "5:00 PM".
pub fn format_hour(hour: u32) -> String {
    let hour = hour % 24;
    let (display, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:00 {}", display, suffix)
}

/// Full English day name for a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Renders a per-day window map as a Monday-through-Sunday text block.
///
/// Days whose best window carries no profit are listed as having no recorded
/// earnings rather than suggesting an arbitrary block.
pub fn format_schedule(windows: &HashMap<Weekday, WorkWindow>) -> String {
    let mut lines = Vec::with_capacity(WEEK.len());

    for &day in WEEK.iter() {
        match windows.get(&day) {
            Some(window) if window.total_profit > 0.0 => {
                lines.push(format!(
                    "{}: {} - {} (expected ${:.2})",
                    day_name(day),
                    format_hour(window.start_hour),
                    format_hour(window.end_hour()),
                    window.total_profit
                ));
            }
            _ => lines.push(format!("{}: no recorded earnings", day_name(day))),
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_with(day: Weekday, hourly: &[(u32, f64)]) -> ProfitMatrix {
        let mut matrix = ProfitMatrix::new();
        for &(hour, profit) in hourly {
            matrix.add(day, hour, profit);
        }
        matrix
    }

    #[test]
    fn test_optimizer_rejects_out_of_range_lengths() {
        assert!(matches!(
            WindowOptimizer::new(0),
            Err(EngineError::InvalidWindowLength(0))
        ));
        assert!(matches!(
            WindowOptimizer::new(25),
            Err(EngineError::InvalidWindowLength(25))
        ));
        assert!(WindowOptimizer::new(1).is_ok());
        assert!(WindowOptimizer::new(24).is_ok());
    }

    #[test]
    fn test_finds_peak_two_hour_window() {
        let matrix = matrix_with(Weekday::Mon, &[(0, 10.0), (5, 50.0), (6, 50.0)]);
        let optimizer = WindowOptimizer::new(2).unwrap();

        let windows = optimizer.find_best_windows(&matrix);
        let monday = &windows[&Weekday::Mon];

        assert_eq!(monday.start_hour, 5);
        assert_eq!(monday.total_profit, 100.0);
        assert_eq!(monday.end_hour(), 7);
    }

    #[test]
    fn test_window_wraps_past_midnight() {
        // Profit concentrated at 23:00 and 00:00; a 2-hour window starting at
        // 23 must capture both
        let matrix = matrix_with(Weekday::Fri, &[(23, 40.0), (0, 35.0), (12, 30.0)]);
        let optimizer = WindowOptimizer::new(2).unwrap();

        let friday = &optimizer.find_best_windows(&matrix)[&Weekday::Fri];

        assert_eq!(friday.start_hour, 23);
        assert_eq!(friday.total_profit, 75.0);
        assert_eq!(friday.end_hour(), 1);
    }

    #[test]
    fn test_tie_break_prefers_earliest_start() {
        // All-zero day: every window ties at 0.0
        let matrix = ProfitMatrix::new();
        let optimizer = WindowOptimizer::new(3).unwrap();

        for (_, window) in optimizer.find_best_windows(&matrix) {
            assert_eq!(window.start_hour, 0, "ties must resolve to hour 0");
            assert_eq!(window.total_profit, 0.0);
        }
    }

    #[test]
    fn test_full_day_window_starts_at_midnight() {
        let matrix = matrix_with(Weekday::Wed, &[(8, 12.0), (20, 30.0)]);
        let optimizer = WindowOptimizer::new(24).unwrap();

        let wednesday = &optimizer.find_best_windows(&matrix)[&Weekday::Wed];

        assert_eq!(wednesday.start_hour, 0);
        assert_eq!(wednesday.total_profit, 42.0);
        assert_eq!(wednesday.end_hour(), 0);
    }

    #[test]
    fn test_every_day_gets_a_window() {
        let matrix = ProfitMatrix::new();
        let windows = WindowOptimizer::new(4).unwrap().find_best_windows(&matrix);
        assert_eq!(windows.len(), 7);
    }

    #[test]
    fn test_window_beats_every_other_candidate() {
        let matrix = matrix_with(
            Weekday::Sat,
            &[(2, 5.0), (9, 20.0), (10, 1.0), (11, 25.0), (18, 8.0)],
        );
        let optimizer = WindowOptimizer::new(3).unwrap();
        let best = optimizer.find_best_windows(&matrix)[&Weekday::Sat].clone();

        let profile = matrix.day_profile(Weekday::Sat);
        for start in 0..24u32 {
            let candidate: f64 = (0..3).map(|k| profile[((start + k) % 24) as usize]).sum();
            assert!(
                best.total_profit >= candidate,
                "window starting at {} beat the reported optimum",
                start
            );
        }
    }

    #[test]
    fn test_format_hour_twelve_hour_labels() {
        assert_eq!(format_hour(0), "12:00 AM");
        assert_eq!(format_hour(5), "5:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(17), "5:00 PM");
        assert_eq!(format_hour(23), "11:00 PM");
    }

    #[test]
    fn test_format_schedule_lists_monday_through_sunday() {
        let matrix = matrix_with(
            Weekday::Mon,
            &[(17, 40.0), (18, 20.0), (19, 15.0), (20, 10.5)],
        );
        let windows = WindowOptimizer::new(4).unwrap().find_best_windows(&matrix);
        let schedule = format_schedule(&windows);

        let lines: Vec<&str> = schedule.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Monday: 5:00 PM - 9:00 PM (expected $85.50)");
        assert_eq!(lines[6], "Sunday: no recorded earnings");
    }
}
