//! Monthly financial planning and gap analysis.

use crate::analytics::{format_schedule, TimeBucketAggregator, WindowOptimizer};
use crate::earnings::{DateRange, EarningsRecord};
use crate::error::EngineError;
use chrono::FixedOffset;
use serde::Serialize;

/// Days in the projection month. The projection is a linear extrapolation of
/// the historical daily average, not a calendar computation.
const PROJECTION_DAYS: f64 = 30.0;

/// A monthly financial projection with gap analysis against a target income.
///
/// Every field is computed by the planner; callers consume the value and
/// discard it. Nothing persists between plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialPlan {
    /// Monthly income the user wants to reach
    pub target_monthly_income: f64,
    /// Estimated monthly expenses
    pub estimated_expenses: f64,
    /// Monthly income from sources other than deliveries
    pub other_monthly_income: f64,
    /// Delivery-derived projection plus other income
    pub projected_monthly_income: f64,
    /// Projected income minus estimated expenses
    pub projected_net_profit: f64,
    /// Target minus projected income; negative means surplus
    pub income_gap: f64,
    /// Extra daily earnings needed to close a positive gap
    pub additional_daily_required: f64,
    /// Best work windows per day, rendered as text
    pub optimal_schedule: String,
    /// Deterministic narrative derived from the numeric fields above
    pub recommendations: Vec<String>,
}

/// Builds financial plans from historical earnings and user-set goals.
///
/// One planner instance is a single analysis session's configuration. The
/// setters validate eagerly, at set-time, so a plan is never computed from a
/// goal that was invalid when supplied.
#[derive(Debug, Clone)]
pub struct FinancialPlanner {
    date_range: DateRange,
    tz: FixedOffset,
    target_monthly_income: f64,
    estimated_expenses: f64,
    other_monthly_income: f64,
    target_work_hours_per_day: u32,
}

impl FinancialPlanner {
    /// Creates a planner for the given analysis range and time zone.
    ///
    /// Goals default to zero and the target work window to 4 hours; an
    /// unconfigured planner produces a well-defined all-zero plan.
    pub fn new(date_range: DateRange, tz: FixedOffset) -> Self {
        FinancialPlanner {
            date_range,
            tz,
            target_monthly_income: 0.0,
            estimated_expenses: 0.0,
            other_monthly_income: 0.0,
            target_work_hours_per_day: 4,
        }
    }

    /// Sets the monthly income target.
    pub fn set_target_monthly_income(&mut self, amount: f64) -> Result<(), EngineError> {
        if amount < 0.0 {
            return Err(EngineError::InvalidGoal(
                "target monthly income must be non-negative".to_string(),
            ));
        }
        self.target_monthly_income = amount;
        Ok(())
    }

    /// Sets estimated monthly expenses.
    pub fn set_estimated_expenses(&mut self, amount: f64) -> Result<(), EngineError> {
        if amount < 0.0 {
            return Err(EngineError::InvalidGoal(
                "estimated expenses must be non-negative".to_string(),
            ));
        }
        self.estimated_expenses = amount;
        Ok(())
    }

    /// Sets monthly income from sources other than deliveries.
    pub fn set_other_monthly_income(&mut self, amount: f64) -> Result<(), EngineError> {
        if amount < 0.0 {
            return Err(EngineError::InvalidGoal(
                "other monthly income must be non-negative".to_string(),
            ));
        }
        self.other_monthly_income = amount;
        Ok(())
    }

    /// Sets how many contiguous hours per day the user intends to work.
    pub fn set_target_work_hours_per_day(&mut self, hours: u32) -> Result<(), EngineError> {
        if !(1..=24).contains(&hours) {
            return Err(EngineError::InvalidWindowLength(hours));
        }
        self.target_work_hours_per_day = hours;
        Ok(())
    }

    /// Replaces the analysis date range.
    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    /// Analyzes the `days` days ending at `reference_ms`.
    pub fn set_date_range_days_back(
        &mut self,
        reference_ms: i64,
        days: i64,
    ) -> Result<(), EngineError> {
        self.date_range = DateRange::days_back(reference_ms, days)?;
        Ok(())
    }

    /// The analysis range this planner is configured for.
    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    /// Builds a complete plan from a record batch.
    ///
    /// Aggregates the in-range records, finds the best work windows for the
    /// configured daily hours, and projects the result against the goals.
    pub fn create_plan(&self, records: &[EarningsRecord]) -> Result<FinancialPlan, EngineError> {
        let aggregator = TimeBucketAggregator::new(self.tz);
        let matrix = aggregator.aggregate(records, &self.date_range);

        let optimizer = WindowOptimizer::new(self.target_work_hours_per_day)?;
        let schedule = format_schedule(&optimizer.find_best_windows(&matrix));

        let delivery_count = records
            .iter()
            .filter(|record| {
                record
                    .timestamp_ms
                    .map(|ts| self.date_range.contains(ts))
                    .unwrap_or(false)
            })
            .count();

        Ok(self.plan_from_totals(
            matrix.total(),
            self.date_range.days(),
            delivery_count,
            schedule,
        ))
    }

    /// Projects pre-computed historical totals into a monthly plan.
    ///
    /// A zero-day range means "no history yet", not invalid input: the divisor
    /// is floor-clamped to 1 rather than erroring.
    pub fn plan_from_totals(
        &self,
        total_historical_earnings: f64,
        days_analyzed: i64,
        total_delivery_count: usize,
        optimal_schedule: String,
    ) -> FinancialPlan {
        let daily_average = total_historical_earnings / days_analyzed.max(1) as f64;
        let projected_delivery_income = daily_average * PROJECTION_DAYS;
        let projected_monthly_income = projected_delivery_income + self.other_monthly_income;
        let income_gap = self.target_monthly_income - projected_monthly_income;
        let additional_daily_required = if income_gap > 0.0 {
            income_gap / PROJECTION_DAYS
        } else {
            0.0
        };
        let projected_net_profit = projected_monthly_income - self.estimated_expenses;

        let mut plan = FinancialPlan {
            target_monthly_income: self.target_monthly_income,
            estimated_expenses: self.estimated_expenses,
            other_monthly_income: self.other_monthly_income,
            projected_monthly_income,
            projected_net_profit,
            income_gap,
            additional_daily_required,
            optimal_schedule,
            recommendations: Vec::new(),
        };
        plan.recommendations =
            self.build_recommendations(&plan, daily_average, days_analyzed, total_delivery_count);
        plan
    }

    fn build_recommendations(
        &self,
        plan: &FinancialPlan,
        daily_average: f64,
        days_analyzed: i64,
        total_delivery_count: usize,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        recommendations.push(format!(
            "Projected monthly income is ${:.2}: ${:.2} from deliveries \
             (${:.2}/day average across {} deliveries over {} days) plus ${:.2} other income.",
            plan.projected_monthly_income,
            plan.projected_monthly_income - plan.other_monthly_income,
            daily_average,
            total_delivery_count,
            days_analyzed,
            plan.other_monthly_income
        ));

        if plan.income_gap > 0.0 {
            recommendations.push(format!(
                "You are ${:.2} short of the ${:.2} target; earning an additional \
                 ${:.2} per day closes the gap.",
                plan.income_gap, plan.target_monthly_income, plan.additional_daily_required
            ));
        } else {
            recommendations.push(format!(
                "You are on pace to meet the ${:.2} target with ${:.2} to spare.",
                plan.target_monthly_income,
                plan.income_gap.abs()
            ));
        }

        recommendations.push(format!(
            "Most profitable {}-hour windows:\n{}",
            self.target_work_hours_per_day, plan.optimal_schedule
        ));

        if plan.projected_net_profit < 0.0 {
            recommendations.push(format!(
                "Warning: estimated expenses of ${:.2} exceed projected income; \
                 projected net profit is -${:.2}.",
                plan.estimated_expenses, -plan.projected_net_profit
            ));
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earnings::MS_PER_DAY;
    use chrono::{TimeZone, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn planner(days: i64) -> FinancialPlanner {
        let range = DateRange::new(0, days * MS_PER_DAY).unwrap();
        FinancialPlanner::new(range, utc())
    }

    #[test]
    fn test_setters_reject_negative_goals() {
        let mut p = planner(30);
        assert!(matches!(
            p.set_target_monthly_income(-1.0),
            Err(EngineError::InvalidGoal(_))
        ));
        assert!(matches!(
            p.set_estimated_expenses(-0.01),
            Err(EngineError::InvalidGoal(_))
        ));
        assert!(matches!(
            p.set_other_monthly_income(-100.0),
            Err(EngineError::InvalidGoal(_))
        ));
    }

    #[test]
    fn test_setter_rejects_out_of_range_work_hours() {
        let mut p = planner(30);
        assert!(matches!(
            p.set_target_work_hours_per_day(0),
            Err(EngineError::InvalidWindowLength(0))
        ));
        assert!(matches!(
            p.set_target_work_hours_per_day(25),
            Err(EngineError::InvalidWindowLength(25))
        ));
        assert!(p.set_target_work_hours_per_day(24).is_ok());
    }

    #[test]
    fn test_positive_gap_and_additional_daily_required() {
        let mut p = planner(10);
        p.set_target_monthly_income(2000.0).unwrap();

        // 500 over 10 days -> 50/day -> 1500/month projected
        let plan = p.plan_from_totals(500.0, 10, 40, String::new());

        assert_eq!(plan.projected_monthly_income, 1500.0);
        assert_eq!(plan.income_gap, 500.0);
        assert!((plan.additional_daily_required - 500.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_surplus_gap_is_negative_and_requires_nothing() {
        let mut p = planner(10);
        p.set_target_monthly_income(2000.0).unwrap();
        p.set_other_monthly_income(1000.0).unwrap();

        // 500 over 10 days -> 1500 projected + 1000 other = 2500
        let plan = p.plan_from_totals(500.0, 10, 40, String::new());

        assert_eq!(plan.projected_monthly_income, 2500.0);
        assert_eq!(plan.income_gap, -500.0);
        assert_eq!(plan.additional_daily_required, 0.0);
    }

    #[test]
    fn test_zero_day_range_means_no_history() {
        let p = planner(0);
        let plan = p.plan_from_totals(100.0, 0, 3, String::new());

        // Divisor clamps to 1 day, never divides by zero
        assert_eq!(plan.projected_monthly_income, 3000.0);
    }

    #[test]
    fn test_net_profit_and_warning() {
        let mut p = planner(30);
        p.set_estimated_expenses(2000.0).unwrap();

        // 900 over 30 days -> 900/month projected
        let plan = p.plan_from_totals(900.0, 30, 60, String::new());

        assert_eq!(plan.projected_net_profit, -1100.0);
        assert!(
            plan.recommendations
                .iter()
                .any(|line| line.starts_with("Warning:")),
            "negative net profit must add a warning"
        );
    }

    #[test]
    fn test_no_warning_when_net_profit_non_negative() {
        let mut p = planner(30);
        p.set_estimated_expenses(500.0).unwrap();

        let plan = p.plan_from_totals(900.0, 30, 60, String::new());

        assert_eq!(plan.projected_net_profit, 400.0);
        assert!(plan
            .recommendations
            .iter()
            .all(|line| !line.starts_with("Warning:")));
    }

    #[test]
    fn test_create_plan_embeds_schedule_and_totals() {
        // One Monday evening record inside a six-day window
        let ts = Utc
            .with_ymd_and_hms(2024, 1, 15, 18, 0, 0)
            .unwrap()
            .timestamp_millis();
        let range = DateRange::new(ts - 3 * MS_PER_DAY, ts + 3 * MS_PER_DAY).unwrap();

        let mut p = FinancialPlanner::new(range, utc());
        p.set_target_monthly_income(1000.0).unwrap();
        p.set_target_work_hours_per_day(2).unwrap();

        let records = vec![EarningsRecord::new(ts, 20.0, 5.0, "DoorDash").unwrap()];
        let plan = p.create_plan(&records).unwrap();

        // 25 over 6 days -> 125/month projected
        assert!((plan.projected_monthly_income - 25.0 / 6.0 * 30.0).abs() < 1e-9);
        // Starts 17 and 18 tie at $25; the earliest wins
        assert!(plan.optimal_schedule.contains("Monday: 5:00 PM - 7:00 PM"));
        assert!(plan.optimal_schedule.contains("Sunday: no recorded earnings"));
        assert!(plan.income_gap > 0.0);
    }

    #[test]
    fn test_set_date_range_days_back() {
        let mut p = planner(30);
        p.set_date_range_days_back(60 * MS_PER_DAY, 14).unwrap();
        assert_eq!(p.date_range().days(), 14);
        assert_eq!(p.date_range().end_ms(), 60 * MS_PER_DAY);

        assert!(p.set_date_range_days_back(0, -5).is_err());
    }
}
