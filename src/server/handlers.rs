//! HTTP request handlers for API endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::analytics::windows::day_name;
use crate::analytics::{
    platform_totals, rank_by_profit, ProfitQueryEngine, TimeBucketAggregator, WindowOptimizer,
    WEEK,
};
use crate::earnings::DateRange;
use crate::planner::{FinancialPlan, FinancialPlanner};

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// Query parameters shared by range-scoped endpoints
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub start: i64,
    pub end: i64,
}

impl RangeParams {
    fn to_range(&self) -> Result<DateRange, ApiError> {
        Ok(DateRange::new(self.start, self.end)?)
    }
}

/// Response for the earnings summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_profit: f64,
    pub delivery_count: usize,
    pub days: i64,
    pub platforms: Vec<PlatformProfit>,
}

/// Per-platform accumulated profit
#[derive(Debug, Serialize)]
pub struct PlatformProfit {
    pub platform: String,
    pub profit: f64,
}

/// GET /earnings/summary - Totals and platform ranking for a range
pub async fn earnings_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let range = params.to_range()?;
    let records = state.provider.earnings(&range)?;

    let matrix = TimeBucketAggregator::new(state.tz).aggregate(&records, &range);
    let (labels, profits) = platform_totals(&records);
    let by_label: std::collections::HashMap<&String, f64> =
        labels.iter().zip(profits.iter().copied()).collect();

    let platforms = rank_by_profit(&labels, &profits)
        .into_iter()
        .map(|platform| {
            let profit = by_label.get(&platform).copied().unwrap_or(0.0);
            PlatformProfit { platform, profit }
        })
        .collect();

    Ok(Json(SummaryResponse {
        total_profit: matrix.total(),
        delivery_count: records.len(),
        days: range.days(),
        platforms,
    }))
}

/// Query parameters for schedule optimization
#[derive(Debug, Deserialize)]
pub struct ScheduleParams {
    pub start: i64,
    pub end: i64,
    pub hours: u32,
}

/// One day's best window in the schedule response
#[derive(Debug, Serialize)]
pub struct WindowInfo {
    pub day: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub label: String,
    pub expected_profit: f64,
}

/// Response for schedule optimization
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub hours: u32,
    pub windows: Vec<WindowInfo>,
    pub schedule_text: String,
}

/// GET /schedule/optimal - Best contiguous work window per day of week
pub async fn optimal_schedule(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScheduleParams>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let range = DateRange::new(params.start, params.end)?;
    let records = state.provider.earnings(&range)?;

    let matrix = TimeBucketAggregator::new(state.tz).aggregate(&records, &range);
    let optimizer = WindowOptimizer::new(params.hours)?;
    let windows = optimizer.find_best_windows(&matrix);

    let infos = WEEK
        .iter()
        .filter_map(|day| windows.get(day))
        .map(|window| WindowInfo {
            day: day_name(window.day).to_string(),
            start_hour: window.start_hour,
            end_hour: window.end_hour(),
            label: window.label(),
            expected_profit: window.total_profit,
        })
        .collect();

    Ok(Json(ScheduleResponse {
        hours: params.hours,
        windows: infos,
        schedule_text: crate::analytics::format_schedule(&windows),
    }))
}

/// Query parameters for the expected-profit endpoint
///
/// Hours are parsed as signed integers so out-of-range values in either
/// direction are rejected with a 400 naming the constraint.
#[derive(Debug, Deserialize)]
pub struct ExpectedProfitParams {
    pub reference: i64,
    pub start: i64,
    pub end: i64,
    pub start_hour: i64,
    pub end_hour: i64,
}

/// Response for the expected-profit endpoint
#[derive(Debug, Serialize)]
pub struct ExpectedProfitResponse {
    pub start_hour: u32,
    pub end_hour: u32,
    pub expected_profit: f64,
}

fn validate_hour(value: i64, which: &str) -> Result<u32, ApiError> {
    if !(0..=23).contains(&value) {
        return Err(ApiError::InvalidParameter(format!(
            "{} must be between 0 and 23",
            which
        )));
    }
    Ok(value as u32)
}

/// GET /profit/expected - Expected profit for a day-of-week and hour span
pub async fn expected_profit(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpectedProfitParams>,
) -> Result<Json<ExpectedProfitResponse>, ApiError> {
    let start_hour = validate_hour(params.start_hour, "start_hour")?;
    let end_hour = validate_hour(params.end_hour, "end_hour")?;
    let range = DateRange::new(params.start, params.end)?;
    let records = state.provider.earnings(&range)?;

    let engine = ProfitQueryEngine::new(state.tz);
    let profit = engine.expected_profit(&records, params.reference, &range, start_hour, end_hour)?;

    Ok(Json(ExpectedProfitResponse {
        start_hour,
        end_hour,
        expected_profit: profit,
    }))
}

/// Request body for plan creation
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub target_monthly_income: f64,
    #[serde(default)]
    pub estimated_expenses: f64,
    #[serde(default)]
    pub other_monthly_income: f64,
    #[serde(default = "default_work_hours")]
    pub target_work_hours_per_day: u32,
}

fn default_work_hours() -> u32 {
    4
}

/// POST /plan - Project a monthly financial plan with gap analysis
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<FinancialPlan>, ApiError> {
    let range = DateRange::new(request.start, request.end)?;
    let records = state.provider.earnings(&range)?;

    let mut planner = FinancialPlanner::new(range, state.tz);
    planner.set_target_monthly_income(request.target_monthly_income)?;
    planner.set_estimated_expenses(request.estimated_expenses)?;
    planner.set_other_monthly_income(request.other_monthly_income)?;
    planner.set_target_work_hours_per_day(request.target_work_hours_per_day)?;

    let plan = planner.create_plan(&records)?;
    Ok(Json(plan))
}
