pub mod analytics;
pub mod earnings;
pub mod error;
pub mod json_provider;
pub mod planner;
pub mod server;


pub use analytics::{
    format_hour,
    format_schedule,
    local_day_and_hour,
    platform_totals,
    rank_by_profit,
    ProfitMatrix,
    ProfitQueryEngine,
    TimeBucketAggregator,
    WindowOptimizer,
    WorkWindow,
    WEEK,
};
pub use earnings::{
    DateRange, EarningsProvider, EarningsRecord, InMemoryEarningsProvider, ProviderError,
    MS_PER_DAY,
};
pub use error::EngineError;
pub use json_provider::JsonFileProvider;
pub use planner::{FinancialPlan, FinancialPlanner};
pub use server::{run_server, ApiError, AppState, ServerConfig};
