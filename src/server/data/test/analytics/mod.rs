use chrono::{Duration, Utc};

use crate::server::{
    data::analytics::AnalyticsRepository, error::AppError, model::analytics::ReportingWindows,
};
use test_utils::{builder::TestBuilder, factory};

mod daily_counts;
mod message_stats;
mod product_stats;
mod user_stats;
