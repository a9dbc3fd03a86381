use chrono::{DateTime, Local, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::analytics::AnalyticsRepository,
    error::AppError,
    model::analytics::{day_boundaries, ActivitySeries, Analytics, AnalyticsRange, ReportingWindows},
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the analytics snapshot for `range` in server-local time.
    pub async fn get_analytics(&self, range: AnalyticsRange) -> Result<Analytics, AppError> {
        self.snapshot(&Local, Utc::now(), range).await
    }

    /// Builds the analytics snapshot as of `now`, with day boundaries in time zone `tz`.
    ///
    /// Every count and the three per-day activity queries run concurrently. `now` is the
    /// single reference instant for all windows and is echoed as `generated_at`.
    ///
    /// # Arguments
    /// - `tz` - Time zone whose midnights delimit days
    /// - `now` - Reference instant of the snapshot
    /// - `range` - Number of past days covered by the activity series
    ///
    /// # Returns
    /// - `Ok(Analytics)` - Snapshot statistics and activity series
    /// - `Err(AppError::DbErr)` - Database error in any of the queries
    pub async fn snapshot<Tz: TimeZone>(
        &self,
        tz: &Tz,
        now: DateTime<Utc>,
        range: AnalyticsRange,
    ) -> Result<Analytics, AppError> {
        let repo = AnalyticsRepository::new(self.db);

        let windows = ReportingWindows::at(tz, now);
        let days = range.calendar_days(now.with_timezone(tz).date_naive());
        let boundaries = day_boundaries(tz, &days);

        let (users, products, messages, user_days, product_days, message_days) = tokio::try_join!(
            repo.user_stats(&windows),
            repo.product_stats(&windows),
            repo.message_stats(&windows),
            repo.user_daily_counts(&boundaries),
            repo.product_daily_counts(&boundaries),
            repo.message_daily_counts(&boundaries),
        )?;

        let activity = ActivitySeries {
            dates: days,
            users: user_days,
            products: product_days,
            messages: message_days,
        };

        tracing::debug!(
            "Built {} analytics snapshot over {} days",
            range.as_str(),
            activity.dates.len()
        );

        Ok(Analytics {
            range,
            generated_at: now,
            users,
            products,
            messages,
            activity,
        })
    }
}
