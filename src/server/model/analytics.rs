//! Analytics domain models.
//!
//! Holds the selectable reporting range, the fixed "new since" windows, the snapshot
//! statistics per entity type and the day-bucketed activity series. Day boundaries are
//! computed here so the database only has to count rows per interval.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};

use crate::{
    model::analytics::{
        ActivityDto, AnalyticsDto, MessageStatsDto, NamedCountDto, ProductStatsDto,
        RoleDistributionDto, UserStatsDto,
    },
    server::{model::user::UserRole, util::time::local_midnight},
};

/// Format of activity series date labels, e.g. `14 Oct`.
const DATE_LABEL_FORMAT: &str = "%d %b";

/// Span of the activity series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsRange {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl AnalyticsRange {
    /// Parses the `range` query value. Absent and unknown values fall back to `Week`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("day") => Self::Day,
            Some("month") => Self::Month,
            Some("year") => Self::Year,
            _ => Self::Week,
        }
    }

    /// Number of days the range reaches back from today.
    pub fn days(self) -> u64 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Local calendar days covered by the range, oldest first, today included.
    ///
    /// Always yields `days() + 1` entries.
    pub fn calendar_days(self, today: NaiveDate) -> Vec<NaiveDate> {
        (0..=self.days())
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
            .collect()
    }
}

/// Fixed lower bounds for the "new" counters, all at local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindows {
    pub today: DateTime<Utc>,
    pub week: DateTime<Utc>,
    pub month: DateTime<Utc>,
}

impl ReportingWindows {
    /// Computes the windows relative to `now` in time zone `tz`.
    pub fn at<Tz: TimeZone>(tz: &Tz, now: DateTime<Utc>) -> Self {
        let today = now.with_timezone(tz).date_naive();
        let days_ago = |days: u64| {
            let date = today.checked_sub_days(Days::new(days)).unwrap_or(today);
            local_midnight(tz, date)
        };

        Self {
            today: local_midnight(tz, today),
            week: days_ago(7),
            month: days_ago(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleDistribution {
    pub user: u64,
    pub moderator: u64,
    pub admin: u64,
}

impl RoleDistribution {
    /// Builds the distribution from per-role counts. Roles without users count as 0.
    pub fn from_counts(counts: impl IntoIterator<Item = (UserRole, u64)>) -> Self {
        let mut distribution = Self::default();
        for (role, count) in counts {
            match role {
                UserRole::User => distribution.user += count,
                UserRole::Moderator => distribution.moderator += count,
                UserRole::Admin => distribution.admin += count,
            }
        }
        distribution
    }

    pub fn into_dto(self) -> RoleDistributionDto {
        RoleDistributionDto {
            user: self.user,
            moderator: self.moderator,
            admin: self.admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub total: u64,
    pub active: u64,
    pub banned: u64,
    pub new_today: u64,
    pub new_this_week: u64,
    pub new_this_month: u64,
    pub by_role: RoleDistribution,
}

impl UserStats {
    pub fn into_dto(self) -> UserStatsDto {
        UserStatsDto {
            total: self.total,
            active: self.active,
            banned: self.banned,
            new_today: self.new_today,
            new_this_week: self.new_this_week,
            new_this_month: self.new_this_month,
            by_role: self.by_role.into_dto(),
        }
    }
}

/// Number of listings grouped under a category or server name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

impl NamedCount {
    pub fn into_dto(self) -> NamedCountDto {
        NamedCountDto {
            name: self.name,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductStats {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub new_today: u64,
    pub by_category: Vec<NamedCount>,
    pub by_server: Vec<NamedCount>,
}

impl ProductStats {
    pub fn into_dto(self) -> ProductStatsDto {
        ProductStatsDto {
            total: self.total,
            pending: self.pending,
            approved: self.approved,
            rejected: self.rejected,
            new_today: self.new_today,
            by_category: self
                .by_category
                .into_iter()
                .map(NamedCount::into_dto)
                .collect(),
            by_server: self
                .by_server
                .into_iter()
                .map(NamedCount::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageStats {
    pub total: u64,
    pub unmoderated: u64,
    pub moderated: u64,
    pub new_today: u64,
}

impl MessageStats {
    pub fn into_dto(self) -> MessageStatsDto {
        MessageStatsDto {
            total: self.total,
            unmoderated: self.unmoderated,
            moderated: self.moderated,
            new_today: self.new_today,
        }
    }
}

/// Per-day creation counts, one entry per calendar day in `dates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySeries {
    pub dates: Vec<NaiveDate>,
    pub users: Vec<u64>,
    pub products: Vec<u64>,
    pub messages: Vec<u64>,
}

impl ActivitySeries {
    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            dates: self
                .dates
                .iter()
                .map(|date| date.format(DATE_LABEL_FORMAT).to_string())
                .collect(),
            users: self.users,
            products: self.products,
            messages: self.messages,
        }
    }
}

/// Boundaries of the half-open [local midnight, next local midnight) interval of each day.
///
/// `days` must be consecutive and ascending. Yields `days.len() + 1` instants: the local
/// midnight of every day followed by the midnight ending the last day. Empty when `days`
/// is empty.
pub fn day_boundaries<Tz: TimeZone>(tz: &Tz, days: &[NaiveDate]) -> Vec<DateTime<Utc>> {
    let Some(last) = days.last() else {
        return Vec::new();
    };

    let mut boundaries: Vec<DateTime<Utc>> =
        days.iter().map(|day| local_midnight(tz, *day)).collect();
    let end = match last.checked_add_days(Days::new(1)) {
        Some(next) => local_midnight(tz, next),
        None => DateTime::<Utc>::MAX_UTC,
    };
    boundaries.push(end);

    boundaries
}

/// Spreads grouped `(bucket index, count)` rows over `buckets` slots.
///
/// Missing buckets count 0; indices outside `0..buckets` are ignored.
pub fn counts_per_bucket(buckets: usize, rows: impl IntoIterator<Item = (i32, i64)>) -> Vec<u64> {
    let mut counts = vec![0u64; buckets];

    for (index, count) in rows {
        let Ok(index) = usize::try_from(index) else {
            continue;
        };
        if let Some(slot) = counts.get_mut(index) {
            *slot += count.max(0) as u64;
        }
    }

    counts
}

/// Full analytics snapshot for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub range: AnalyticsRange,
    pub generated_at: DateTime<Utc>,
    pub users: UserStats,
    pub products: ProductStats,
    pub messages: MessageStats,
    pub activity: ActivitySeries,
}

impl Analytics {
    pub fn into_dto(self) -> AnalyticsDto {
        AnalyticsDto {
            range: self.range.as_str().to_string(),
            generated_at: self.generated_at,
            users: self.users.into_dto(),
            products: self.products.into_dto(),
            messages: self.messages.into_dto(),
            activity: self.activity.into_dto(),
        }
    }
}
