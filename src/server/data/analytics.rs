//! Aggregate queries backing the analytics snapshot.
//!
//! Independent counts of a snapshot section run concurrently on the connection pool. The
//! activity series is one grouped count query per entity type over precomputed local day
//! boundaries.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{CaseStatement, Expr, SimpleExpr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::{
    data::lookup::LookupRepository,
    model::{
        analytics::{
            counts_per_bucket, MessageStats, NamedCount, ProductStats, ReportingWindows,
            RoleDistribution, UserStats,
        },
        lookup::Lookup,
        product::ProductStatus,
        user::UserRole,
    },
};

pub struct AnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects user totals, ban counts, sign-ups per window and the role distribution.
    pub async fn user_stats(&self, windows: &ReportingWindows) -> Result<UserStats, DbErr> {
        use entity::user::Column;

        let users = || entity::prelude::User::find();

        let (total, banned, new_today, new_this_week, new_this_month, by_role) = tokio::try_join!(
            users().count(self.db),
            users().filter(Column::IsBanned.eq(true)).count(self.db),
            users()
                .filter(Column::CreatedAt.gte(windows.today))
                .count(self.db),
            users()
                .filter(Column::CreatedAt.gte(windows.week))
                .count(self.db),
            users()
                .filter(Column::CreatedAt.gte(windows.month))
                .count(self.db),
            self.role_counts(),
        )?;

        Ok(UserStats {
            total,
            active: total.saturating_sub(banned),
            banned,
            new_today,
            new_this_week,
            new_this_month,
            by_role,
        })
    }

    async fn role_counts(&self) -> Result<RoleDistribution, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Role)
            .column_as(entity::user::Column::Id.count(), "count")
            .group_by(entity::user::Column::Role)
            .into_tuple()
            .all(self.db)
            .await?;

        let counts = rows.into_iter().filter_map(|(role, count)| {
            match role.parse::<UserRole>() {
                Ok(role) => Some((role, count.max(0) as u64)),
                Err(()) => {
                    tracing::warn!("Skipping {} users with unknown role '{}'", count, role);
                    None
                }
            }
        });

        Ok(RoleDistribution::from_counts(counts))
    }

    /// Collects listing totals per status, today's listings and per category/server counts.
    pub async fn product_stats(&self, windows: &ReportingWindows) -> Result<ProductStats, DbErr> {
        use entity::product::Column;

        let products = || entity::prelude::Product::find();
        let with_status = |status: ProductStatus| {
            products()
                .filter(Column::Status.eq(status.as_str()))
                .count(self.db)
        };
        let lookup_repo = LookupRepository::new(self.db);

        let (total, pending, approved, rejected, new_today, by_category, by_server) = tokio::try_join!(
            products().count(self.db),
            with_status(ProductStatus::Pending),
            with_status(ProductStatus::Approved),
            with_status(ProductStatus::Rejected),
            products()
                .filter(Column::CreatedAt.gte(windows.today))
                .count(self.db),
            async {
                let categories = lookup_repo.get_categories().await?;
                let counts = self.grouped_product_counts(Column::CategoryId).await?;
                Ok::<_, DbErr>(named_counts(categories, &counts))
            },
            async {
                let servers = lookup_repo.get_servers().await?;
                let counts = self.grouped_product_counts(Column::ServerId).await?;
                Ok::<_, DbErr>(named_counts(servers, &counts))
            },
        )?;

        Ok(ProductStats {
            total,
            pending,
            approved,
            rejected,
            new_today,
            by_category,
            by_server,
        })
    }

    /// Counts listings grouped by a foreign key column.
    async fn grouped_product_counts(
        &self,
        column: entity::product::Column,
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Product::find()
            .select_only()
            .column(column)
            .column_as(entity::product::Column::Id.count(), "count")
            .group_by(column)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Collects message totals split by moderation state and today's messages.
    pub async fn message_stats(&self, windows: &ReportingWindows) -> Result<MessageStats, DbErr> {
        use entity::message::Column;

        let messages = || entity::prelude::Message::find();

        let (total, unmoderated, new_today) = tokio::try_join!(
            messages().count(self.db),
            messages()
                .filter(Column::IsModerated.eq(false))
                .count(self.db),
            messages()
                .filter(Column::CreatedAt.gte(windows.today))
                .count(self.db),
        )?;

        Ok(MessageStats {
            total,
            unmoderated,
            moderated: total.saturating_sub(unmoderated),
            new_today,
        })
    }

    /// Users registered per day interval delimited by `boundaries`.
    pub async fn user_daily_counts(&self, boundaries: &[DateTime<Utc>]) -> Result<Vec<u64>, DbErr> {
        self.daily_counts::<entity::prelude::User>(entity::user::Column::CreatedAt, boundaries)
            .await
    }

    /// Listings posted per day interval delimited by `boundaries`.
    pub async fn product_daily_counts(
        &self,
        boundaries: &[DateTime<Utc>],
    ) -> Result<Vec<u64>, DbErr> {
        self.daily_counts::<entity::prelude::Product>(entity::product::Column::CreatedAt, boundaries)
            .await
    }

    /// Messages sent per day interval delimited by `boundaries`.
    pub async fn message_daily_counts(
        &self,
        boundaries: &[DateTime<Utc>],
    ) -> Result<Vec<u64>, DbErr> {
        self.daily_counts::<entity::prelude::Message>(entity::message::Column::CreatedAt, boundaries)
            .await
    }

    /// Counts rows of `E` per half-open interval `[boundaries[i], boundaries[i + 1])`.
    ///
    /// One grouped query: each row in range is mapped to its interval index by a `CASE`
    /// over the boundaries and counted per index.
    async fn daily_counts<E: EntityTrait>(
        &self,
        created_at: E::Column,
        boundaries: &[DateTime<Utc>],
    ) -> Result<Vec<u64>, DbErr> {
        let buckets = boundaries.len().saturating_sub(1);
        let (Some(first), Some(last)) = (boundaries.first(), boundaries.last()) else {
            return Ok(Vec::new());
        };
        if buckets == 0 {
            return Ok(Vec::new());
        }

        let rows: Vec<(i32, i64)> = E::find()
            .select_only()
            .column_as(bucket_index(created_at, boundaries), BUCKET_ALIAS)
            .column_as(created_at.count(), "count")
            .filter(created_at.gte(*first))
            .filter(created_at.lt(*last))
            .group_by(Expr::cust(BUCKET_ALIAS))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts_per_bucket(buckets, rows))
    }
}

const BUCKET_ALIAS: &str = "bucket";

/// `CASE WHEN col < b1 THEN 0 WHEN col < b2 THEN 1 ... ELSE n - 1 END` over the
/// boundaries between consecutive intervals.
///
/// Only valid for rows already restricted to `[boundaries[0], boundaries[n])`.
fn bucket_index<C: ColumnTrait>(created_at: C, boundaries: &[DateTime<Utc>]) -> SimpleExpr {
    let inner = boundaries
        .get(1..boundaries.len().saturating_sub(1))
        .unwrap_or_default();
    if inner.is_empty() {
        return Expr::val(0i32);
    }

    inner
        .iter()
        .enumerate()
        .fold(CaseStatement::new(), |case, (index, end)| {
            case.case(created_at.lt(*end), Expr::val(index as i32))
        })
        .finally(Expr::val(inner.len() as i32))
        .into()
}

/// Pairs every lookup with its listing count, including lookups without listings.
///
/// Sorted by count descending, then by name.
fn named_counts(lookups: Vec<Lookup>, counts: &[(i32, i64)]) -> Vec<NamedCount> {
    let mut named: Vec<NamedCount> = lookups
        .into_iter()
        .map(|lookup| {
            let count = counts
                .iter()
                .find(|(id, _)| *id == lookup.id)
                .map(|(_, count)| (*count).max(0) as u64)
                .unwrap_or(0);

            NamedCount {
                name: lookup.name,
                count,
            }
        })
        .collect();

    named.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    named
}
