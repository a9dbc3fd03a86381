use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{analytics::AnalyticsDto, api::ErrorDto},
    server::{
        controller::param::AnalyticsParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::analytics::AnalyticsRange,
        service::analytics::AnalyticsService,
        state::AppState,
    },
};

pub static ANALYTICS_TAG: &str = "analytics";

/// GET /api/admin/analytics - Marketplace statistics and daily activity
///
/// Unknown `range` values fall back to `week`; the effective range is echoed back.
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = ANALYTICS_TAG,
    params(AnalyticsParam),
    responses(
        (status = 200, description = "Analytics snapshot", body = AnalyticsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not view analytics", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(param): Query<AnalyticsParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ViewAnalytics])
        .await?;

    let range = AnalyticsRange::from_query(param.range.as_deref());

    let analytics = AnalyticsService::new(&state.db)
        .get_analytics(range)
        .await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}
