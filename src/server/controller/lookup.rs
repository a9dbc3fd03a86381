use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, lookup::LookupDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::lookup::LookupService,
        state::AppState,
    },
};

pub static LOOKUP_TAG: &str = "lookup";

/// GET /api/admin/categories - Listing categories for queue filters
#[utoipa::path(
    get,
    path = "/api/admin/categories",
    tag = LOOKUP_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<LookupDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not view lookups", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ViewLookups])
        .await?;

    let categories = LookupService::new(&state.db).get_categories().await?;

    let dto: Vec<LookupDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/admin/servers - Game servers for queue filters
#[utoipa::path(
    get,
    path = "/api/admin/servers",
    tag = LOOKUP_TAG,
    responses(
        (status = 200, description = "All game servers", body = Vec<LookupDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not view lookups", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ViewLookups])
        .await?;

    let servers = LookupService::new(&state.db).get_servers().await?;

    let dto: Vec<LookupDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
