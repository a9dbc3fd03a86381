use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        product::{PendingProductDto, ProductDto, SetProductStatusDto},
    },
    server::{
        controller::param::ProductFilterParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::{GetPendingProductsParam, ProductStatus, SetProductStatusParam},
        service::product::ProductService,
        state::AppState,
        util::parse::{parse_id_filter, parse_json_body, parse_path_id},
    },
};

pub static PRODUCT_TAG: &str = "product";

/// GET /api/admin/products/pending - Listing moderation queue
///
/// Returns pending listings with owner, category and server, newest first, optionally
/// restricted to one category and/or game server.
#[utoipa::path(
    get,
    path = "/api/admin/products/pending",
    tag = PRODUCT_TAG,
    params(ProductFilterParam),
    responses(
        (status = 200, description = "Pending listings", body = Vec<PendingProductDto>),
        (status = 400, description = "Category or server filter is not an id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not moderate listings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_pending_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ProductFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ModerateListings])
        .await?;

    let param = GetPendingProductsParam {
        category_id: parse_id_filter("category", filter.category.as_deref())?,
        server_id: parse_id_filter("server", filter.server.as_deref())?,
    };

    let products = ProductService::new(&state.db).get_pending(&param).await?;

    let dto: Vec<PendingProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// PATCH /api/admin/products/{id}/status - Approve, reject or reopen a listing
///
/// The note replaces the stored moderation note; omitting it clears the note.
#[utoipa::path(
    patch,
    path = "/api/admin/products/{id}/status",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = SetProductStatusDto,
    responses(
        (status = 200, description = "Updated listing", body = ProductDto),
        (status = 400, description = "Unknown status, malformed body or non-numeric id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not moderate listings", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn set_product_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<SetProductStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ModerateListings])
        .await?;

    let id = parse_path_id(&id)?;
    let payload = parse_json_body("status", payload)?;
    let param = SetProductStatusParam {
        product_id: id,
        status: ProductStatus::parse_field(&payload.status)?,
        note: payload.note,
    };

    let product = ProductService::new(&state.db)
        .set_status(&actor, param)
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}
