use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{BanUserDto, SetUserRoleDto, UserDto, UserListItemDto},
    },
    server::{
        controller::param::UserFilterParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{BanUserParam, GetUsersParam, SetUserRoleParam, UserRole},
        service::user::UserService,
        state::AppState,
        util::parse::{parse_json_body, parse_path_id},
    },
};

pub static USER_TAG: &str = "user";

/// GET /api/admin/users - Search the user directory
///
/// Returns users matching the optional search, role and ban state filters, newest first,
/// each with the number of listings owned and messages sent.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(UserFilterParam),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserListItemDto>),
        (status = 400, description = "Unknown role or status filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not view users", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<UserFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ViewUsers])
        .await?;

    let param = GetUsersParam::from_query(
        filter.search.as_deref(),
        filter.role.as_deref(),
        filter.status.as_deref(),
    )?;

    let users = UserService::new(&state.db).get_users(&param).await?;

    let dto: Vec<UserListItemDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// PATCH /api/admin/users/{id}/role - Change a user's role
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/role",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = SetUserRoleDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Unknown role, malformed body or non-numeric id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not manage users", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<SetUserRoleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    let id = parse_path_id(&id)?;
    let payload = parse_json_body("role", payload)?;
    let role = UserRole::parse_field("role", &payload.role)?;

    let user = UserService::new(&state.db)
        .set_role(&actor, SetUserRoleParam { user_id: id, role })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PATCH /api/admin/users/{id}/ban - Ban a user with a reason
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/ban",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = BanUserDto,
    responses(
        (status = 200, description = "Banned user", body = UserDto),
        (status = 400, description = "Blank reason, malformed body or non-numeric id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not manage users", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn ban_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<BanUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    let id = parse_path_id(&id)?;
    let payload = parse_json_body("reason", payload)?;
    let param = BanUserParam::new(id, &payload.reason)?;

    let user = UserService::new(&state.db).ban(&actor, param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PATCH /api/admin/users/{id}/unban - Lift a user's ban
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/unban",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Unbanned user", body = UserDto),
        (status = 400, description = "Non-numeric id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role may not manage users", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn unban_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    let id = parse_path_id(&id)?;
    let user = UserService::new(&state.db).unban(&actor, id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
