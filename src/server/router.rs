use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{analytics, api, lookup, message, product, user},
    server::{
        controller::{
            self,
            analytics::{get_analytics, ANALYTICS_TAG},
            health::{health, HEALTH_TAG},
            lookup::{get_categories, get_servers, LOOKUP_TAG},
            message::{get_pending_messages, moderate_message, MESSAGE_TAG},
            product::{get_pending_products, set_product_status, PRODUCT_TAG},
            user::{ban_user, get_users, set_user_role, unban_user, USER_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketboard Admin API",
        description = "Moderation and analytics back end of the marketboard classified-ads marketplace"
    ),
    tags(
        (name = HEALTH_TAG, description = "Liveness check"),
        (name = USER_TAG, description = "User directory, roles and bans"),
        (name = PRODUCT_TAG, description = "Listing moderation queue"),
        (name = MESSAGE_TAG, description = "Message moderation queue"),
        (name = ANALYTICS_TAG, description = "Marketplace statistics"),
        (name = LOOKUP_TAG, description = "Categories and game servers"),
    ),
    paths(
        controller::health::health,
        controller::user::get_users,
        controller::user::set_user_role,
        controller::user::ban_user,
        controller::user::unban_user,
        controller::product::get_pending_products,
        controller::product::set_product_status,
        controller::message::get_pending_messages,
        controller::message::moderate_message,
        controller::analytics::get_analytics,
        controller::lookup::get_categories,
        controller::lookup::get_servers,
    ),
    components(schemas(
        api::ErrorDto,
        api::HealthDto,
        user::UserDto,
        user::UserListItemDto,
        user::UserSummaryDto,
        user::SetUserRoleDto,
        user::BanUserDto,
        product::ProductDto,
        product::PendingProductDto,
        product::SetProductStatusDto,
        message::MessageDto,
        message::ConversationDto,
        message::ConversationProductDto,
        message::PendingMessageDto,
        lookup::LookupDto,
        analytics::AnalyticsDto,
        analytics::UserStatsDto,
        analytics::RoleDistributionDto,
        analytics::ProductStatsDto,
        analytics::NamedCountDto,
        analytics::MessageStatsDto,
        analytics::ActivityDto,
    )),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` security scheme referenced by the admin routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// Requests exceeding `request_timeout` are answered with 408 Request Timeout.
pub fn router(request_timeout: Duration) -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/admin/users", get(get_users))
        .route("/api/admin/users/{id}/role", patch(set_user_role))
        .route("/api/admin/users/{id}/ban", patch(ban_user))
        .route("/api/admin/users/{id}/unban", patch(unban_user))
        .route("/api/admin/products/pending", get(get_pending_products))
        .route("/api/admin/products/{id}/status", patch(set_product_status))
        .route("/api/admin/messages/pending", get(get_pending_messages))
        .route("/api/admin/messages/{id}/moderate", patch(moderate_message))
        .route("/api/admin/analytics", get(get_analytics))
        .route("/api/admin/categories", get(get_categories))
        .route("/api/admin/servers", get(get_servers))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
