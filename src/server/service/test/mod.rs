use crate::server::{error::AppError, middleware::auth::AuthContext, model::user::UserRole};
use test_utils::{builder::TestBuilder, factory};


fn moderator(user_id: i32) -> AuthContext {
    AuthContext {
        user_id,
        role: UserRole::Moderator,
    }
}
