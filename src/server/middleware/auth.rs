//! Bearer token authentication and role based authorization.
//!
//! `AuthGuard` verifies the HS256 token from the `Authorization` header, resolves its
//! subject against the user table and checks the resolved role against the permission
//! table in `UserRole::permissions`. The resulting `AuthContext` is passed explicitly to
//! every service call that needs an actor.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::UserRole,
};

/// Operations guarded by the role permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewUsers,
    /// Set role, ban and unban.
    ManageUsers,
    ModerateListings,
    ModerateMessages,
    ViewAnalytics,
    /// List categories and servers.
    ViewLookups,
}

impl Permission {
    #[cfg(test)]
    pub const ALL: [Permission; 6] = [
        Permission::ViewUsers,
        Permission::ManageUsers,
        Permission::ModerateListings,
        Permission::ModerateMessages,
        Permission::ViewAnalytics,
        Permission::ViewLookups,
    ];
}

/// Authenticated identity of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i32,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the user the token was issued to.
    pub sub: i32,
    pub exp: usize,
}

/// HMAC keys derived from the shared JWT secret.
#[derive(Clone)]
pub struct JwtKeys {
    #[cfg(test)]
    encoding: jsonwebtoken::EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            #[cfg(test)]
            encoding: jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues an HS256 token for `user_id` expiring after `ttl`.
    ///
    /// Tokens are issued by the login service in production.
    #[cfg(test)]
    pub fn issue(&self, user_id: i32, ttl: std::time::Duration) -> Result<String, AuthError> {
        use jsonwebtoken::{encode, Header};

        let exp = chrono::Utc::now().timestamp().max(0) as u64 + ttl.as_secs();
        let claims = Claims {
            sub: user_id,
            exp: exp as usize,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verifies signature and expiry of `token` and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation)?;

        Ok(data.claims)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// Checks that `identity` holds every permission in `permissions`.
///
/// # Returns
/// - `Ok(())` - Every permission is granted
/// - `Err(AuthError::MissingIdentity)` - No authenticated identity, never a 403
/// - `Err(AuthError::AccessDenied)` - The identity's role lacks a permission
pub fn authorize(identity: Option<&AuthContext>, permissions: &[Permission]) -> Result<(), AuthError> {
    let Some(identity) = identity else {
        return Err(AuthError::MissingIdentity);
    };

    for permission in permissions {
        if !identity.role.allows(*permission) {
            return Err(AuthError::AccessDenied(
                identity.user_id,
                format!(
                    "role '{}' lacks the {:?} permission",
                    identity.role, permission
                ),
            ));
        }
    }

    Ok(())
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Resolves the bearer token of the request to a user identity.
    ///
    /// Banned users still authenticate; the guard only checks that the subject exists.
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - Identity and current role of the token's subject
    /// - `Err(AppError::AuthErr)` - Missing, invalid or expired token, or unknown subject
    /// - `Err(AppError::DbErr)` - Database error during the user lookup
    pub async fn authenticate(&self) -> Result<AuthContext, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = self.keys.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        Ok(AuthContext {
            user_id: user.id,
            role: user.role,
        })
    }

    /// Authenticates the request and requires every permission in `permissions`.
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthContext, AppError> {
        let identity = self.authenticate().await?;

        authorize(Some(&identity), permissions)?;

        Ok(identity)
    }
}
