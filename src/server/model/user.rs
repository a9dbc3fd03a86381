//! User domain models and parameters.
//!
//! Provides the user domain model with role and ban state, the closed set of roles together
//! with their permission table, and parameter types for the user directory filters and the
//! role and ban mutations.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserListItemDto, UserSummaryDto},
    server::{
        error::{internal::InternalError, AppError},
        middleware::auth::Permission,
    },
};

/// Role deciding which admin panel operations a user may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    User,
    Moderator,
    Admin,
}

/// Operations granted to staff roles. Moderators and admins currently share the same set.
const STAFF_PERMISSIONS: &[Permission] = &[
    Permission::ViewUsers,
    Permission::ManageUsers,
    Permission::ModerateListings,
    Permission::ModerateMessages,
    Permission::ViewAnalytics,
    Permission::ViewLookups,
];

impl UserRole {
    #[cfg(test)]
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Moderator, UserRole::Admin];

    /// Stored and serialized representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Permission table: every operation the role is allowed to perform.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::User => &[],
            Self::Moderator | Self::Admin => STAFF_PERMISSIONS,
        }
    }

    /// Returns whether the role's permission table contains `permission`.
    pub fn allows(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Parses a request value, rejecting unknown roles as a validation error on `field`.
    pub fn parse_field(field: &str, value: &str) -> Result<Self, AppError> {
        value.parse().map_err(|_| AppError::validation(field, value))
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "moderator" => Ok(Self::Moderator),
            "admin" => Ok(Self::Admin),
            _ => Err(()),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marketplace user with role and ban state.
///
/// `ban_reason` is `Some` exactly when `is_banned` is true; the repository only ever
/// writes both columns together.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(InternalError::UnknownUserRole)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, InternalError> {
        let role = entity
            .role
            .parse()
            .map_err(|_| InternalError::UnknownUserRole {
                user_id: entity.id,
                value: entity.role.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            name: entity.name,
            role,
            is_banned: entity.is_banned,
            ban_reason: entity.ban_reason,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
            is_banned: self.is_banned,
            ban_reason: self.ban_reason,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// User annotated with the number of listings owned and messages sent.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithCounts {
    pub user: User,
    pub products_count: u64,
    pub messages_count: u64,
}

impl UserWithCounts {
    pub fn into_dto(self) -> UserListItemDto {
        UserListItemDto {
            user: self.user.into_dto(),
            products_count: self.products_count,
            messages_count: self.messages_count,
        }
    }
}

/// Minimal projection of a user joined into moderation queue entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub name: String,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            name: self.name,
        }
    }
}

impl From<entity::user::Model> for UserSummary {
    fn from(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
        }
    }
}

/// Ban state filter for the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BanStatusFilter {
    #[default]
    All,
    Banned,
    Active,
}

impl BanStatusFilter {
    /// Parses the `status` query value. Absent, empty and `all` mean no filtering.
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") | Some("all") => Ok(Self::All),
            Some("banned") => Ok(Self::Banned),
            Some("active") => Ok(Self::Active),
            Some(other) => Err(AppError::validation("status", other)),
        }
    }
}

/// Filters for listing users in the directory.
#[derive(Debug, Clone, Default)]
pub struct GetUsersParam {
    /// Case-insensitive substring matched against username, email and name.
    pub search: Option<String>,
    /// Exact role to match, `None` for all roles.
    pub role: Option<UserRole>,
    pub status: BanStatusFilter,
}

impl GetUsersParam {
    /// Builds directory filters from raw query values.
    ///
    /// Blank values are treated as absent and `all` disables the role filter.
    ///
    /// # Returns
    /// - `Ok(GetUsersParam)` - Parsed filters
    /// - `Err(AppError::Validation)` - Unknown `role` or `status` value
    pub fn from_query(
        search: Option<&str>,
        role: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, AppError> {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let role = match role.map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(value) => Some(UserRole::parse_field("role", value)?),
        };

        Ok(Self {
            search,
            role,
            status: BanStatusFilter::parse(status)?,
        })
    }
}

/// Parameters for changing a user's role.
#[derive(Debug, Clone)]
pub struct SetUserRoleParam {
    pub user_id: i32,
    pub role: UserRole,
}

/// Parameters for banning a user.
#[derive(Debug, Clone)]
pub struct BanUserParam {
    pub user_id: i32,
    /// Trimmed, non-empty reason.
    pub reason: String,
}

impl BanUserParam {
    /// Builds ban parameters, rejecting a blank reason as a validation error on `reason`.
    pub fn new(user_id: i32, reason: &str) -> Result<Self, AppError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::validation("reason", reason));
        }

        Ok(Self {
            user_id,
            reason: reason.to_string(),
        })
    }
}
