use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{BanStatusFilter, GetUsersParam, UserRole},
};
use test_utils::{builder::TestBuilder, factory};

mod any_with_roles;
mod count_activity;
mod get_filtered;
mod set_role;
