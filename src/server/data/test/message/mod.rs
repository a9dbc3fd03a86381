use crate::server::{data::message::MessageRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_pending;
mod mark_moderated;
