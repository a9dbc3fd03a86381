use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{GetPendingProductsParam, ProductStatus, SetProductStatusParam},
};
use test_utils::{builder::TestBuilder, factory};

mod get_pending;
mod set_status;
