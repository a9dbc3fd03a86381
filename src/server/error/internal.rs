use thiserror::Error;

/// Internal issues indicating corrupt stored data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored user role is not one of the known roles.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("User {user_id} has unknown stored role '{value}'")]
    UnknownUserRole { user_id: i32, value: String },

    /// Stored listing status is not one of the known statuses.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Product {product_id} has unknown stored status '{value}'")]
    UnknownProductStatus { product_id: i32, value: String },
}
