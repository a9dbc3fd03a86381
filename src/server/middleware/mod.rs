//! Request guards run by the controllers before any business logic.

pub mod auth;

#[cfg(test)]
mod test;
