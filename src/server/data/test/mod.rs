mod analytics;
mod message;
mod product;
mod user;
