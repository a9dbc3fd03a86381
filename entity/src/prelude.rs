pub use super::category::Entity as Category;
pub use super::conversation::Entity as Conversation;
pub use super::message::Entity as Message;
pub use super::product::Entity as Product;
pub use super::server::Entity as Server;
pub use super::user::Entity as User;
