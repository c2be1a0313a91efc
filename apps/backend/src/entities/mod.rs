pub mod quotes;
pub mod users;

pub use quotes::Entity as Quotes;
pub use quotes::Model as Quote;
pub use users::Entity as Users;
pub use users::Model as User;
