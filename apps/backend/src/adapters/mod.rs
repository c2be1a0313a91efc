//! SeaORM adapters for the two collections.

pub mod quotes_sea;
pub mod users_sea;
