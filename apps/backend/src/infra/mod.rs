//! Infrastructure layer - database bootstrap and state construction.

pub mod db;
pub mod state;
