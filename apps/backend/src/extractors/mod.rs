pub mod auth_token;
pub mod current_identity;
pub mod validated_json;

pub use auth_token::AuthToken;
pub use current_identity::CurrentIdentity;
pub use validated_json::ValidatedJson;
