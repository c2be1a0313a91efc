use actix_web::web;

pub mod auth;
pub mod health;
pub mod quotes;

/// Register every route at the root, as the HTTP surface expects
/// (`/register`, `/login`, `/`, `/quotes`, `/quotes/{name}`, `/health`).
///
/// The gate is applied per resource inside [`quotes::configure_routes`], so
/// tests that call this get exactly the production wiring.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(quotes::configure_routes);
}
