use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::jwt::Identity;
use crate::error::AppError;

/// Identity of the caller, as verified by the `AuthGate` middleware.
///
/// Only available on routes wrapped by the gate; anywhere else extraction
/// fails with 401, so a handler that forgets the gate still fails closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentIdentity(pub Identity);

impl FromRequest for CurrentIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Identity>()
                .cloned()
                .map(CurrentIdentity)
                .ok_or_else(AppError::unauthorized),
        )
    }
}
