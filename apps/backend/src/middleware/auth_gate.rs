//! Request gate for protected routes.
//!
//! Pulls the access token from `x-access-token` or `Authorization`, verifies
//! it, and either stores the verified [`Identity`] in request extensions and
//! calls the wrapped service, or answers 401 itself. The wrapped handler,
//! and therefore the store, is never reached for a rejected request.
//!
//! The decision is recomputed for every request.

use std::future::{ready, Ready};

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::auth::jwt::{verify_access_token, Identity};
use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;

/// Outcome of the gate for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Authorized(Identity),
    Unauthorized,
}

impl GateDecision {
    /// Decide from the request headers alone. Fails closed.
    pub fn evaluate(token: Option<AuthToken>, state: &AppState) -> Self {
        let Some(AuthToken { token }) = token else {
            debug!(reason = "missing_token", "gate_rejected");
            return GateDecision::Unauthorized;
        };

        match verify_access_token(&token, &state.security) {
            Ok(claims) => GateDecision::Authorized(claims.identity()),
            Err(_) => GateDecision::Unauthorized,
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware { service }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
            let err = AppError::internal("AppState not available");
            return Box::pin(async move {
                Ok(req.into_response(err.error_response()).map_into_right_body())
            });
        };

        let decision = GateDecision::evaluate(AuthToken::from_headers(req.headers()), &state);

        match decision {
            GateDecision::Authorized(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            GateDecision::Unauthorized => Box::pin(async move {
                let response = AppError::unauthorized().error_response();
                Ok(req.into_response(response).map_into_right_body())
            }),
        }
    }
}
