//! REST client for the server's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ApiError`] so the auth store can turn it
//! into view state instead of panicking or crashing hydration. Non-2xx
//! responses prefer the server-supplied `errorMessage`; a formatted fallback
//! covers bodies without one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Credentials, RegisterRequest, SessionStatus, User};
#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, UserEnvelope};

#[cfg(any(test, feature = "hydrate"))]
const SESSION_ENDPOINT: &str = "/api/auth/session";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/api/auth/register";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// A failed call against the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a server response.
    #[error("{0}")]
    Network(String),
    /// The endpoint was called during SSR, where no session cookie exists.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// User-facing message, suitable for the error banner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Remote auth operations the store depends on.
///
/// Statically dispatched so tests can substitute a scripted implementation.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Ask the server whether this browser currently holds a session.
    async fn check_session(&self) -> Result<SessionStatus, ApiError>;
    /// Create an account. Returns the registered user.
    async fn register_user(&self, request: &RegisterRequest) -> Result<User, ApiError>;
    /// Establish a session. Returns the authenticated user.
    async fn login_user(&self, credentials: &Credentials) -> Result<User, ApiError>;
    /// End the current session.
    async fn logout_user(&self) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn session_check_failed_message(status: u16) -> String {
    format!("session check failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// Production [`AuthApi`] talking to the same-origin server.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

#[cfg(feature = "hydrate")]
async fn server_error(resp: gloo_net::http::Response, fallback: fn(u16) -> String) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error_message)
        .unwrap_or_else(|| fallback(status));
    ApiError::Server { status, message }
}

impl AuthApi for HttpAuthApi {
    async fn check_session(&self) -> Result<SessionStatus, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(server_error(resp, session_check_failed_message).await);
            }
            resp.json::<SessionStatus>()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn register_user(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
                .json(request)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(server_error(resp, register_failed_message).await);
            }
            let body: UserEnvelope = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn login_user(&self, credentials: &Credentials) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .json(credentials)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(server_error(resp, login_failed_message).await);
            }
            let body: UserEnvelope = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout_user(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(server_error(resp, logout_failed_message).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
