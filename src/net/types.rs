//! Wire DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads (camelCase field names) so
//! serde round-trips stay lossless and the store never touches raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Given name, as entered at registration.
    pub first_name: String,
    /// Family name, as entered at registration.
    pub last_name: String,
    /// Email address; doubles as the account key.
    pub email: String,
}

/// Response body of `GET /api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    /// Whether the browser currently holds a valid session.
    pub logged_in: bool,
    /// The session's user, when `logged_in` is true.
    #[serde(default)]
    pub user: Option<User>,
}

/// Request body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_verify: String,
}

/// Request body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Success envelope shared by the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Error envelope the server attaches to non-2xx auth responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error_message: Option<String>,
}
