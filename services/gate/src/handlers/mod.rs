pub mod barrier;
pub mod device;
pub mod health;
pub mod pin;

use axum::extract::FromRequest;

use crate::error::GateError;

/// `axum::Json` whose rejection (bad JSON, wrong content type, missing or
/// ill-typed fields) becomes `GateError::MalformedBody`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(GateError))]
pub struct JsonBody<T>(pub T);

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> GateError {
    GateError::RouteNotFound
}
