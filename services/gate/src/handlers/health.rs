use axum::{extract::State, http::StatusCode};

use pingate_core::health::readiness;

use crate::domain::repository::{HardwareGateway, PinStore};
use crate::state::AppState;

/// `GET /readyz`: ready once the PIN store answers. The hardware gateway is
/// a third-party cloud and is reported through `/device-status` instead.
pub async fn readyz<S, G>(State(state): State<AppState<S, G>>) -> StatusCode
where
    S: PinStore + Clone,
    G: HardwareGateway + Clone,
{
    readiness(state.pin_store().ping().await)
}
