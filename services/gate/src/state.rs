use axum::http::HeaderValue;

use crate::domain::repository::{HardwareGateway, PinStore};
use crate::infra::blynk::BlynkGateway;
use crate::infra::cache::RedisPinStore;

/// Shared application state passed to every handler via axum `State`.
///
/// Generic over its ports so the router can run against in-memory fakes.
#[derive(Clone)]
pub struct AppState<S, G> {
    pub pins: S,
    pub gateway: G,
    /// Issuance requires presenting an active admin PIN.
    pub require_admin_pin: bool,
    /// `Some` enables the CORS middleware with this allowed origin.
    pub cors_allow_origin: Option<HeaderValue>,
}

/// State wired to Redis and the Blynk cloud.
pub type LiveState = AppState<RedisPinStore, BlynkGateway>;

impl<S, G> AppState<S, G>
where
    S: PinStore + Clone,
    G: HardwareGateway + Clone,
{
    pub fn pin_store(&self) -> S {
        self.pins.clone()
    }

    pub fn hardware_gateway(&self) -> G {
        self.gateway.clone()
    }
}
