use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use pingate_core::health::healthz;
use pingate_core::middleware::{apply_cors, propagate_request_id_layer, request_id_layer};

use crate::domain::repository::{HardwareGateway, PinStore};
use crate::handlers::{
    barrier::open_barrier,
    device::device_status,
    health::readyz,
    not_found,
    pin::{generate_pin, validate_pin},
};
use crate::state::AppState;

pub fn build_router<S, G>(state: AppState<S, G>) -> Router
where
    S: PinStore + Clone + 'static,
    G: HardwareGateway + Clone + 'static,
{
    let cors_allow_origin = state.cors_allow_origin.clone();

    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<S, G>))
        // PINs
        .route("/generate-pin", post(generate_pin::<S, G>))
        .route("/validate-pin", post(validate_pin::<S, G>))
        // Barrier
        .route("/open-barrier", post(open_barrier::<S, G>))
        .route("/device-status", get(device_status::<S, G>))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state);

    let router = match cors_allow_origin {
        Some(origin) => router.layer(from_fn_with_state(origin, apply_cors)),
        None => router,
    };

    router.layer(
        ServiceBuilder::new()
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer()),
    )
}
