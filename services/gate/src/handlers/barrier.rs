use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::repository::{HardwareGateway, PinStore};
use crate::error::GateError;
use crate::handlers::JsonBody;
use crate::state::AppState;
use crate::usecase::barrier::OpenBarrierUseCase;

// ── POST /open-barrier ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct OpenBarrierRequest {
    pub pin: String,
}

#[derive(Serialize)]
pub struct OpenBarrierResponse {
    pub success: bool,
    pub role: &'static str,
}

pub async fn open_barrier<S, G>(
    State(state): State<AppState<S, G>>,
    JsonBody(body): JsonBody<OpenBarrierRequest>,
) -> Result<Json<OpenBarrierResponse>, GateError>
where
    S: PinStore + Clone,
    G: HardwareGateway + Clone,
{
    let usecase = OpenBarrierUseCase {
        pins: state.pin_store(),
        gateway: state.hardware_gateway(),
    };
    let role = usecase.execute(&body.pin).await?;
    Ok(Json(OpenBarrierResponse {
        success: true,
        role: role.tag(),
    }))
}
