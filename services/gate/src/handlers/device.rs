use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::repository::{HardwareGateway, PinStore};
use crate::error::GateError;
use crate::state::AppState;
use crate::usecase::barrier::DeviceStatusUseCase;

// ── GET /device-status ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DeviceStatusResponse {
    pub online: bool,
}

pub async fn device_status<S, G>(
    State(state): State<AppState<S, G>>,
) -> Result<Json<DeviceStatusResponse>, GateError>
where
    S: PinStore + Clone,
    G: HardwareGateway + Clone,
{
    let usecase = DeviceStatusUseCase {
        gateway: state.hardware_gateway(),
    };
    let online = usecase.execute().await?;
    Ok(Json(DeviceStatusResponse { online }))
}
