use tracing::info;

use crate::domain::repository::{HardwareGateway, PinStore};
use crate::domain::types::Role;
use crate::error::GateError;
use crate::usecase::pin::ValidatePinUseCase;

// ── OpenBarrier ───────────────────────────────────────────────────────────────

pub struct OpenBarrierUseCase<S: PinStore, G: HardwareGateway> {
    pub pins: S,
    pub gateway: G,
}

impl<S: PinStore, G: HardwareGateway> OpenBarrierUseCase<S, G> {
    pub async fn execute(self, raw_pin: &str) -> Result<Role, GateError> {
        // Gate PINs stay valid until their TTL runs out.
        let validate = ValidatePinUseCase {
            pins: self.pins,
            consume: false,
        };
        let role = validate.execute(raw_pin).await?;

        self.gateway.trigger().await?;

        info!(role = role.tag(), "barrier opened");
        Ok(role)
    }
}

// ── DeviceStatus ──────────────────────────────────────────────────────────────

pub struct DeviceStatusUseCase<G: HardwareGateway> {
    pub gateway: G,
}

impl<G: HardwareGateway> DeviceStatusUseCase<G> {
    pub async fn execute(&self) -> Result<bool, GateError> {
        self.gateway.is_online().await
    }
}
