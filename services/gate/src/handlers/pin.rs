use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::repository::{HardwareGateway, PinStore};
use crate::domain::types::Role;
use crate::error::GateError;
use crate::handlers::JsonBody;
use crate::state::AppState;
use crate::usecase::pin::{IssuePinInput, IssuePinUseCase, ValidatePinUseCase};

// ── POST /generate-pin ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeneratePinRequest {
    #[serde(rename = "type")]
    pub role: Option<serde_json::Value>,
    #[serde(rename = "adminPin")]
    pub admin_pin: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePinResponse {
    pub success: bool,
    pub pin: String,
    #[serde(rename = "type")]
    pub role: &'static str,
    #[serde(serialize_with = "pingate_core::serde::to_rfc3339_ms")]
    pub expires_at: DateTime<Utc>,
}

pub async fn generate_pin<S, G>(
    State(state): State<AppState<S, G>>,
    JsonBody(body): JsonBody<GeneratePinRequest>,
) -> Result<Json<GeneratePinResponse>, GateError>
where
    S: PinStore + Clone,
    G: HardwareGateway + Clone,
{
    let role = body
        .role
        .as_ref()
        .map(|value| Role::from_type_value(value).ok_or(GateError::InvalidRole))
        .transpose()?;

    let usecase = IssuePinUseCase {
        pins: state.pin_store(),
        require_admin_pin: state.require_admin_pin,
    };
    let issued = usecase
        .execute(IssuePinInput {
            role,
            admin_pin: body.admin_pin,
        })
        .await?;

    Ok(Json(GeneratePinResponse {
        success: true,
        pin: issued.code.to_string(),
        role: issued.role.tag(),
        expires_at: issued.expires_at,
    }))
}

// ── POST /validate-pin ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidatePinRequest {
    pub pin: String,
}

#[derive(Serialize)]
pub struct ValidatePinResponse {
    pub valid: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
}

/// Single-use validation: a valid PIN is consumed, an unknown or expired one
/// answers `{"valid": false}` with 200 rather than an error.
pub async fn validate_pin<S, G>(
    State(state): State<AppState<S, G>>,
    JsonBody(body): JsonBody<ValidatePinRequest>,
) -> Result<Json<ValidatePinResponse>, GateError>
where
    S: PinStore + Clone,
    G: HardwareGateway + Clone,
{
    let usecase = ValidatePinUseCase {
        pins: state.pin_store(),
        consume: true,
    };
    match usecase.execute(&body.pin).await {
        Ok(role) => Ok(Json(ValidatePinResponse {
            valid: true,
            role: Some(role.tag()),
        })),
        Err(GateError::PinNotFound) => Ok(Json(ValidatePinResponse {
            valid: false,
            role: None,
        })),
        Err(e) => Err(e),
    }
}
