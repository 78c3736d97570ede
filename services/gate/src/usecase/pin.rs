use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::domain::repository::PinStore;
use crate::domain::types::{IssuedPin, PinCode, Role};
use crate::error::GateError;

// ── IssuePin ──────────────────────────────────────────────────────────────────

pub struct IssuePinInput {
    /// `None` when the request carried no `type`.
    pub role: Option<Role>,
    pub admin_pin: Option<String>,
}

pub struct IssuePinUseCase<S: PinStore> {
    pub pins: S,
    pub require_admin_pin: bool,
}

impl<S: PinStore> IssuePinUseCase<S> {
    pub async fn execute(&self, input: IssuePinInput) -> Result<IssuedPin, GateError> {
        // 1. Resolve the requested role. Gated issuance defaults to a guest PIN.
        let role = match input.role {
            Some(role) => role,
            None if self.require_admin_pin => Role::Guest,
            None => return Err(GateError::InvalidRole),
        };

        // 2. Admin gate → 403 on anything but a stored admin PIN
        if self.require_admin_pin {
            self.authorize(input.admin_pin.as_deref()).await?;
        }

        // 3. Draw a code. Collisions with an active PIN are not checked; the
        //    store write below replaces the older record.
        let code = PinCode::random(&mut rand::rng());
        let ttl_secs = role.ttl_secs();
        let expires_at = Utc::now() + Duration::seconds(ttl_secs as i64);

        // 4. Store with the role's TTL; expiry is enforced by the store
        self.pins.put(&code, role, ttl_secs).await?;

        info!(role = role.tag(), expires_at = %expires_at, "pin issued");
        Ok(IssuedPin {
            code,
            role,
            expires_at,
        })
    }

    async fn authorize(&self, admin_pin: Option<&str>) -> Result<(), GateError> {
        let code = admin_pin
            .and_then(|raw| PinCode::parse(raw).ok())
            .ok_or(GateError::Unauthorized)?;
        match self.pins.get(&code).await? {
            Some(Role::Admin) => Ok(()),
            _ => Err(GateError::Unauthorized),
        }
    }
}

// ── ValidatePin ───────────────────────────────────────────────────────────────

pub struct ValidatePinUseCase<S: PinStore> {
    pub pins: S,
    /// Single-use mode: a successful lookup deletes the PIN.
    pub consume: bool,
}

impl<S: PinStore> ValidatePinUseCase<S> {
    /// Returns the role of an active PIN, `PinNotFound` for an unknown or
    /// expired one, and `MalformedPin` without touching the store when `raw`
    /// is not four digits.
    pub async fn execute(&self, raw: &str) -> Result<Role, GateError> {
        let code = PinCode::parse(raw)?;
        let role = self
            .pins
            .get(&code)
            .await?
            .ok_or(GateError::PinNotFound)?;

        if self.consume {
            // The PIN has already served its purpose; a failed delete only
            // leaves it to expire on its own.
            if let Err(e) = self.pins.delete(&code).await {
                warn!(error = %e, role = role.tag(), "failed to consume single-use pin");
            }
        }

        Ok(role)
    }
}
