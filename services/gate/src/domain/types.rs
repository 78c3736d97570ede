use std::fmt;

use chrono::{DateTime, Utc};
use rand::RngExt;
use serde_json::Value;

use crate::error::GateError;

/// Number of decimal digits in a PIN.
pub const PIN_LEN: usize = 4;

/// Smallest generated PIN. Generated PINs never start with `0`.
pub const PIN_MIN: u16 = 1000;

/// Largest generated PIN.
pub const PIN_MAX: u16 = 9999;

/// Guest PIN time-to-live in seconds (24 hours).
pub const GUEST_PIN_TTL_SECS: u64 = 86_400;

/// Admin PIN time-to-live in seconds (7 days).
pub const ADMIN_PIN_TTL_SECS: u64 = 604_800;

/// A syntactically valid 4-digit PIN.
///
/// Parsing accepts any four ASCII digits (including `0000`), while
/// [`PinCode::random`] only draws from `PIN_MIN..=PIN_MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PinCode(String);

impl PinCode {
    pub fn parse(raw: &str) -> Result<Self, GateError> {
        if raw.len() == PIN_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(GateError::MalformedPin)
        }
    }

    pub fn random<R: RngExt>(rng: &mut R) -> Self {
        let n: u16 = rng.random_range(PIN_MIN..=PIN_MAX);
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category a PIN was issued for. Decides its lifetime and whether it can
/// authorize further issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guest,
    Admin,
}

impl Role {
    /// Tag stored in the PIN store and echoed back to clients.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Guest => "1",
            Self::Admin => "9",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "1" => Some(Self::Guest),
            "9" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn ttl_secs(self) -> u64 {
        match self {
            Self::Guest => GUEST_PIN_TTL_SECS,
            Self::Admin => ADMIN_PIN_TTL_SECS,
        }
    }

    /// Parse the `type` field of an issuance request: `1`/`9` as numbers or
    /// strings, or the names `guest`/`admin`.
    pub fn from_type_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(1) => Some(Self::Guest),
                Some(9) => Some(Self::Admin),
                Some(_) => None,
                // `1.0` and `9.0` are the same JSON numbers as `1` and `9`.
                None => {
                    let f = n.as_f64()?;
                    if f == 1.0 {
                        Some(Self::Guest)
                    } else if f == 9.0 {
                        Some(Self::Admin)
                    } else {
                        None
                    }
                }
            },
            Value::String(s) => match s.as_str() {
                "guest" => Some(Self::Guest),
                "admin" => Some(Self::Admin),
                other => Self::from_tag(other),
            },
            _ => None,
        }
    }
}

/// A freshly stored PIN as returned to the issuer.
#[derive(Debug, Clone)]
pub struct IssuedPin {
    pub code: PinCode,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}
