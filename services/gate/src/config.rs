use anyhow::{Context, anyhow};
use url::Url;

use crate::infra::blynk::{DEFAULT_BLYNK_BASE_URL, DEFAULT_VIRTUAL_PIN};

/// Gate service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Redis connection URL backing the PIN store. Env var: `REDIS_URL`.
    pub redis_url: String,
    /// Blynk device auth token. Env var: `BLYNK_TOKEN`.
    pub blynk_token: String,
    /// Blynk HTTP API base (default `https://blynk.cloud/external/api`). Env var: `BLYNK_BASE_URL`.
    pub blynk_base_url: Url,
    /// Virtual pin wired to the relay (default `V0`). Env var: `BLYNK_VIRTUAL_PIN`.
    pub blynk_virtual_pin: String,
    /// TCP port to listen on (default 8787). Env var: `GATE_PORT`.
    pub gate_port: u16,
    /// Issuance requires a valid admin PIN (default false). Env var: `REQUIRE_ADMIN_PIN`.
    pub require_admin_pin: bool,
    /// Enables CORS with this allowed origin. Env var: `CORS_ALLOW_ORIGIN`.
    pub cors_allow_origin: Option<String>,
}

impl GateConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| var(key).ok_or_else(|| anyhow!("{key} is not set"));

        let blynk_base_url = var("BLYNK_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BLYNK_BASE_URL.to_owned());
        let blynk_base_url = Url::parse(&blynk_base_url).context("invalid BLYNK_BASE_URL")?;
        if blynk_base_url.cannot_be_a_base() {
            return Err(anyhow!("invalid BLYNK_BASE_URL: not a base URL"));
        }

        Ok(Self {
            redis_url: required("REDIS_URL")?,
            blynk_token: required("BLYNK_TOKEN")?,
            blynk_base_url,
            blynk_virtual_pin: var("BLYNK_VIRTUAL_PIN")
                .unwrap_or_else(|| DEFAULT_VIRTUAL_PIN.to_owned()),
            gate_port: var("GATE_PORT")
                .map(|v| v.parse::<u16>().context("invalid GATE_PORT"))
                .transpose()?
                .unwrap_or(8787),
            require_admin_pin: var("REQUIRE_ADMIN_PIN")
                .map(|v| v.parse::<bool>().context("invalid REQUIRE_ADMIN_PIN"))
                .transpose()?
                .unwrap_or(false),
            cors_allow_origin: var("CORS_ALLOW_ORIGIN").filter(|v| !v.is_empty()),
        })
    }
}
