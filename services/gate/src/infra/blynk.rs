use reqwest::Client;
use url::Url;

use crate::domain::repository::HardwareGateway;
use crate::error::GateError;

/// Default Blynk cloud HTTP API base.
pub const DEFAULT_BLYNK_BASE_URL: &str = "https://blynk.cloud/external/api";

/// Default virtual pin wired to the barrier relay.
pub const DEFAULT_VIRTUAL_PIN: &str = "V0";

/// Blynk cloud device driving the barrier relay.
///
/// The device token travels in the query string, so request errors are
/// stripped of their URL before they are surfaced.
#[derive(Clone)]
pub struct BlynkGateway {
    client: Client,
    base_url: Url,
    token: String,
    virtual_pin: String,
}

impl BlynkGateway {
    pub fn new(client: Client, base_url: Url, token: String, virtual_pin: String) -> Self {
        Self {
            client,
            base_url,
            token,
            virtual_pin,
        }
    }

    fn endpoint(&self, method: &str, params: &[(&str, &str)]) -> Result<Url, GateError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("gateway base URL cannot carry a path"))?
            .pop_if_empty()
            .push(method);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("token", &self.token);
            for (k, v) in params {
                query.append_pair(k, v);
            }
        }
        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<reqwest::Response, GateError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| GateError::Gateway(e.without_url().into()))
    }

    async fn call(&self, url: Url) -> Result<reqwest::Response, GateError> {
        let resp = self.send(url).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GateError::Gateway(anyhow::anyhow!(
                "gateway responded with status {status}"
            )));
        }
        Ok(resp)
    }
}

impl HardwareGateway for BlynkGateway {
    /// Only a literal `true` body counts as online. Error statuses (e.g. Blynk's
    /// 400 "Invalid token.") read as offline; transport failures are errors.
    async fn is_online(&self) -> Result<bool, GateError> {
        let url = self.endpoint("isHardwareConnected", &[])?;
        let body = self
            .send(url)
            .await?
            .text()
            .await
            .map_err(|e| GateError::Gateway(e.without_url().into()))?;
        Ok(body.trim() == "true")
    }

    async fn trigger(&self) -> Result<(), GateError> {
        let url = self.endpoint("update", &[(self.virtual_pin.as_str(), "1")])?;
        self.call(url).await?;
        Ok(())
    }
}
