//! Search alert sink posting to the owner-alert endpoint

use async_trait::async_trait;
use reqwest::Method;
use rhai_core::AlertSink;
use rhai_domain::{Result, RhaiError, SearchAlert};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

const OWNER_ALERT_PATH: &str = "api/owner-alert";

/// [`AlertSink`] that POSTs alerts to a site's `/api/owner-alert`
pub struct HttpAlertSink {
    http_client: HttpClient,
    endpoint: Url,
}

impl HttpAlertSink {
    /// Sink for the site served at `site_url`
    ///
    /// # Errors
    /// `RhaiError::Config` when `site_url` is not a valid base URL.
    pub fn new(site_url: &str, http_client: HttpClient) -> Result<Self> {
        let base = Url::parse(&format!("{}/", site_url.trim_end_matches('/')))
            .map_err(InfraError::from)?;
        let endpoint = base.join(OWNER_ALERT_PATH).map_err(InfraError::from)?;
        Ok(Self { http_client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AlertSink for HttpAlertSink {
    async fn send_alert(&self, alert: SearchAlert) -> Result<()> {
        let request = self.http_client.request(Method::POST, self.endpoint.clone()).json(&alert);
        let response = self.http_client.send(request).await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RhaiError::Upstream(format!("Owner alert failed with HTTP {}", status.as_u16())))
        }
    }
}
