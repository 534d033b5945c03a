//! Readiness probe over HTTP using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::ReadinessProbe;

/// Probes an HTTP endpoint; any 2xx answer counts as ready.
///
/// Uses POST because the IPFS RPC API rejects GET.
#[derive(Debug, Clone)]
pub struct HttpReadinessProbe {
    url: Url,
    client: Client,
}

impl HttpReadinessProbe {
    pub fn new(url: Url, timeout_ms: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { url, client })
    }
}

impl ReadinessProbe for HttpReadinessProbe {
    fn check(&self) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.url.clone())
            .send()
            .map_err(|e| AppError::Http(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http(format!("{} answered {}", self.url, status)));
        }
        Ok(())
    }

    fn target(&self) -> String {
        self.url.to_string()
    }
}
