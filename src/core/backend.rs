// src/core/backend.rs

use crate::config::Config;
use crate::core::error::{ConfigError, ExportError, ScanError};
use crate::core::models::VulnerabilityReport;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("XSSorcist/", env!("CARGO_PKG_VERSION"));

/// Body of the PDF rendering request: the report sections plus the scanned URL.
#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    #[serde(rename = "vulnerabilityReport")]
    pub vulnerability_report: ReportWithUrl<'a>,
}

#[derive(Debug, Serialize)]
pub struct ReportWithUrl<'a> {
    #[serde(flatten)]
    pub report: &'a VulnerabilityReport,
    pub url: &'a str,
}

impl<'a> ExportRequest<'a> {
    pub fn new(report: &'a VulnerabilityReport, url: &'a str) -> Self {
        Self {
            vulnerability_report: ReportWithUrl { report, url },
        }
    }
}

/// HTTP access to the scanning and PDF rendering backend.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    base_url: Url,
}

impl Backend {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{name}`, keeping any path prefix the base URL carries.
    fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url
    }

    /// `GET {base}/scan?url={target}`.
    pub async fn fetch_report(&self, target: &str) -> Result<VulnerabilityReport, ScanError> {
        let endpoint = self.endpoint("scan");
        info!(target, endpoint = %endpoint, "Requesting scan.");

        let response = self
            .client
            .get(endpoint)
            .query(&[("url", target)])
            .send()
            .await?;
        let status = response.status();
        debug!(%status, "Received scan response.");
        if !status.is_success() {
            return Err(ScanError::Status(status));
        }

        let body = response.text().await?;
        let report = VulnerabilityReport::from_json(&body)?;
        info!(findings = report.finding_count(), "Scan report parsed.");
        Ok(report)
    }

    /// `POST {base}/generate-pdf` with the report, returning the raw PDF bytes.
    pub async fn render_pdf(
        &self,
        report: &VulnerabilityReport,
        url: &str,
    ) -> Result<Vec<u8>, ExportError> {
        let endpoint = self.endpoint("generate-pdf");
        info!(url, endpoint = %endpoint, "Requesting PDF rendering.");

        let response = self
            .client
            .post(endpoint)
            .json(&ExportRequest::new(report, url))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::Status(status));
        }

        let bytes = response.bytes().await?;
        debug!(size = bytes.len(), "Received PDF payload.");
        Ok(bytes.to_vec())
    }
}
