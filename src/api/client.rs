//! HTTP client for the AstraVerify backend.
//!
//! One method per backend endpoint. All response handling funnels through
//! [`ApiClient::decode`], which enforces the status and content-type checks
//! that distinguish the error taxonomy in [`super::error`].

use log::debug;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::api::error::{excerpt, ApiError};
use crate::config::{
    CHECK_ENDPOINT, DKIM_COMPLETION_ENDPOINT, EMAIL_REPORT_ENDPOINT, HEALTH_ENDPOINT,
    MAX_CONTENT_TYPE_EXCERPT, MAX_ERROR_BODY_EXCERPT, STATISTICS_ENDPOINT,
};
use crate::models::{
    AnalysisResult, DkimCompletion, EmailReportRequest, EmailReportResponse, HealthStatus,
    StatisticsEnvelope,
};

/// Client for the AstraVerify backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the given base URL. A trailing slash on the
    /// base URL is tolerated.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Phase 1: fast progressive analysis. Returns MX/SPF/DMARC verdicts
    /// immediately with a placeholder DKIM section.
    pub async fn check_progressive(&self, domain: &str) -> Result<AnalysisResult, ApiError> {
        self.get_json(CHECK_ENDPOINT, &[("domain", domain), ("progressive", "true")])
            .await
    }

    /// Single-shot full analysis, DKIM included. Slower than the progressive
    /// flow but needs only one round trip.
    pub async fn check_full(&self, domain: &str) -> Result<AnalysisResult, ApiError> {
        self.get_json(CHECK_ENDPOINT, &[("domain", domain)]).await
    }

    /// Phase 2: completes the comprehensive DKIM selector scan and returns
    /// the final score and recommendations.
    pub async fn complete_dkim(&self, domain: &str) -> Result<DkimCompletion, ApiError> {
        self.get_json(DKIM_COMPLETION_ENDPOINT, &[("domain", domain)])
            .await
    }

    /// Fetches public platform statistics.
    pub async fn public_statistics(&self) -> Result<StatisticsEnvelope, ApiError> {
        self.get_json(STATISTICS_ENDPOINT, &[]).await
    }

    /// Probes backend liveness.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(HEALTH_ENDPOINT, &[]).await
    }

    /// Submits an email-report request.
    ///
    /// The backend returns its `{success, error}` envelope with a non-2xx
    /// status when sending fails, so a JSON error body is surfaced as a
    /// normal response rather than an opaque HTTP error. That preserves the
    /// server-provided error text for the user.
    pub async fn send_email_report(
        &self,
        request: &EmailReportRequest,
    ) -> Result<EmailReportResponse, ApiError> {
        let url = format!("{}{}", self.base_url, EMAIL_REPORT_ENDPOINT);
        debug!("POST {} for domain {}", url, request.domain);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;
        if let Ok(envelope) = serde_json::from_str::<EmailReportResponse>(&body) {
            return Ok(envelope);
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body_excerpt: excerpt(&body, MAX_ERROR_BODY_EXCERPT),
            });
        }
        Err(ApiError::ContentType {
            content_type: "unknown".into(),
            body_excerpt: excerpt(&body, MAX_CONTENT_TYPE_EXCERPT),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::Network)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body_excerpt: excerpt(&body, MAX_ERROR_BODY_EXCERPT),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/json") {
            let body = response.text().await.unwrap_or_default();
            let content_type = if content_type.is_empty() {
                "unknown".to_string()
            } else {
                content_type
            };
            return Err(ApiError::ContentType {
                content_type,
                body_excerpt: excerpt(&body, MAX_CONTENT_TYPE_EXCERPT),
            });
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = ApiClient::new(reqwest::Client::new(), "http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");

        let client = ApiClient::new(reqwest::Client::new(), "http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
