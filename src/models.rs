//! Wire data model for the AstraVerify backend API.
//!
//! Every type here mirrors a JSON payload produced or consumed by the
//! backend. The client never computes verdicts or scores itself; it only
//! deserializes what the backend decided and presents it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single MX record as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MxRecord {
    /// MX preference value (lower is tried first)
    pub priority: u16,
    /// Mail server hostname
    pub server: String,
}

/// A raw TXT-based record (SPF or DMARC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxtRecord {
    /// The record text exactly as published in DNS
    pub record: String,
}

/// A DKIM public-key record found under one selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DkimRecord {
    /// The selector the record was found under
    pub selector: String,
    /// The record text
    pub record: String,
}

/// Verdict for the MX component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MxStatus {
    /// Whether usable MX records were found
    pub enabled: bool,
    /// Short backend-provided status label
    pub status: String,
    /// Longer backend-provided explanation
    #[serde(default)]
    pub description: Option<String>,
    /// The records themselves
    #[serde(default)]
    pub records: Vec<MxRecord>,
}

/// Verdict for the SPF component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpfStatus {
    /// Whether an SPF record was found
    pub enabled: bool,
    /// Short backend-provided status label
    pub status: String,
    /// Longer backend-provided explanation
    #[serde(default)]
    pub description: Option<String>,
    /// The records themselves
    #[serde(default)]
    pub records: Vec<TxtRecord>,
}

/// Verdict for the DMARC component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmarcStatus {
    /// Whether a DMARC record was found
    pub enabled: bool,
    /// Short backend-provided status label
    pub status: String,
    /// Longer backend-provided explanation
    #[serde(default)]
    pub description: Option<String>,
    /// The records themselves
    #[serde(default)]
    pub records: Vec<TxtRecord>,
}

/// Verdict for the DKIM component.
///
/// In a phase-1 (progressive) payload this arrives as a placeholder with
/// `checking: true`; the phase-2 completion replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DkimStatus {
    /// Whether any DKIM selector yielded a valid record
    #[serde(default)]
    pub enabled: bool,
    /// Short backend-provided status label ("Checking...", "Error", ...)
    pub status: String,
    /// Longer backend-provided explanation
    #[serde(default)]
    pub description: Option<String>,
    /// Records found, one per matching selector
    #[serde(default)]
    pub records: Vec<DkimRecord>,
    /// Number of candidate selectors the backend probed
    #[serde(default)]
    pub selectors_checked: Option<u32>,
    /// True while the comprehensive selector scan is still running
    #[serde(default)]
    pub checking: bool,
}

/// Per-component base and bonus points.
///
/// Values are floats because some bonuses are fractional (a `?all` SPF
/// policy earns half a point).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringDetails {
    /// MX base points
    #[serde(default)]
    pub mx_base: f64,
    /// MX bonus points
    #[serde(default)]
    pub mx_bonus: f64,
    /// SPF base points
    #[serde(default)]
    pub spf_base: f64,
    /// SPF bonus points
    #[serde(default)]
    pub spf_bonus: f64,
    /// DMARC base points
    #[serde(default)]
    pub dmarc_base: f64,
    /// DMARC bonus points
    #[serde(default)]
    pub dmarc_bonus: f64,
    /// DKIM base points
    #[serde(default)]
    pub dkim_base: f64,
    /// DKIM bonus points
    #[serde(default)]
    pub dkim_bonus: f64,
}

/// The backend-computed 0-100 composite security score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScore {
    /// Final score, 0-100
    pub score: f64,
    /// Base points before bonuses
    #[serde(default)]
    pub base_score: f64,
    /// Bonus points awarded on top of the base
    #[serde(default)]
    pub bonus_points: f64,
    /// Free-text status label ("Excellent Security", "Partial", ...)
    #[serde(default)]
    pub status: String,
    /// Per-component breakdown, when the backend includes one
    #[serde(default)]
    pub scoring_details: Option<ScoringDetails>,
}

/// Severity of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Must fix: the domain is broken or wide open
    Critical,
    /// Should fix: meaningful security gap
    Important,
    /// Nice to have
    Info,
    /// Confirmation that something is already configured well
    Ok,
    /// Forward compatibility with kinds this client does not know
    #[serde(other)]
    Other,
}

/// A single backend-generated recommendation. Ordering and de-duplication
/// are entirely backend-determined; the client renders the list as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Severity
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Short headline
    pub title: String,
    /// What to do and why
    pub description: String,
    /// Expected security impact of acting on it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// Rough implementation effort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
    /// Rough implementation time estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

/// The accumulating analysis result.
///
/// Phase 1 populates `mx`/`spf`/`dmarc` and a placeholder `dkim`; phase 2
/// replaces `dkim`, `email_provider`, `security_score`, `recommendations`,
/// `progressive`, and `message`. Fields present after phase 1 are never
/// removed, only replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The domain as normalized by the backend
    pub domain: String,
    /// Client-side timestamp of when phase-1 results were received
    #[serde(default)]
    pub analysis_timestamp: Option<DateTime<Utc>>,
    /// MX verdict
    pub mx: MxStatus,
    /// SPF verdict
    pub spf: SpfStatus,
    /// DMARC verdict
    pub dmarc: DmarcStatus,
    /// DKIM verdict (placeholder until phase 2 lands)
    pub dkim: DkimStatus,
    /// Detected email service provider, known only after DKIM completes
    #[serde(default)]
    pub email_provider: Option<String>,
    /// Composite security score; provisional in progressive payloads
    #[serde(default)]
    pub security_score: Option<SecurityScore>,
    /// Backend-generated recommendations
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// True while the DKIM completion is still outstanding
    #[serde(default)]
    pub progressive: bool,
    /// Human-readable progress/completion message
    #[serde(default)]
    pub message: Option<String>,
}

/// Phase-2 payload from the DKIM completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DkimCompletion {
    /// The domain the completion belongs to
    pub domain: String,
    /// Final DKIM verdict
    pub dkim: DkimStatus,
    /// Detected email service provider
    #[serde(default)]
    pub email_provider: Option<String>,
    /// Final security score
    pub security_score: SecurityScore,
    /// Final recommendations
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// Completion marker set by the backend
    #[serde(default)]
    pub completed: bool,
}

/// Aggregate platform statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Total number of analyses ever performed
    #[serde(default)]
    pub total_analyses: u64,
    /// Number of distinct domains analyzed
    #[serde(default)]
    pub unique_domains: u64,
    /// Mean security score across all analyses
    #[serde(default)]
    pub average_security_score: f64,
    /// Analysis counts keyed by detected email provider
    #[serde(default)]
    pub email_provider_distribution: BTreeMap<String, u64>,
}

impl Statistics {
    /// The most common email provider, if any distribution data exists.
    pub fn top_provider(&self) -> Option<&str> {
        self.email_provider_distribution
            .iter()
            .max_by_key(|(_, count)| *count)
            .map(|(provider, _)| provider.as_str())
    }
}

/// `{success, data}` envelope around [`Statistics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsEnvelope {
    /// Whether the backend produced statistics
    pub success: bool,
    /// The statistics, present when `success` is true
    #[serde(default)]
    pub data: Option<Statistics>,
    /// Backend error text, present when `success` is false
    #[serde(default)]
    pub error: Option<String>,
}

/// Body POSTed to the email-report endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailReportRequest {
    /// Recipient address
    pub email: String,
    /// Domain the report is about
    pub domain: String,
    /// The full merged analysis result
    pub analysis_result: AnalysisResult,
    /// Whether the user opted into product update emails
    pub opt_in_marketing: bool,
    /// Client-side submission timestamp
    pub timestamp: DateTime<Utc>,
}

/// Response envelope from the email-report endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailReportResponse {
    /// Whether the report was sent
    pub success: bool,
    /// Confirmation text, present on success
    #[serde(default)]
    pub message: Option<String>,
    /// Backend error text, present on failure
    #[serde(default)]
    pub error: Option<String>,
}

/// Liveness probe response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "healthy" when the backend is up
    pub status: String,
    /// Service identifier reported by the backend
    #[serde(default)]
    pub service: Option<String>,
    /// Backend version string
    #[serde(default)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progressive_payload_deserializes() {
        let payload = serde_json::json!({
            "domain": "example.com",
            "analysis_timestamp": null,
            "mx": {"enabled": true, "status": "OK", "description": "Found", "records": [{"priority": 10, "server": "mail.example.com"}]},
            "spf": {"enabled": true, "status": "OK", "records": [{"record": "v=spf1 -all"}]},
            "dmarc": {"enabled": false, "status": "Missing", "records": []},
            "dkim": {"enabled": false, "status": "Checking...", "description": "Comprehensive DKIM check in progress...", "records": [], "checking": true},
            "progressive": true,
            "message": "Initial results ready, DKIM check in progress..."
        });
        let result: AnalysisResult = serde_json::from_value(payload).unwrap();
        assert!(result.progressive);
        assert!(result.dkim.checking);
        assert!(result.security_score.is_none());
        assert_eq!(result.mx.records[0].server, "mail.example.com");
    }

    #[test]
    fn test_completion_payload_deserializes() {
        let payload = serde_json::json!({
            "domain": "example.com",
            "dkim": {"enabled": true, "status": "OK", "records": [{"selector": "default", "record": "v=DKIM1; k=rsa; p=..."}], "selectors_checked": 12},
            "email_provider": "Google Workspace",
            "security_score": {
                "score": 82, "base_score": 80, "bonus_points": 2, "status": "Good Security",
                "scoring_details": {"mx_base": 25, "mx_bonus": 2, "spf_base": 25, "spf_bonus": 1, "dmarc_base": 30, "dmarc_bonus": 0, "dkim_base": 20, "dkim_bonus": 0}
            },
            "recommendations": [
                {"type": "info", "title": "Strengthen SPF Policy", "description": "Consider -all."}
            ],
            "completed": true
        });
        let completion: DkimCompletion = serde_json::from_value(payload).unwrap();
        assert!(completion.completed);
        assert_eq!(completion.dkim.selectors_checked, Some(12));
        assert_eq!(completion.recommendations[0].kind, RecommendationKind::Info);
        let details = completion.security_score.scoring_details.unwrap();
        assert_eq!(details.dmarc_base, 30.0);
    }

    #[test]
    fn test_unknown_recommendation_kind_is_tolerated() {
        let rec: Recommendation = serde_json::from_value(serde_json::json!({
            "type": "experimental",
            "title": "t",
            "description": "d"
        }))
        .unwrap();
        assert_eq!(rec.kind, RecommendationKind::Other);
    }

    #[test]
    fn test_fractional_bonus_points() {
        // A ?all SPF policy earns half a point server-side.
        let details: ScoringDetails =
            serde_json::from_value(serde_json::json!({"spf_base": 25, "spf_bonus": 0.5})).unwrap();
        assert_eq!(details.spf_bonus, 0.5);
        assert_eq!(details.mx_base, 0.0);
    }

    #[test]
    fn test_statistics_top_provider() {
        let stats: Statistics = serde_json::from_value(serde_json::json!({
            "total_analyses": 100,
            "unique_domains": 40,
            "average_security_score": 71.5,
            "email_provider_distribution": {"Google Workspace": 60, "Microsoft 365": 30, "Other": 10}
        }))
        .unwrap();
        assert_eq!(stats.top_provider(), Some("Google Workspace"));

        let empty = Statistics {
            total_analyses: 0,
            unique_domains: 0,
            average_security_score: 0.0,
            email_provider_distribution: BTreeMap::new(),
        };
        assert_eq!(empty.top_provider(), None);
    }
}
