//! Configuration constants.
//!
//! This module defines the endpoint paths, scoring parameters, and
//! operational limits used throughout the client.

// Backend endpoint paths.
/// Domain analysis endpoint. With `progressive=true` it returns phase-1
/// results (MX/SPF/DMARC) immediately while DKIM is still pending; without
/// it the backend runs the full analysis in one shot.
pub const CHECK_ENDPOINT: &str = "/api/check";
/// Phase-2 endpoint that completes the DKIM selector scan and returns the
/// final score and recommendations.
pub const DKIM_COMPLETION_ENDPOINT: &str = "/api/check/dkim";
/// Public (no-auth) platform statistics endpoint.
pub const STATISTICS_ENDPOINT: &str = "/api/public/statistics";
/// Email report submission endpoint.
pub const EMAIL_REPORT_ENDPOINT: &str = "/api/email-report";
/// Liveness probe endpoint.
pub const HEALTH_ENDPOINT: &str = "/api/health";

/// Production backend base URL.
pub const PRODUCTION_API_BASE_URL: &str = "https://astraverify-backend-ml2mhibdvq-uc.a.run.app";
/// Staging backend base URL.
pub const STAGING_API_BASE_URL: &str =
    "https://astraverify-backend-1098627686587.us-central1.run.app";
/// Base URL of a locally running backend.
pub const LOCAL_API_BASE_URL: &str = "http://localhost:8080";

/// Production frontend base URL, used to build shareable analysis links.
pub const PRODUCTION_APP_BASE_URL: &str = "https://astraverify.com";
/// Staging frontend base URL.
pub const STAGING_APP_BASE_URL: &str = "https://staging.astraverify.com";
/// Base URL of a locally running frontend.
pub const LOCAL_APP_BASE_URL: &str = "http://localhost:3000";

/// Per-request HTTP timeout in seconds.
///
/// The DKIM completion phase probes hundreds of selectors server-side and is
/// by far the slowest call, so the default is generous. A hung backend call
/// can never wedge the client: every request carries this timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default pause in milliseconds between showing phase-1 results and issuing
/// the DKIM completion request.
///
/// The hosted UI inserts a short pause here purely for pacing; it is not part
/// of the protocol, so the CLI defaults to none.
pub const DEFAULT_PHASE_DELAY_MS: u64 = 0;

/// User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("astraverify-cli/", env!("CARGO_PKG_VERSION"));

// Error message excerpt limits.
/// Maximum response-body excerpt included in an HTTP error message.
pub const MAX_ERROR_BODY_EXCERPT: usize = 100;
/// Maximum response-body excerpt included in a content-type mismatch message.
/// Longer than the HTTP excerpt because gateway error pages usually need a
/// little more context to be recognizable.
pub const MAX_CONTENT_TYPE_EXCERPT: usize = 200;

// Component score maxima. Base plus bonus points for a component are capped
// at these values (MX 25 + SPF 25 + DMARC 30 + DKIM 20 = 100).
/// Maximum MX contribution to the composite score.
pub const MX_MAX_SCORE: f64 = 25.0;
/// Maximum SPF contribution to the composite score.
pub const SPF_MAX_SCORE: f64 = 25.0;
/// Maximum DMARC contribution to the composite score.
pub const DMARC_MAX_SCORE: f64 = 30.0;
/// Maximum DKIM contribution to the composite score.
pub const DKIM_MAX_SCORE: f64 = 20.0;

/// Fraction of a component's maximum at or above which its status indicator
/// shows a pass.
pub const COMPONENT_PASS_FRACTION: f64 = 0.5;
/// Minimum points for a component to show a warning rather than a failure.
pub const COMPONENT_WARN_MIN_POINTS: f64 = 1.0;
