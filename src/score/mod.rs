//! Derived presentation values for backend-computed scores.
//!
//! Everything here is pure and stateless: letter grades, score bands,
//! status sentences, per-component capped scores, and status indicators.
//! The numbers themselves always come from the backend; this module only
//! decides how to present them.

use crate::config::{
    COMPONENT_PASS_FRACTION, COMPONENT_WARN_MIN_POINTS, DKIM_MAX_SCORE, DMARC_MAX_SCORE,
    MX_MAX_SCORE, SPF_MAX_SCORE,
};
use crate::models::RecommendationKind;

/// Letter-grade thresholds, highest first. Scores below the last threshold
/// are an F.
const GRADE_TABLE: [(f64, &str); 12] = [
    (95.0, "A+"),
    (90.0, "A"),
    (85.0, "A-"),
    (80.0, "B+"),
    (75.0, "B"),
    (70.0, "B-"),
    (65.0, "C+"),
    (60.0, "C"),
    (55.0, "C-"),
    (50.0, "D+"),
    (45.0, "D"),
    (40.0, "D-"),
];

/// Maps a 0-100 score to a letter grade.
pub fn grade_for(score: f64) -> &'static str {
    for (threshold, grade) in GRADE_TABLE {
        if score >= threshold {
            return grade;
        }
    }
    "F"
}

/// Coarse quality band for a 0-100 score, used for coloring and summary
/// wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 90 and up
    Excellent,
    /// 75 to 89
    Good,
    /// 50 to 74
    Fair,
    /// 25 to 49
    Poor,
    /// Below 25
    VeryPoor,
}

/// Maps a score to its [`ScoreBand`].
pub fn band_for(score: f64) -> ScoreBand {
    if score >= 90.0 {
        ScoreBand::Excellent
    } else if score >= 75.0 {
        ScoreBand::Good
    } else if score >= 50.0 {
        ScoreBand::Fair
    } else if score >= 25.0 {
        ScoreBand::Poor
    } else {
        ScoreBand::VeryPoor
    }
}

/// Human sentence describing a score.
pub fn status_text_for(score: f64) -> &'static str {
    match band_for(score) {
        ScoreBand::Excellent => "Excellent security configuration!",
        ScoreBand::Good => "Good security configuration!",
        ScoreBand::Fair => "Fair security configuration.",
        ScoreBand::Poor => "Poor security configuration.",
        ScoreBand::VeryPoor => "Very poor security configuration.",
    }
}

/// The four scored email-security components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Mail exchanger records
    Mx,
    /// Sender Policy Framework
    Spf,
    /// Domain-based Message Authentication, Reporting and Conformance
    Dmarc,
    /// DomainKeys Identified Mail
    Dkim,
}

impl Component {
    /// Maximum combined base + bonus contribution for this component.
    ///
    /// Component-aware on purpose: DMARC caps at 30 and DKIM at 20, so a
    /// flat 25 would misrepresent both.
    pub fn max_score(self) -> f64 {
        match self {
            Component::Mx => MX_MAX_SCORE,
            Component::Spf => SPF_MAX_SCORE,
            Component::Dmarc => DMARC_MAX_SCORE,
            Component::Dkim => DKIM_MAX_SCORE,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Component::Mx => "MX Records",
            Component::Spf => "SPF Records",
            Component::Dmarc => "DMARC Records",
            Component::Dkim => "DKIM Records",
        }
    }
}

/// Combined base + bonus points for a component, capped at the component's
/// maximum and floored at zero.
pub fn component_score(base: f64, bonus: f64, max: f64) -> f64 {
    (base + bonus).clamp(0.0, max)
}

/// Tiered pass/warn/fail indicator for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Earning at least half the component's maximum
    Pass,
    /// Some points earned, but below half the maximum
    Warn,
    /// Disabled, or effectively no points earned
    Fail,
}

impl Indicator {
    /// The symbol shown next to the component.
    pub fn symbol(self) -> &'static str {
        match self {
            Indicator::Pass => "✅",
            Indicator::Warn => "⚠️",
            Indicator::Fail => "❌",
        }
    }
}

/// Maps a component's enabled flag and capped score to an [`Indicator`].
///
/// A disabled component always fails. An enabled one passes at or above
/// half of its maximum, warns if it earned any points at all, and fails
/// otherwise.
pub fn component_indicator(enabled: bool, score: f64, max: f64) -> Indicator {
    if !enabled {
        return Indicator::Fail;
    }
    if score >= max * COMPONENT_PASS_FRACTION {
        Indicator::Pass
    } else if score >= COMPONENT_WARN_MIN_POINTS {
        Indicator::Warn
    } else {
        Indicator::Fail
    }
}

/// Symbol shown next to a recommendation of the given severity.
pub fn recommendation_symbol(kind: RecommendationKind) -> &'static str {
    match kind {
        RecommendationKind::Critical => "🚨",
        RecommendationKind::Important => "⚠️",
        RecommendationKind::Info => "ℹ️",
        RecommendationKind::Ok | RecommendationKind::Other => "💡",
    }
}
