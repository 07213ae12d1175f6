//! Terminal rendering of analysis results.
//!
//! Mirrors the hosted UI's sections: the progressive snapshot with its DKIM
//! pending notice, the final score banner with grade and breakdown, the
//! security summary, recommendations, and platform statistics.

use colored::{Color, Colorize};

use crate::models::{AnalysisResult, HealthStatus, Recommendation, SecurityScore, Statistics};
use crate::score::{
    band_for, component_indicator, component_score, grade_for, recommendation_symbol,
    status_text_for, Component, ScoreBand,
};

fn band_color(score: f64) -> Color {
    match band_for(score) {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::BrightGreen,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Poor => Color::TrueColor {
            r: 255,
            g: 152,
            b: 0,
        },
        ScoreBand::VeryPoor => Color::Red,
    }
}

fn enabled_symbol(enabled: bool) -> &'static str {
    if enabled {
        "✅"
    } else {
        "❌"
    }
}

/// Prints the phase-1 snapshot: MX/SPF/DMARC verdicts plus a DKIM pending
/// notice.
pub fn print_progressive(result: &AnalysisResult) {
    println!();
    println!("{}", format!("Initial results for {}", result.domain).bold());
    println!(
        "  {} MX Records     {}",
        enabled_symbol(result.mx.enabled),
        result.mx.status
    );
    println!(
        "  {} SPF Records    {}",
        enabled_symbol(result.spf.enabled),
        result.spf.status
    );
    println!(
        "  {} DMARC Records  {}",
        enabled_symbol(result.dmarc.enabled),
        result.dmarc.status
    );
    if result.dkim.checking {
        println!(
            "  🔍 DKIM Records   {}",
            result
                .dkim
                .description
                .as_deref()
                .unwrap_or("Comprehensive DKIM check in progress...")
        );
    }
    if let Some(message) = &result.message {
        println!("  {}", message.dimmed());
    }
}

fn print_score_banner(score: &SecurityScore) {
    let color = band_color(score.score);
    println!();
    println!("{}", "Overall Security Score".bold());
    println!(
        "  {} {}   {}  {}",
        format!("{:.0}/100", score.score).color(color).bold(),
        format!("Grade {}", grade_for(score.score)).color(color).bold(),
        score.status,
        status_text_for(score.score).dimmed()
    );
    if score.bonus_points > 0.0 {
        println!(
            "  Base score {:.0}/100, bonus points +{:.1}",
            score.base_score, score.bonus_points
        );
    }
}

fn print_breakdown(result: &AnalysisResult, score: &SecurityScore) {
    let Some(details) = &score.scoring_details else {
        return;
    };
    println!();
    println!("{}", "Score Breakdown".bold());

    let rows = [
        (Component::Mx, result.mx.enabled, details.mx_base, details.mx_bonus),
        (Component::Spf, result.spf.enabled, details.spf_base, details.spf_bonus),
        (
            Component::Dmarc,
            result.dmarc.enabled,
            details.dmarc_base,
            details.dmarc_bonus,
        ),
        (
            Component::Dkim,
            result.dkim.enabled,
            details.dkim_base,
            details.dkim_bonus,
        ),
    ];
    for (component, enabled, base, bonus) in rows {
        let max = component.max_score();
        let points = component_score(base, bonus, max);
        let indicator = component_indicator(enabled, points, max);
        let bonus_note = if bonus > 0.0 {
            format!("  (+{bonus:.1} bonus)")
        } else {
            String::new()
        };
        println!(
            "  {} {:<14} {:>4.1}/{:.0}{}",
            indicator.symbol(),
            component.label(),
            points,
            max,
            bonus_note
        );
    }
}

fn print_records(result: &AnalysisResult) {
    if !result.mx.records.is_empty() {
        println!();
        println!("{}", "Mail Servers".bold());
        for record in &result.mx.records {
            println!("  Priority {}: {}", record.priority, record.server);
        }
    }
    if !result.spf.records.is_empty() {
        println!();
        println!("{}", "SPF Records".bold());
        for record in &result.spf.records {
            println!("  {}", record.record);
        }
    }
    if !result.dmarc.records.is_empty() {
        println!();
        println!("{}", "DMARC Records".bold());
        for record in &result.dmarc.records {
            println!("  {}", record.record);
        }
    }
    if !result.dkim.records.is_empty() {
        println!();
        println!("{}", "DKIM Records".bold());
        for record in &result.dkim.records {
            println!("  Selector {}: {}", record.selector, record.record);
        }
    }
}

fn print_summary(result: &AnalysisResult) {
    println!();
    println!("{}", "Security Summary".bold());
    println!(
        "  Spoofing Protection: {}",
        if result.spf.enabled {
            "Protected".green()
        } else {
            "Unprotected".red()
        }
    );
    println!(
        "  Email Delivery:      {}",
        if result.mx.enabled {
            "Working".green()
        } else {
            "Failing".red()
        }
    );
    let authentication = match (result.dkim.enabled, result.dmarc.enabled) {
        (true, true) => "Strong".green(),
        (false, false) => "Weak".red(),
        _ => "Partial".yellow(),
    };
    println!("  Authentication:      {authentication}");
    if let Some(provider) = &result.email_provider {
        println!("  Email Provider:      {provider}");
    }
}

fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        return;
    }
    println!();
    println!("{}", "Security Issues".bold());
    for rec in recommendations {
        println!("  {} {}", recommendation_symbol(rec.kind), rec.title.bold());
        println!("     {}", rec.description);
    }
}

/// Prints the full merged report: banner, breakdown, records, summary, and
/// recommendations.
pub fn print_report(result: &AnalysisResult) {
    if let Some(score) = &result.security_score {
        print_score_banner(score);
        print_breakdown(result, score);
    }
    print_records(result);
    print_summary(result);
    print_recommendations(&result.recommendations);

    if result.dkim.status == "Error" {
        println!();
        println!(
            "  {} {}",
            "⚠️".yellow(),
            "DKIM check failed; MX/SPF/DMARC results above are complete.".yellow()
        );
    }
    if let Some(message) = &result.message {
        println!();
        println!("{}", message.dimmed());
    }
    if let Some(timestamp) = &result.analysis_timestamp {
        println!(
            "{}",
            format!("Analysis completed at: {}", timestamp.to_rfc3339()).dimmed()
        );
    }
}

/// Prints the platform statistics block.
pub fn print_statistics(statistics: &Statistics) {
    println!();
    println!("{}", "Platform Statistics".bold());
    println!("  Total analyses:         {}", statistics.total_analyses);
    println!("  Unique domains:         {}", statistics.unique_domains);
    println!(
        "  Average security score: {:.1}/100",
        statistics.average_security_score
    );
    if let Some(provider) = statistics.top_provider() {
        println!("  Top email provider:     {provider}");
    }
}

/// Prints the health probe result.
pub fn print_health(health: &HealthStatus) {
    let healthy = health.status == "healthy";
    println!(
        "{} backend is {} ({}{})",
        if healthy { "✅" } else { "❌" },
        if healthy {
            health.status.green()
        } else {
            health.status.red()
        },
        health.service.as_deref().unwrap_or("astraverify-backend"),
        health
            .version
            .as_ref()
            .map(|v| format!(", version {v}"))
            .unwrap_or_default()
    );
}
