//! Domain input normalization.
//!
//! The backend is the sole real validator; the client only trims the input
//! and strips decoration the way the backend itself does before analysis
//! (scheme, `www.` prefix, any path). Emptiness is the one condition
//! rejected client-side.

/// Normalizes user input into a bare domain.
///
/// Returns `None` when the input is empty or reduces to nothing after
/// stripping, which the caller surfaces as an inline validation message
/// without touching the network.
pub fn normalize_domain(input: &str) -> Option<String> {
    let mut domain = input.trim();
    for prefix in ["http://", "https://"] {
        if let Some(rest) = domain.strip_prefix(prefix) {
            domain = rest;
        }
    }
    if let Some(rest) = domain.strip_prefix("www.") {
        domain = rest;
    }
    if let Some((host, _path)) = domain.split_once('/') {
        domain = host;
    }
    let domain = domain.trim();
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_domain_passes_through() {
        assert_eq!(normalize_domain("gmail.com"), Some("gmail.com".into()));
        assert_eq!(normalize_domain("  gmail.com  "), Some("gmail.com".into()));
    }

    #[test]
    fn test_scheme_and_www_are_stripped() {
        assert_eq!(
            normalize_domain("https://www.example.com"),
            Some("example.com".into())
        );
        assert_eq!(
            normalize_domain("http://example.com/path?x=1"),
            Some("example.com".into())
        );
        assert_eq!(
            normalize_domain("www.example.com"),
            Some("example.com".into())
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("   "), None);
        assert_eq!(normalize_domain("https://"), None);
        assert_eq!(normalize_domain("www."), None);
    }

    #[test]
    fn test_no_format_validation_happens_client_side() {
        // The backend is the sole validator; odd strings go through as-is.
        assert_eq!(normalize_domain("not a domain"), Some("not a domain".into()));
        assert_eq!(
            normalize_domain("nonexistent-xyz.invalid"),
            Some("nonexistent-xyz.invalid".into())
        );
    }
}
