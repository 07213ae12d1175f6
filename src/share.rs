//! Shareable analysis links.
//!
//! The hosted frontend reflects the analyzed domain in its URL as a
//! `?domain=` query parameter so results are linkable and restorable. The
//! CLI honors the same contract from both sides: it prints a share link
//! after a successful analysis, and it accepts a pasted link as input,
//! extracting the domain from the query string.

use url::Url;

/// Builds a shareable frontend link for a domain.
pub fn share_link(app_base_url: &str, domain: &str) -> Option<String> {
    let mut url = Url::parse(app_base_url).ok()?;
    url.query_pairs_mut().clear().append_pair("domain", domain);
    Some(url.to_string())
}

/// Extracts the domain from a pasted share link.
///
/// Returns `None` when the input is not an http(s) URL or carries no
/// non-empty `domain` parameter, in which case the caller treats the input
/// as a literal domain. The scheme check matters: bare inputs like
/// `example.com:8080` technically parse as URLs with scheme `example.com`.
pub fn domain_from_link(input: &str) -> Option<String> {
    let url = Url::parse(input.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.query_pairs()
        .find(|(key, _)| key == "domain")
        .map(|(_, value)| value.trim().to_string())
        .filter(|domain| !domain.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link_round_trip() {
        let link = share_link("https://astraverify.com", "gmail.com").unwrap();
        assert_eq!(link, "https://astraverify.com/?domain=gmail.com");
        assert_eq!(domain_from_link(&link), Some("gmail.com".into()));
    }

    #[test]
    fn test_share_link_encodes_special_characters() {
        let link = share_link("https://astraverify.com", "münchen.de").unwrap();
        assert!(link.contains("domain="));
        assert_eq!(domain_from_link(&link), Some("münchen.de".into()));
    }

    #[test]
    fn test_plain_domain_is_not_a_link() {
        assert_eq!(domain_from_link("gmail.com"), None);
        assert_eq!(domain_from_link("example.com:8080"), None);
    }

    #[test]
    fn test_link_without_domain_parameter() {
        assert_eq!(domain_from_link("https://astraverify.com/"), None);
        assert_eq!(domain_from_link("https://astraverify.com/?domain="), None);
        assert_eq!(
            domain_from_link("https://astraverify.com/?other=x&domain=example.com"),
            Some("example.com".into())
        );
    }
}
