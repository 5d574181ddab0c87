//! Explicit URLs and bare domains

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::MatchContext;
use crate::aliases::{self, SiteTarget};
use crate::intent::{Intent, IntentResult};
use crate::slots;

// Last label must start with a letter and be two or more characters,
// so "3.14" and "e.g" are not domains
static URL_OR_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:https?://)?(?:www\.)?[a-z0-9\-]+(?:\.[a-z0-9\-]+)*\.[a-z][a-z0-9\-]+(?::\d+)?(?:/\S*)?",
    )
    .unwrap()
});

pub fn detect(text: &str) -> bool {
    URL_OR_DOMAIN.is_match(text)
}

pub fn extract(ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    find_site(ctx, text).map(|site| IntentResult::with_entity(Intent::OpenSite, site))
}

/// First URL or domain in the text, with a canonical host.
///
/// The scheme and `www.` are dropped, renamed domains are collapsed and
/// alias hosts are substituted. Port, path, query and fragment are kept.
pub fn find_site(ctx: &MatchContext, text: &str) -> Option<String> {
    let found = URL_OR_DOMAIN.find(text)?;
    let raw = found.as_str().trim_end_matches(slots::TRAILING_PUNCTUATION);

    let lower = raw.to_lowercase();
    let absolute = if lower.starts_with("http://") || lower.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let parsed = Url::parse(&absolute).ok()?;
    let mut site = aliases::canonical_domain(parsed.host_str()?);

    if let Some(SiteTarget::Domain(domain)) = aliases::lookup_site(&site, ctx.alias_cutoff) {
        site = domain.to_string();
    }

    if let Some(port) = parsed.port() {
        site.push_str(&format!(":{port}"));
    }
    if parsed.path() != "/" {
        site.push_str(parsed.path());
    }
    if let Some(query) = parsed.query() {
        site.push('?');
        site.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        site.push('#');
        site.push_str(fragment);
    }

    tracing::trace!(raw, site = %site, "Canonicalized site");
    Some(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(text: &str) -> Option<String> {
        find_site(&MatchContext::default(), text)
    }

    #[test]
    fn test_bare_domain() {
        assert_eq!(site("open github.com"), Some("github.com".to_string()));
        assert_eq!(site("go to google.com."), Some("google.com".to_string()));
    }

    #[test]
    fn test_scheme_and_www_dropped() {
        assert_eq!(site("https://www.example.org"), Some("example.org".to_string()));
        assert_eq!(site("visit HTTP://WWW.Example.ORG"), Some("example.org".to_string()));
    }

    #[test]
    fn test_renamed_domain() {
        assert_eq!(site("open twitter.com"), Some("x.com".to_string()));
        assert_eq!(site("open www.twitter.com/home"), Some("x.com/home".to_string()));
    }

    #[test]
    fn test_path_query_fragment_kept() {
        assert_eq!(
            site("open https://docs.rs/regex/latest?search=Captures#examples"),
            Some("docs.rs/regex/latest?search=Captures#examples".to_string())
        );
    }

    #[test]
    fn test_not_domains() {
        assert!(!detect("pi is 3.14"));
        assert!(!detect("e.g this"));
        assert!(!detect("open youtube"));
    }
}
