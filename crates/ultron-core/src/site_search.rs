//! Search URL construction for `site.search` results
//!
//! Pure string building: no candidate is ever fetched or probed.

use url::form_urlencoded;
use url::Url;

use crate::aliases;

/// Known site-specific search endpoints, matched by host suffix.
/// `{q}` is the form-encoded query, `{host}` the canonical host.
const SEARCH_TEMPLATES: &[(&str, &str)] = &[
    ("bestbuy.com", "https://www.bestbuy.com/site/searchpage.jsp?st={q}"),
    ("amazon.com", "https://www.amazon.com/s?k={q}"),
    ("walmart.com", "https://www.walmart.com/search?q={q}"),
    ("ebay.com", "https://www.ebay.com/sch/i.html?_nkw={q}"),
    ("youtube.com", "https://www.youtube.com/results?search_query={q}"),
    ("x.com", "https://x.com/search?q={q}"),
    ("twitter.com", "https://x.com/search?q={q}"),
    ("reddit.com", "https://www.reddit.com/search/?q={q}"),
    ("tiktok.com", "https://www.tiktok.com/search?q={q}"),
    ("instagram.com", "https://www.instagram.com/explore/search/keyword/?q={q}"),
    ("github.com", "https://github.com/search?q={q}"),
    ("gitlab.com", "https://gitlab.com/search?search={q}"),
    ("wikipedia.org", "https://en.wikipedia.org/w/index.php?search={q}"),
    ("medium.com", "https://medium.com/search?q={q}"),
    ("stackexchange.com", "https://{host}/search?q={q}"),
    ("stackoverflow.com", "https://stackoverflow.com/search?q={q}"),
    ("docs.google.com", "https://www.google.com/search?q=site%3A{host}+{q}"),
];

/// Generic search paths tried for hosts without a template
const GENERIC_PATTERNS: &[&str] = &[
    "https://{host}/search?q={q}",
    "https://{host}/search?query={q}",
    "https://{host}/search/?q={q}",
    "https://{host}/?s={q}",
    "https://{host}/s?k={q}",
    "https://{host}/find?q={q}",
    "https://{host}/results?search_query={q}",
    "https://{host}/sch/i.html?_nkw={q}",
];

const GOOGLE_HOME: &str = "https://www.google.com";

/// Build the URL a `site.search` intent should open.
///
/// `prefer_direct` chooses the site's own search page over a Google
/// `site:` query.
pub fn build_site_search_url(site: Option<&str>, query: Option<&str>, prefer_direct: bool) -> String {
    let query = query.map(clean_query).filter(|q| !q.is_empty());
    let host = site.and_then(canonical_host);

    match (host, query) {
        (None, None) => GOOGLE_HOME.to_string(),
        (None, Some(q)) => format!("{GOOGLE_HOME}/search?q={}", encode(&q)),
        (Some(host), None) => format!("https://{host}"),
        (Some(host), Some(q)) if prefer_direct => candidate_search_urls(&host, &q)
            .into_iter()
            .next()
            .unwrap_or_else(|| google_site_search(&host, &q)),
        (Some(host), Some(q)) => google_site_search(&host, &q),
    }
}

/// Direct search URLs for a host, best guess first
pub fn candidate_search_urls(host: &str, query: &str) -> Vec<String> {
    let encoded = encode(&clean_query(query));
    let fill = |template: &str| template.replace("{host}", host).replace("{q}", &encoded);

    let mut urls = Vec::new();
    if let Some((_, template)) = SEARCH_TEMPLATES.iter().find(|(suffix, _)| host_matches(host, suffix)) {
        urls.push(fill(template));
    }
    for pattern in GENERIC_PATTERNS {
        let url = fill(pattern);
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

/// Lowercase, drop spaces, default to `.com` and `https://`.
pub fn ensure_url(site: &str) -> String {
    let trimmed = site.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return trimmed.to_string();
    }

    // Only the host part is case-folded; paths keep their case
    let (host, rest) = match trimmed.find(|c: char| c == '/' || c == '?' || c == '#') {
        Some(i) => trimmed.split_at(i),
        None => (trimmed, ""),
    };
    let mut host: String = host.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase();
    if !host.contains('.') {
        host.push_str(".com");
    }

    format!("https://{host}{rest}")
}

/// Canonical host for a site given as a name, domain or URL
pub fn canonical_host(site: &str) -> Option<String> {
    let site = site.trim();
    if site.is_empty() {
        return None;
    }

    let lower = site.to_lowercase();
    let absolute = if lower.starts_with("http://") || lower.starts_with("https://") {
        site.to_string()
    } else {
        format!("https://{}", site.replace(' ', ""))
    };

    let parsed = Url::parse(&absolute).ok()?;
    parsed.host_str().map(aliases::canonical_domain)
}

fn host_matches(host: &str, suffix: &str) -> bool {
    host == suffix || host.ends_with(&format!(".{suffix}"))
}

fn google_site_search(host: &str, query: &str) -> String {
    format!("{GOOGLE_HOME}/search?q=site%3A{host}+{}", encode(query))
}

fn clean_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn encode(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_site_no_query() {
        assert_eq!(build_site_search_url(None, None, true), "https://www.google.com");
        assert_eq!(build_site_search_url(Some(""), Some("   "), true), "https://www.google.com");
    }

    #[test]
    fn test_google_fallback() {
        assert_eq!(
            build_site_search_url(None, Some("rust borrow checker"), true),
            "https://www.google.com/search?q=rust+borrow+checker"
        );
    }

    #[test]
    fn test_site_home_page() {
        assert_eq!(build_site_search_url(Some("www.reddit.com"), None, true), "https://reddit.com");
    }

    #[test]
    fn test_known_template() {
        assert_eq!(
            build_site_search_url(Some("youtube.com"), Some("lofi  beats"), true),
            "https://www.youtube.com/results?search_query=lofi+beats"
        );
        assert_eq!(
            build_site_search_url(Some("https://www.bestbuy.com"), Some("usb c hub"), true),
            "https://www.bestbuy.com/site/searchpage.jsp?st=usb+c+hub"
        );
    }

    #[test]
    fn test_twitter_collapses_to_x() {
        assert_eq!(
            build_site_search_url(Some("twitter.com"), Some("rustlang"), true),
            "https://x.com/search?q=rustlang"
        );
    }

    #[test]
    fn test_subdomain_template() {
        assert_eq!(
            build_site_search_url(Some("unix.stackexchange.com"), Some("find"), true),
            "https://unix.stackexchange.com/search?q=find"
        );
    }

    #[test]
    fn test_generic_host() {
        assert_eq!(
            build_site_search_url(Some("example.org"), Some("a&b"), true),
            "https://example.org/search?q=a%26b"
        );
    }

    #[test]
    fn test_google_site_search() {
        assert_eq!(
            build_site_search_url(Some("github.com"), Some("serde"), false),
            "https://www.google.com/search?q=site%3Agithub.com+serde"
        );
    }

    #[test]
    fn test_candidates_deduped() {
        let urls = candidate_search_urls("example.org", "x");
        assert_eq!(urls.len(), GENERIC_PATTERNS.len());
        assert_eq!(urls[0], "https://example.org/search?q=x");
    }

    #[test]
    fn test_ensure_url() {
        assert_eq!(ensure_url("YouTube.com"), "https://youtube.com");
        assert_eq!(ensure_url("hacker news"), "https://hackernews.com");
        assert_eq!(ensure_url("github.com/Rust-Lang"), "https://github.com/Rust-Lang");
        assert_eq!(ensure_url("http://example.org"), "http://example.org");
        assert_eq!(ensure_url(""), "");
    }
}
