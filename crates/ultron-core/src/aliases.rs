//! Static alias tables
//!
//! Spoken short names map to canonical targets: site names to domains,
//! application names to launcher ids. Lookups try an exact,
//! case-insensitive key first and then fall back to a difflib-style
//! similarity match over the table keys. The tables are compiled in and
//! never mutated, so they are shared freely across threads.

/// Similarity cutoff for fuzzy alias matches.
///
/// Looser values let "edit"-like words resolve to "reddit"; tighter values
/// reject legitimate recognizer misspellings.
pub const DEFAULT_ALIAS_CUTOFF: f32 = 0.86;

/// Where a spoken site name should take the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteTarget {
    /// Open this domain in the browser
    Domain(&'static str),
    /// Prefer the native application over the web page
    PreferApp(&'static str),
}

/// An immutable spoken-name → value table with fuzzy fallback
#[derive(Debug)]
pub struct AliasTable<V: 'static> {
    entries: &'static [(&'static str, V)],
}

impl<V: Copy + 'static> AliasTable<V> {
    /// Keys must be lowercase
    pub const fn new(entries: &'static [(&'static str, V)]) -> Self {
        Self { entries }
    }

    /// Exact, case-insensitive key match
    pub fn exact(&self, spoken: &str) -> Option<V> {
        let key = spoken.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Best single key above `cutoff`, ranked by the matcher's own ordering
    pub fn fuzzy(&self, spoken: &str, cutoff: f32) -> Option<V> {
        let key = spoken.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        let keys: Vec<&str> = self.entries.iter().map(|(k, _)| *k).collect();
        let best = similar::get_close_matches(key.as_str(), &keys, 1, cutoff);

        best.first().and_then(|matched| self.exact(matched))
    }

    /// Exact match, then fuzzy. `None` is "no match", never an error.
    pub fn resolve(&self, spoken: &str, cutoff: f32) -> Option<V> {
        self.exact(spoken).or_else(|| self.fuzzy(spoken, cutoff))
    }

    pub fn entries(&self) -> &'static [(&'static str, V)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Spoken site names
pub static SITE_ALIASES: AliasTable<SiteTarget> = AliasTable::new(&[
    ("google", SiteTarget::Domain("google.com")),
    ("gmail", SiteTarget::Domain("mail.google.com")),
    ("youtube", SiteTarget::Domain("youtube.com")),
    ("you tube", SiteTarget::Domain("youtube.com")),
    ("yt", SiteTarget::Domain("youtube.com")),
    ("youtube music", SiteTarget::Domain("music.youtube.com")),
    ("github", SiteTarget::Domain("github.com")),
    ("stack overflow", SiteTarget::Domain("stackoverflow.com")),
    ("stackoverflow", SiteTarget::Domain("stackoverflow.com")),
    ("reddit", SiteTarget::Domain("reddit.com")),
    ("twitter", SiteTarget::Domain("x.com")),
    ("x", SiteTarget::Domain("x.com")),
    ("facebook", SiteTarget::Domain("facebook.com")),
    ("instagram", SiteTarget::Domain("instagram.com")),
    ("netflix", SiteTarget::Domain("netflix.com")),
    ("maps", SiteTarget::Domain("maps.google.com")),
    ("google maps", SiteTarget::Domain("maps.google.com")),
    ("drive", SiteTarget::Domain("drive.google.com")),
    ("docs", SiteTarget::Domain("docs.google.com")),
    ("amazon", SiteTarget::Domain("amazon.com")),
    ("best buy", SiteTarget::Domain("bestbuy.com")),
    ("bestbuy", SiteTarget::Domain("bestbuy.com")),
    ("ebay", SiteTarget::Domain("ebay.com")),
    ("walmart", SiteTarget::Domain("walmart.com")),
    ("wikipedia", SiteTarget::Domain("wikipedia.org")),
    ("linkedin", SiteTarget::Domain("linkedin.com")),
    ("chatgpt", SiteTarget::Domain("chatgpt.com")),
    // Contact apps: the desktop client beats the web page
    ("whatsapp", SiteTarget::PreferApp("whatsapp")),
    ("telegram", SiteTarget::PreferApp("telegram")),
    ("teams", SiteTarget::PreferApp("teams")),
    ("microsoft teams", SiteTarget::PreferApp("teams")),
]);

/// Spoken application and browser names
pub static APP_ALIASES: AliasTable<&'static str> = AliasTable::new(&[
    // Browsers
    ("chrome", "chrome"),
    ("google chrome", "chrome"),
    ("edge", "edge"),
    ("microsoft edge", "edge"),
    ("firefox", "firefox"),
    ("mozilla firefox", "firefox"),
    ("brave", "brave"),
    ("opera", "opera"),
    ("default browser", "default"),
    ("browser", "default"),
    // Editors / IDEs
    ("notepad", "notepad"),
    ("wordpad", "wordpad"),
    ("vscode", "vscode"),
    ("vs code", "vscode"),
    ("visual studio code", "vscode"),
    ("visual studio", "visualstudio"),
    ("visualstudio", "visualstudio"),
    ("pycharm", "pycharm"),
    // Media / chat / gaming
    ("spotify", "spotify"),
    ("vlc", "vlc"),
    ("discord", "discord"),
    ("slack", "slack"),
    ("steam", "steam"),
    // Utilities
    ("calculator", "calculator"),
    ("calc", "calculator"),
    ("paint", "mspaint"),
    ("mspaint", "mspaint"),
    ("snipping tool", "snippingtool"),
    ("snippingtool", "snippingtool"),
    ("file explorer", "explorer"),
    ("explorer", "explorer"),
    ("task manager", "taskmgr"),
    ("taskmgr", "taskmgr"),
    ("settings", "settings"),
]);

/// Renamed or alternate hosts collapsed to their canonical domain
const DOMAIN_CANONICAL: &[(&str, &str)] = &[
    ("twitter.com", "x.com"),
    ("mobile.twitter.com", "x.com"),
    ("fb.com", "facebook.com"),
    ("m.facebook.com", "facebook.com"),
];

/// Resolve a spoken site name
pub fn lookup_site(spoken: &str, cutoff: f32) -> Option<SiteTarget> {
    SITE_ALIASES.resolve(spoken, cutoff)
}

/// Resolve a spoken application name to its launcher id
pub fn lookup_app(spoken: &str, cutoff: f32) -> Option<&'static str> {
    APP_ALIASES.resolve(spoken, cutoff)
}

/// Canonical form of an already-parsed hostname.
///
/// Lowercases, drops a leading `www.` and collapses renamed domains.
pub fn canonical_domain(host: &str) -> String {
    let lower = host.trim().to_lowercase();
    let bare = lower.strip_prefix("www.").unwrap_or(&lower);

    DOMAIN_CANONICAL
        .iter()
        .find(|(from, _)| *from == bare)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| bare.to_string())
}

/// Tables exposed for listing, as (spoken, canonical) pairs
pub fn domain_canonical_entries() -> &'static [(&'static str, &'static str)] {
    DOMAIN_CANONICAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_site() {
        assert_eq!(
            lookup_site("youtube", DEFAULT_ALIAS_CUTOFF),
            Some(SiteTarget::Domain("youtube.com"))
        );
        assert_eq!(
            lookup_site("Stack Overflow", DEFAULT_ALIAS_CUTOFF),
            Some(SiteTarget::Domain("stackoverflow.com"))
        );
    }

    #[test]
    fn test_fuzzy_site() {
        // Recognizer dropped a letter
        assert_eq!(
            lookup_site("redit", DEFAULT_ALIAS_CUTOFF),
            Some(SiteTarget::Domain("reddit.com"))
        );
        assert_eq!(
            lookup_site("instagam", DEFAULT_ALIAS_CUTOFF),
            Some(SiteTarget::Domain("instagram.com"))
        );
    }

    #[test]
    fn test_fuzzy_rejects_distant_words() {
        assert_eq!(lookup_site("edit", DEFAULT_ALIAS_CUTOFF), None);
        assert_eq!(lookup_site("weather", DEFAULT_ALIAS_CUTOFF), None);
        assert_eq!(lookup_site("", DEFAULT_ALIAS_CUTOFF), None);
    }

    #[test]
    fn test_prefer_app_target() {
        assert_eq!(
            lookup_site("WhatsApp", DEFAULT_ALIAS_CUTOFF),
            Some(SiteTarget::PreferApp("whatsapp"))
        );
    }

    #[test]
    fn test_app_aliases() {
        assert_eq!(lookup_app("google chrome", DEFAULT_ALIAS_CUTOFF), Some("chrome"));
        assert_eq!(lookup_app("Microsoft Edge", DEFAULT_ALIAS_CUTOFF), Some("edge"));
        assert_eq!(lookup_app("firefx", DEFAULT_ALIAS_CUTOFF), Some("firefox"));
        assert_eq!(lookup_app("youtube", DEFAULT_ALIAS_CUTOFF), None);
    }

    #[test]
    fn test_site_resolution_is_idempotent() {
        for (_, target) in SITE_ALIASES.entries() {
            if let SiteTarget::Domain(domain) = target {
                let again = match lookup_site(domain, DEFAULT_ALIAS_CUTOFF) {
                    Some(SiteTarget::Domain(d)) => d,
                    _ => domain,
                };
                assert_eq!(again, *domain, "domain {domain} changed on re-resolution");
            }
        }
    }

    #[test]
    fn test_app_resolution_is_idempotent() {
        for (_, app) in APP_ALIASES.entries() {
            let again = lookup_app(app, DEFAULT_ALIAS_CUTOFF).unwrap_or(app);
            assert_eq!(again, *app);
        }
    }

    #[test]
    fn test_canonical_domain() {
        assert_eq!(canonical_domain("www.twitter.com"), "x.com");
        assert_eq!(canonical_domain("mobile.twitter.com"), "x.com");
        assert_eq!(canonical_domain("WWW.GitHub.com"), "github.com");
        assert_eq!(canonical_domain("x.com"), "x.com");
    }

    #[test]
    fn test_keys_are_lowercase() {
        for (key, _) in SITE_ALIASES.entries() {
            assert_eq!(*key, key.to_lowercase());
        }
        for (key, _) in APP_ALIASES.entries() {
            assert_eq!(*key, key.to_lowercase());
        }
    }
}
