//! Site-scoped search ("search youtube for lofi beats")
//!
//! Produces the `site` and `query` slots. A site is only accepted when it
//! resolves through the site alias table or looks like a domain; otherwise
//! the words are folded back into the query.

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchContext;
use crate::aliases::{self, SiteTarget};
use crate::intent::{Intent, IntentResult};
use crate::slots;

static SEARCH_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:search|look\s+up|lookup|find)\b").unwrap());

// "on youtube for cats"
static SITE_THEN_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:on|in)\s+(.+?)\s+for\s+(.+)$").unwrap());

// "for cats on youtube", "cats on youtube"
static QUERY_THEN_SITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:for\s+)?(.+?)\s+(?:on|in|at)\s+(\S+(?:\s+\S+)?)$").unwrap()
});

// "youtube for cats"
static BARE_SITE_FOR_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\S+(?:\s+\S+)?)\s+for\s+(.+)$").unwrap());

// "on youtube" (query given in quotes)
static SITE_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:on|in|at)\s+(.+)$").unwrap());

static LEADING_FOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:for|about)(?:\s+|$)").unwrap());

static DOMAIN_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9\-]+(?:\.[a-z0-9\-]+)*\.[a-z]{2,}$").unwrap());

pub fn detect(text: &str) -> bool {
    SEARCH_VERB.is_match(text)
}

pub fn extract(ctx: &MatchContext, text: &str) -> Option<IntentResult> {
    let verb = SEARCH_VERB.find(text)?;
    let tail = &text[verb.end()..];

    let quoted = slots::quoted_text(tail);
    let rest = slots::trim_phrase(&slots::without_quoted(tail));

    let (site, query) = split_site_and_query(ctx, &rest);
    let query = quoted.or(query);

    if site.is_none() && query.is_none() {
        return None;
    }

    Some(
        IntentResult::new(Intent::SiteSearch)
            .slot("site", site)
            .slot("query", query),
    )
}

/// Try each phrasing in turn; fall back to the whole remainder as query
fn split_site_and_query(ctx: &MatchContext, rest: &str) -> (Option<String>, Option<String>) {
    if rest.is_empty() {
        return (None, None);
    }

    if let Some(caps) = SITE_THEN_QUERY.captures(rest) {
        if let Some(site) = resolve_site(ctx, &caps[1]) {
            return (Some(site), clean_query(&caps[2]));
        }
    }

    if let Some(caps) = QUERY_THEN_SITE.captures(rest) {
        if let Some(site) = resolve_site(ctx, &caps[2]) {
            return (Some(site), clean_query(&caps[1]));
        }
    }

    if let Some(caps) = BARE_SITE_FOR_QUERY.captures(rest) {
        if let Some(site) = resolve_site(ctx, &caps[1]) {
            return (Some(site), clean_query(&caps[2]));
        }
    }

    if let Some(caps) = SITE_ONLY.captures(rest) {
        if let Some(site) = resolve_site(ctx, &caps[1]) {
            return (Some(site), None);
        }
    }

    (None, clean_query(rest))
}

/// Alias name or domain-shaped token, canonicalized
fn resolve_site(ctx: &MatchContext, candidate: &str) -> Option<String> {
    let candidate = slots::trim_phrase(candidate).to_lowercase();
    let candidate = candidate.strip_prefix("the ").unwrap_or(&candidate);

    match aliases::lookup_site(candidate, ctx.alias_cutoff) {
        Some(SiteTarget::Domain(domain)) => Some(domain.to_string()),
        Some(SiteTarget::PreferApp(_)) => None,
        None if DOMAIN_LIKE.is_match(candidate) => Some(aliases::canonical_domain(candidate)),
        None => None,
    }
}

fn clean_query(raw: &str) -> Option<String> {
    let query = slots::trim_phrase(&LEADING_FOR.replace(raw.trim(), ""));
    (!query.is_empty()).then_some(query)
}
