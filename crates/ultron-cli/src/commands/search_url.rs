//! Search-url command - show the URL a site search would open

use anyhow::Result;
use console::{style, Term};
use ultron_core::build_site_search_url;
use ultron_core::site_search::{canonical_host, candidate_search_urls};

pub fn run(site: &str, query: &str, prefer_direct: bool) -> Result<()> {
    let term = Term::stdout();

    let url = build_site_search_url(Some(site), Some(query), prefer_direct);
    term.write_line(&url)?;

    if !prefer_direct {
        return Ok(());
    }

    if let Some(host) = canonical_host(site) {
        let others: Vec<String> = candidate_search_urls(&host, query)
            .into_iter()
            .filter(|candidate| *candidate != url)
            .collect();
        if !others.is_empty() {
            term.write_line("")?;
            term.write_line(&format!("{}", style("Other candidates:").dim()))?;
            for candidate in others {
                term.write_line(&format!("  {}", style(candidate).dim()))?;
            }
        }
    }

    Ok(())
}
