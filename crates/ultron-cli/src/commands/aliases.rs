//! Aliases command - print the built-in alias tables

use anyhow::{bail, Result};
use console::{style, Term};
use ultron_core::aliases::{self, SiteTarget, APP_ALIASES, SITE_ALIASES};

pub fn run(table: Option<&str>) -> Result<()> {
    let term = Term::stdout();

    match table.map(|t| t.to_lowercase()).as_deref() {
        None => {
            sites(&term)?;
            term.write_line("")?;
            apps(&term)?;
            term.write_line("")?;
            domains(&term)?;
        }
        Some("sites" | "site") => sites(&term)?,
        Some("apps" | "app") => apps(&term)?,
        Some("domains" | "domain") => domains(&term)?,
        Some(other) => bail!("Unknown alias table '{}'. Available: sites, apps, domains", other),
    }

    Ok(())
}

fn sites(term: &Term) -> Result<()> {
    term.write_line(&format!(
        "{} ({})",
        style("Site aliases").bold(),
        SITE_ALIASES.len()
    ))?;
    for (spoken, target) in SITE_ALIASES.entries() {
        let target = match target {
            SiteTarget::Domain(domain) => style(domain.to_string()).cyan(),
            SiteTarget::PreferApp(app) => style(format!("{app} (app)")).yellow(),
        };
        term.write_line(&format!("  {:<18} {}", spoken, target))?;
    }
    Ok(())
}

fn apps(term: &Term) -> Result<()> {
    term.write_line(&format!(
        "{} ({})",
        style("App aliases").bold(),
        APP_ALIASES.len()
    ))?;
    for (spoken, app) in APP_ALIASES.entries() {
        term.write_line(&format!("  {:<18} {}", spoken, style(app).cyan()))?;
    }
    Ok(())
}

fn domains(term: &Term) -> Result<()> {
    term.write_line(&format!("{}", style("Canonical domains").bold()))?;
    for (host, canonical) in aliases::domain_canonical_entries() {
        term.write_line(&format!("  {:<18} {}", host, style(canonical).cyan()))?;
    }
    Ok(())
}
