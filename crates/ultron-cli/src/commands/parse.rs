//! Parse command - classify one utterance

use anyhow::Result;
use console::{style, Term};
use ultron_core::{plan, Config, IntentParser};

pub fn run(config: &Config, text: &str, json: bool, show_plan: bool) -> Result<()> {
    let term = Term::stdout();
    let parser = IntentParser::from_config(config);
    let classification = parser.classify(text);
    let result = &classification.result;

    if json {
        let mut value = serde_json::to_value(result)?;
        if show_plan {
            value["plan"] = serde_json::to_value(plan(result, text, config))?;
        }
        term.write_line(&serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    let marker = if result.is_unknown() {
        style("?").yellow()
    } else {
        style("✓").green()
    };
    term.write_line(&format!("{} {}", marker, style(result.intent).bold()))?;

    term.write_line(&format!(
        "  Normalized:   {}",
        style(&classification.normalized).dim()
    ))?;
    term.write_line(&format!(
        "  Category:     {}",
        style(classification.category.map(|c| c.as_str()).unwrap_or("none")).cyan()
    ))?;
    term.write_line(&format!(
        "  Entity:       {}",
        style(result.entity.as_deref().unwrap_or("-")).cyan()
    ))?;

    if !result.slots.is_empty() {
        term.write_line(&format!("  {}", style("Slots:").dim()))?;
        for (name, value) in &result.slots {
            term.write_line(&format!(
                "    {:<10} {}",
                name,
                value.as_deref().unwrap_or("-")
            ))?;
        }
    }

    if show_plan {
        term.write_line("")?;
        term.write_line(&format!(
            "{} {}",
            style("→").cyan(),
            plan(result, text, config)
        ))?;
    }

    Ok(())
}
