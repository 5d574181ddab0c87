//! Listen command - classify transcripts streamed on stdin
//!
//! Each non-empty input line yields one JSON object on stdout, so a speech
//! front end can pipe its transcripts straight through.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use ultron_core::{plan, Config, IntentParser};

pub fn run(config: &Config, show_plan: bool) -> Result<()> {
    let parser = IntentParser::from_config(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let mut handled = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let value = classify_line(&parser, config, &line, show_plan)?;
        writeln!(stdout, "{value}")?;
        stdout.flush()?;
        handled += 1;
    }

    tracing::debug!(lines = handled, "Input closed");
    Ok(())
}

fn classify_line(
    parser: &IntentParser,
    config: &Config,
    line: &str,
    show_plan: bool,
) -> Result<serde_json::Value> {
    let result = parser.parse(line);
    let mut value = serde_json::json!({
        "text": line,
        "intent": result.intent,
        "entity": result.entity,
        "slots": result.slots,
    });
    if show_plan {
        value["plan"] = serde_json::to_value(plan(&result, line, config))?;
    }
    Ok(value)
}
