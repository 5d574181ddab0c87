//! Eval command - run a labeled corpus through the parser

use anyhow::Result;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use ultron_core::{Config, Corpus, EvalReport, IntentParser};

pub fn run(config: &Config, corpus_path: Option<&str>, show_failures: bool) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!(
        "{} Ultron Intent Evaluation",
        style("📊").cyan()
    ))?;
    term.write_line("")?;

    let corpus = match corpus_path {
        Some(path) => Corpus::load(Path::new(path))?,
        None => Corpus::builtin()?,
    };
    term.write_line(&format!(
        "Corpus:       {} ({} cases)",
        style(corpus_path.unwrap_or("built-in")).cyan(),
        style(corpus.len()).cyan()
    ))?;
    term.write_line(&format!(
        "Alias cutoff: {}",
        style(config.matching.alias_cutoff).cyan()
    ))?;
    term.write_line("")?;

    let parser = IntentParser::from_config(config);

    let pb = ProgressBar::new(corpus.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut report = EvalReport::default();
    for case in &corpus.cases {
        pb.set_message(case.text.clone());
        report.record(case.check(&parser));
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_report(&term, &report, show_failures)?;

    Ok(())
}

fn print_report(term: &Term, report: &EvalReport, show_failures: bool) -> Result<()> {
    term.write_line(&format!("{}", style("═".repeat(60)).dim()))?;
    term.write_line(&format!("{}", style("EVALUATION RESULTS").bold()))?;
    term.write_line(&format!("{}", style("═".repeat(60)).dim()))?;
    term.write_line("")?;

    term.write_line(&format!("Cases:    {}", style(report.total).cyan()))?;
    term.write_line(&format!("Passed:   {}", style(report.passed).green()))?;
    term.write_line(&format!("Failed:   {}", style(report.failures.len()).yellow()))?;

    let accuracy = report.accuracy() * 100.0;
    let accuracy_str = format!("{:.1}%", accuracy);
    let accuracy_styled = if accuracy >= 95.0 {
        style(accuracy_str).green()
    } else if accuracy >= 80.0 {
        style(accuracy_str).yellow()
    } else {
        style(accuracy_str).red()
    };
    term.write_line(&format!("Accuracy: {}", accuracy_styled))?;

    let by_kind = report.failures_by_kind();
    if !by_kind.is_empty() {
        term.write_line("")?;
        term.write_line(&format!("{}", style("Failures by kind:").dim()))?;
        for (kind, count) in by_kind {
            term.write_line(&format!("  {:<22} {}", kind.as_str(), count))?;
        }
    }

    if show_failures && !report.failures.is_empty() {
        term.write_line("")?;
        term.write_line(&format!("{}", style("Failing cases:").dim()))?;
        for failure in &report.failures {
            term.write_line(&format!(
                "  {} {:?}",
                style("✗").red(),
                failure.text
            ))?;
            term.write_line(&format!(
                "      {}: expected {}, got {} entity={:?}",
                failure.kind.as_str(),
                failure.expected,
                failure.actual.intent,
                failure.actual.entity
            ))?;
        }
    }

    Ok(())
}
