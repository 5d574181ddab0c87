//! Bench command - time the matcher cascade

use anyhow::Result;
use console::{style, Term};
use std::time::Instant;
use ultron_core::{Config, Corpus, IntentParser};

pub fn run(config: &Config, iterations: u32) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!(
        "{} Ultron Parser Benchmark",
        style("⚡").yellow()
    ))?;
    term.write_line("")?;

    let corpus = Corpus::builtin()?;
    let iterations = iterations.max(1);
    term.write_line(&format!("Utterances: {}", corpus.len()))?;
    term.write_line(&format!("Iterations: {}", iterations))?;
    term.write_line("")?;

    let parser = IntentParser::from_config(config);

    // Warm up the lazily compiled patterns
    for case in &corpus.cases {
        parser.parse(&case.text);
    }

    let mut pass_times = Vec::with_capacity(iterations as usize);
    let mut slowest = Vec::with_capacity(corpus.len());

    for _ in 0..iterations {
        let start = Instant::now();
        for case in &corpus.cases {
            parser.parse(&case.text);
        }
        pass_times.push(start.elapsed().as_micros() as u64);
    }

    // Slowest individual utterances, single pass
    for case in &corpus.cases {
        let start = Instant::now();
        parser.parse(&case.text);
        slowest.push((start.elapsed().as_nanos() as u64, case.text.as_str()));
    }
    slowest.sort_by(|a, b| b.0.cmp(&a.0));

    term.write_line(&format!("{}", style("Results:").bold()))?;
    term.write_line("")?;

    let avg_pass: u64 = pass_times.iter().sum::<u64>() / iterations as u64;
    let min_pass = *pass_times.iter().min().unwrap_or(&0);
    let max_pass = *pass_times.iter().max().unwrap_or(&0);
    let avg_utterance = avg_pass as f64 / corpus.len().max(1) as f64;

    term.write_line(&format!(
        "Corpus pass:    avg {}µs (min: {}, max: {})",
        style(avg_pass).green(),
        min_pass,
        max_pass
    ))?;
    term.write_line(&format!(
        "Per utterance:  avg {}µs",
        style(format!("{:.1}", avg_utterance)).cyan()
    ))?;

    term.write_line("")?;
    term.write_line(&format!("{}", style("Slowest utterances:").dim()))?;
    for (nanos, text) in slowest.iter().take(5) {
        term.write_line(&format!("  {:>8.1}µs  {}", *nanos as f64 / 1000.0, text))?;
    }

    Ok(())
}
