//! Subcommand execution.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use transit_core::errors::{ConfigError, TransitErrorCode};
use transit_core::{ClassificationResult, IntentBank, IntentScore, TransitConfig, TransitError};
use transit_intent::summary::score_table;
use transit_intent::IntentClassifier;

use crate::args::{BankArgs, CliArgs, Command, OutputArgs};

/// Exit status for configuration problems, including a missing credential.
pub const EXIT_CONFIG: u8 = 2;
/// Exit status for everything else.
pub const EXIT_FAILURE: u8 = 1;

/// JSON line written per query with `--json`.
#[derive(Debug, Serialize)]
pub struct ClassifyOutput<'a> {
    pub query: &'a str,
    pub intents: &'a ClassificationResult,
    pub summary: String,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<IntentScore>>,
}

/// Load configuration, set up logging, and run the chosen subcommand.
pub fn execute(args: CliArgs) -> Result<()> {
    let config = TransitConfig::load(args.config.as_deref(), Some(&args.overrides()))?;
    transit_observability::init_tracing(&config.observability);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Config => {
            write!(out, "{}", config.to_toml()?)?;
        }
        Command::Bank(bank_args) => {
            print_bank(&config.intent_bank()?, bank_args, &mut out)?;
        }
        Command::Classify(classify) => {
            let classifier = build_classifier(&config)?;
            for query in &classify.queries {
                classify_query(&classifier, query, classify.output, &mut out)?;
            }
        }
        Command::Interactive(output) => {
            let classifier = build_classifier(&config)?;
            let stdin = io::stdin();
            let count = classify_lines(&classifier, output, stdin.lock(), &mut out)?;
            info!(queries = count, "interactive session finished");
        }
    }
    out.flush()?;
    Ok(())
}

fn build_classifier(config: &TransitConfig) -> Result<IntentClassifier> {
    let classifier = IntentClassifier::from_config(config)?;
    info!(
        provider = classifier.engine().provider_name(),
        labels = classifier.cache().len(),
        "classifier ready"
    );
    Ok(classifier)
}

/// Classify one query and write the result.
pub fn classify_query<W: Write>(
    classifier: &IntentClassifier,
    query: &str,
    output: OutputArgs,
    out: &mut W,
) -> Result<()> {
    let (report, scores) = if output.scores {
        let (report, ranked) = classifier.classify_with_scores(query);
        (report, Some(ranked))
    } else {
        (classifier.classify_with_report(query), None)
    };

    if output.json {
        let line = ClassifyOutput {
            query,
            intents: &report.result,
            summary: report.result.summary(),
            degraded: report.is_degraded(),
            scores,
        };
        serde_json::to_writer(&mut *out, &line).context("failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }

    if report.is_degraded() {
        writeln!(out, "{} [degraded: embedding unavailable]", report.result.summary())?;
    } else {
        writeln!(out, "{}", report.result.summary())?;
    }
    if let Some(scores) = scores {
        for line in score_table(&scores).lines() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

/// Classify every non-blank line of `input`. Returns the number classified.
pub fn classify_lines<R: BufRead, W: Write>(
    classifier: &IntentClassifier,
    output: OutputArgs,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let line = line.context("failed to read query from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        classify_query(classifier, &line, output, out)?;
        out.flush()?;
        count += 1;
    }
    Ok(count)
}

/// Write the example bank, as JSON or one label block per intent.
pub fn print_bank<W: Write>(bank: &IntentBank, args: BankArgs, out: &mut W) -> Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, bank).context("failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }
    for set in bank.iter() {
        writeln!(out, "{} ({} examples)", set.label, set.examples.len())?;
        for example in &set.examples {
            writeln!(out, "  - {example}")?;
        }
    }
    Ok(())
}

/// Stable error code for errors that carry one.
pub fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(e) = err.downcast_ref::<TransitError>() {
        return Some(e.error_code());
    }
    err.downcast_ref::<ConfigError>().map(|e| e.error_code())
}

/// Process exit status for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let is_config = err.downcast_ref::<ConfigError>().is_some()
        || matches!(err.downcast_ref::<TransitError>(), Some(TransitError::Config(_)));
    if is_config {
        EXIT_CONFIG
    } else {
        EXIT_FAILURE
    }
}
