mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::io::BufRead;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cli::output::OutputConfig;
use cli::{Cli, Command};
use mimetable::{Answer, MimeTypes, Query};

/// One line of `batch` input.
#[derive(Debug, Deserialize)]
struct BatchRequest {
    query: Query,
    #[serde(default)]
    input: serde_json::Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);
    let output = OutputConfig::from_global(cli.json, cli.verbose, cli.quiet, cli.no_color);

    let mime_types = load_mime_types(cli.db.as_deref())?;

    let all_found = match cli.command {
        Command::Lookup { paths } => answer_all(&mime_types, Query::Mime, paths, "TYPE", &output)?,
        Command::All { paths } => answer_all(&mime_types, Query::Mimes, paths, "TYPES", &output)?,
        Command::Extension { types } => {
            answer_all(&mime_types, Query::Extension, types, "EXTENSION", &output)?
        }
        Command::Charset { types } => {
            answer_all(&mime_types, Query::Charset, types, "CHARSET", &output)?
        }
        Command::ContentType { inputs } => {
            answer_all(&mime_types, Query::ContentType, inputs, "CONTENT-TYPE", &output)?
        }
        Command::Stats => {
            print_stats(&mime_types, &output)?;
            true
        }
        Command::Batch => run_batch(&mime_types, &output)?,
    };

    if !all_found {
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to stderr so they never mix with query results on stdout.
fn init_tracing(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MIMETABLE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

fn load_mime_types(db: Option<&Path>) -> Result<MimeTypes> {
    match db {
        Some(path) => MimeTypes::from_path(path)
            .with_context(|| format!("failed to load MIME database {}", path.display())),
        None => MimeTypes::builtin().context("bundled MIME database is malformed"),
    }
}

fn answer_all(
    mime_types: &MimeTypes,
    query: Query,
    inputs: Vec<String>,
    header: &str,
    output: &OutputConfig,
) -> Result<bool> {
    let answers: Vec<(String, Answer)> = inputs
        .into_iter()
        .map(|input| {
            let answer = mime_types.query(query, &input);
            (input, answer)
        })
        .collect();

    output.print_answers(header, &answers)?;
    Ok(answers.iter().all(|(_, answer)| answer.is_found()))
}

fn print_stats(mime_types: &MimeTypes, output: &OutputConfig) -> Result<()> {
    let records = mime_types.database().len();
    let with_extensions = mime_types.extensions().len();
    let extensions = mime_types.types().len();
    let mut conflicts: Vec<(&String, &Vec<String>)> = mime_types
        .type_sets()
        .iter()
        .filter(|(_, types)| types.len() > 1)
        .collect();
    conflicts.sort();

    if output.json {
        let mut stats = serde_json::json!({
            "types": records,
            "types_with_extensions": with_extensions,
            "extensions": extensions,
            "shared_extensions": conflicts.len(),
        });
        if output.verbose {
            stats["conflicts"] = conflicts
                .iter()
                .map(|(ext, types)| {
                    serde_json::json!({
                        "extension": ext,
                        "winner": mime_types.types().get(*ext),
                        "candidates": types,
                    })
                })
                .collect();
        }
        return output.print_json(&stats);
    }

    output.status(&format!("Types:             {records}"));
    output.status(&format!("With extensions:   {with_extensions}"));
    output.status(&format!("Extensions:        {extensions}"));
    output.status(&format!("Shared extensions: {}", conflicts.len()));
    if output.verbose {
        let rows: Vec<Vec<String>> = conflicts
            .iter()
            .map(|(ext, types)| {
                vec![
                    (*ext).clone(),
                    mime_types.types().get(*ext).cloned().unwrap_or_default(),
                    types.join(", "),
                ]
            })
            .collect();
        output.detail("");
        output.print_table(&["EXTENSION", "WINNER", "CANDIDATES"], &rows);
    }
    Ok(())
}

fn run_batch(mime_types: &MimeTypes, output: &OutputConfig) -> Result<bool> {
    let stdin = std::io::stdin();
    let mut all_found = true;

    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let request: BatchRequest = serde_json::from_str(&line)
            .with_context(|| format!("invalid batch request on line {}", n + 1))?;
        let answer = mime_types.answer(request.query, &request.input);
        tracing::debug!(query = %request.query, input = %request.input, found = answer.is_found(), "batch query");

        all_found &= answer.is_found();
        if !output.quiet {
            output.print_json_line(&answer)?;
        }
    }

    Ok(all_found)
}
