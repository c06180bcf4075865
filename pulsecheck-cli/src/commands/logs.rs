//! Logs command - show the latest indexed documents.

use anyhow::Result;
use clap::Args;
use pulsecheck_agent::{Config, RESULT_COLLECTION, SUMMARY_COLLECTION};
use serde_json::Value;

use crate::{Cli, OutputFormat};

/// Arguments for logs command.
#[derive(Args)]
pub struct LogsArgs {
    /// Maximum number of documents to fetch.
    #[arg(long, short = 'n', default_value = "50")]
    pub limit: usize,

    /// Show run summaries instead of per-probe results.
    #[arg(long)]
    pub summaries: bool,
}

/// Fetches and prints the newest documents from the search index.
pub async fn run(args: &LogsArgs, cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let index = super::index_sink(&config)?;

    let collection = if args.summaries {
        SUMMARY_COLLECTION
    } else {
        RESULT_COLLECTION
    };
    let documents = index.recent(collection, args.limit).await?;

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&documents)?);
        return Ok(());
    }

    if documents.is_empty() {
        println!("No documents in {collection}.");
        return Ok(());
    }

    if args.summaries {
        print_summaries(&documents);
    } else {
        print_results(&documents);
    }

    Ok(())
}

fn print_results(documents: &[Value]) {
    println!(
        "{:<20} {:>6} {:>10} {:<19} {}",
        "API", "Status", "Time", "Timestamp", "Error"
    );
    for doc in documents {
        let time = doc["response_time"]
            .as_f64()
            .map_or_else(|| "-".to_string(), |t| format!("{t:.2}s"));
        println!(
            "{:<20} {:>6} {:>10} {:<19} {}",
            field(doc, "api_name"),
            field(doc, "status"),
            time,
            field(doc, "timestamp"),
            field(doc, "error"),
        );
    }
}

fn print_summaries(documents: &[Value]) {
    println!(
        "{:>4} {:<19} {:>8} {:>13} {:>13} {:>9} {:>10}",
        "Run", "Timestamp", "Success", "Client Errors", "Server Errors", "Failures", "Total APIs"
    );
    for doc in documents {
        println!(
            "{:>4} {:<19} {:>8} {:>13} {:>13} {:>9} {:>10}",
            field(doc, "run_number"),
            field(doc, "timestamp"),
            field(doc, "success"),
            field(doc, "client_error"),
            field(doc, "server_error"),
            field(doc, "failures"),
            field(doc, "total_apis"),
        );
    }
}

/// Renders one document field for the table, `-` when absent or null.
fn field(doc: &Value, name: &str) -> String {
    match &doc[name] {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
