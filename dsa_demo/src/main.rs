use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dsa_demo::{build, logging, Topic};
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `label: value` line per result
    Text,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dsa_demo")]
#[command(about = "Run classical array, string and number-theory algorithms on sample inputs", long_about = None)]
struct Args {
    /// Which group of algorithms to run
    #[arg(value_enum)]
    topic: Topic,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();
    info!(topic = ?args.topic, format = ?args.format, "running demo");

    let report = build(args.topic).with_context(|| format!("failed to build {:?} report", args.topic))?;

    let rendered = match args.format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => report.render_json().context("failed to serialize report")?,
    };
    println!("{rendered}");
    Ok(())
}
