mod analysis;
mod config;
mod pr;
mod report;
mod select;

use analysis::{CompletionClient, GroqClient};
use clap::Parser;
use colored::Colorize;
use select::{Selection, SelectionSource, StdinSelection};
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::EnvFilter;

/// PR Critic — CLI tool that takes a GitHub Pull Request URL, splits its
/// diff per changed file, and asks a chat-completion model for a free-form
/// code-style critique of each selected file.
#[derive(Parser, Debug)]
#[command(name = "pr-critic", version, about)]
struct Cli {
    /// GitHub Pull Request URL (e.g., https://github.com/org/repo/pull/42)
    pr_url: String,

    /// Model identifier for the critique (overrides config)
    #[arg(short, long)]
    model: Option<String>,

    /// File extension to include, repeatable (e.g., -e .py -e .rs; overrides config)
    #[arg(short = 'e', long = "extension")]
    extensions: Vec<String>,

    /// Analyze every matching file without prompting
    #[arg(long)]
    all: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let _main_span = info_span!("pr_critique", pr_url = %cli.pr_url).entered();

    info!("parsing PR URL");
    let pr_url = pr::parse_pr_url(&cli.pr_url)?;
    debug!(owner = %pr_url.owner, repo = %pr_url.repo, pr = pr_url.pr_number, "parsed PR URL");

    info!("loading configuration");
    let config = config::Config::load()?;
    let api_key = config.groq_api_key().ok_or(
        "Groq API key not found. Set the GROQ_API_KEY environment variable or add api_key to .pr-critic.toml",
    )?;
    let model = cli.model.unwrap_or_else(|| config.model());
    let extensions = if cli.extensions.is_empty() {
        config.extensions()
    } else {
        cli.extensions.clone()
    };

    info!("fetching pull request diff from GitHub");
    let raw_diff = pr::fetch_diff(&pr_url).await?;
    info!(diff_bytes = raw_diff.len(), "fetched diff");

    let files = pr::diff::partition_by_file(&raw_diff, &extensions);
    info!(files = files.len(), "partitioned diff");

    if files.is_empty() {
        println!("No changed files match the configured extensions.");
        return Ok(());
    }

    println!("\nFound the following changed files:");
    for (index, file) in files.iter().enumerate() {
        println!("  {}. {}", index + 1, file.path);
    }

    let selection = if cli.all {
        Selection::All
    } else {
        StdinSelection.select(files.len())?
    };

    let selected: Vec<&pr::FileDiff> = match &selection {
        Selection::All => files.iter().collect(),
        Selection::Indices(indices) => indices.iter().filter_map(|&i| files.get(i)).collect(),
    };

    if selected.is_empty() {
        println!("No files selected.");
        return Ok(());
    }

    let client = GroqClient::new(api_key, model, config.base_url())?;

    // One file at a time; a failed analysis never aborts the rest.
    for file in selected {
        println!("\nAnalyzing {}...", file.path);
        match client.critique(&file.path, &file.body).await {
            Ok(response) => report::present(&file.path, &response),
            Err(err) => {
                warn!(file = %file.path, error = %err, "analysis failed");
                println!(
                    "{}",
                    format!("Analysis failed for {}: {}", file.path, err).red()
                );
            }
        }
    }

    Ok(())
}
