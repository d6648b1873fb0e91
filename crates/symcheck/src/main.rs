//! Symcheck - symptom checker CLI
//!
//! Sends a symptom description to the configured analysis endpoint and
//! renders the structured reply in the terminal.

mod errors;
mod render;

use anyhow::Result;
use clap::Parser;
use std::io::Read;
use symcheck_core::{AnalysisClient, ClientConfig, Orchestrator};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "symcheck")]
#[command(about = "Describe your symptoms, get a structured analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Symptom description; read from stdin when omitted
    symptoms: Vec<String>,

    /// Analysis endpoint URL (overrides SYMCHECK_ENDPOINT and the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Emit the result as JSON instead of styled text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match ClientConfig::resolve(cli.endpoint, cli.timeout) {
        Ok(config) => config,
        Err(err) => {
            render::print_warning(&err.to_string());
            std::process::exit(errors::EXIT_NO_ENDPOINT);
        }
    };
    debug!(endpoint = %config.endpoint, timeout_secs = config.timeout_secs, "resolved analysis endpoint");

    let input = read_input(&cli.symptoms)?;

    let client = AnalysisClient::with_timeout(config.endpoint, config.timeout_secs)?;
    let mut orchestrator = Orchestrator::new(client);

    let spinner = (!cli.json).then(render::analysis_spinner);
    orchestrator.submit(&input).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let state = orchestrator.state();
    if cli.json {
        println!("{}", render::state_json(state)?);
    } else {
        render::print_state(state);
    }

    std::process::exit(errors::exit_code_for(state));
}

fn init_tracing() {
    // Rendered output owns stdout; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Positional arguments joined with spaces, or stdin when none were given.
fn read_input(args: &[String]) -> Result<String> {
    if args.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(args.join(" "))
    }
}
