//! codeagent - sandboxed tool-calling coding agent
//!
//! CLI entry point: parse the instruction, build the sandboxed tool
//! context, and drive the dispatch loop to a terminal outcome.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use codeagent::agent::{Agent, AgentOutcome};
use codeagent::cli::Cli;
use codeagent::config::Config;
use codeagent::llm::create_client;
use codeagent::tools::ToolContext;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("codeagent")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Diagnostics go to a file so stdout stays clean for the answer
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("codeagent.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    let working_dir = cli.working_dir.unwrap_or_else(|| config.agent.working_dir.clone());
    let working_dir = std::path::absolute(&working_dir).context("Failed to resolve working directory")?;
    eyre::ensure!(
        working_dir.is_dir(),
        "working directory {} does not exist or is not a directory",
        working_dir.display()
    );

    info!(
        "codeagent starting: model={}, working_dir={}",
        config.llm.model,
        working_dir.display()
    );

    let llm = create_client(&config.llm)?;
    let ctx = ToolContext::with_limits(
        working_dir,
        config.agent.max_chars,
        Duration::from_secs(config.agent.run_timeout_secs),
    );

    let agent = Agent::new(llm, ctx, config.agent.max_iterations, config.llm.max_tokens).verbose(cli.verbose);
    let report = agent.run(&cli.instruction).await?;

    match report.outcome {
        AgentOutcome::FinalText(text) => {
            println!("{text}");
            if cli.verbose {
                println!("Prompt tokens: {}", report.usage.input_tokens);
                println!("Response tokens: {}", report.usage.output_tokens);
            }
        }
        AgentOutcome::BudgetExhausted => {
            println!(
                "Reached the maximum of {} iterations without a final response.",
                report.iterations
            );
        }
        AgentOutcome::NoResponse => {
            println!("No function call or text response received.");
        }
    }

    Ok(())
}
