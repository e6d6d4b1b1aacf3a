//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// codeagent - sandboxed tool-calling coding agent
#[derive(Parser)]
#[command(
    name = "ca",
    about = "Sandboxed AI coding agent: give it an instruction, it works inside one directory",
    version,
    after_help = "Logs are written to: ~/.local/share/codeagent/logs/codeagent.log"
)]
pub struct Cli {
    /// Instruction for the agent
    #[arg(value_name = "INSTRUCTION")]
    pub instruction: String,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Working directory the agent is confined to (overrides config)
    #[arg(short = 'w', long = "working-dir")]
    pub working_dir: Option<PathBuf>,

    /// Echo each tool call with its arguments, result, and token counts
    #[arg(short, long)]
    pub verbose: bool,
}
