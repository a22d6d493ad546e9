//! CLI argument parsing for the workflow viewer and asset shim.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "vibe",
    version,
    about = "Phase-grouped workflow prompts with completion gates",
    after_help = "Commands:\n  open [PATH]               Open the viewer on a route (/ or /workflow)\n  workflow [--json]         Show the workflow view\n  serve [--dir <dir>]       Serve built assets with single-page fallback\n  config [--stub]           Print the effective or default config\n\nExamples:\n  vibe open /workflow\n  vibe workflow --json | jq '.progress'\n  vibe serve --dir dist --port 8080\n  vibe config --stub > ~/.config/vibe-engineering/config.json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Config file (defaults to <config_dir>/vibe-engineering/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Open(OpenArgs),
    Workflow(WorkflowArgs),
    Serve(ServeArgs),
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Open the viewer on the view a path routes to")]
pub struct OpenArgs {
    /// Route path; unknown paths open the home view
    #[arg(default_value = "/", value_name = "PATH")]
    pub path: String,
}

#[derive(Parser, Debug)]
#[command(about = "Show the workflow view (text when not attached to a terminal)")]
pub struct WorkflowArgs {
    /// Emit the layout rows as JSON
    #[arg(long)]
    pub json: bool,
}

/// Flags here override the `serve` section of the config.
#[derive(Parser, Debug)]
#[command(about = "Serve built assets, answering unknown paths with index.html")]
pub struct ServeArgs {
    /// Assets directory
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Address to bind
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on (0 picks a free port)
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,
}

#[derive(Parser, Debug)]
#[command(about = "Print the effective config")]
pub struct ConfigArgs {
    /// Print the default config instead
    #[arg(long)]
    pub stub: bool,
}
