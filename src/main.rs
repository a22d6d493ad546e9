//! Phase-grouped workflow prompts with per-step completion gates.
//!
//! `vibe open` and `vibe workflow` run the terminal viewer (plain text when
//! not attached to a terminal); `vibe serve` answers for a built asset bundle
//! with single-page fallback.
mod catalog;
mod checklist;
mod cli;
mod config;
mod copy;
mod grouping;
mod layout;
mod routes;
mod serve;
mod viewer;

use anyhow::Result;
use clap::Parser;
use cli::{Command, ConfigArgs, OpenArgs, RootArgs, ServeArgs, WorkflowArgs};
use config::Config;
use routes::Route;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);
    // The stub never depends on the file it is usually redirected into.
    if let Command::Config(ConfigArgs { stub: true }) = args.command {
        println!("{}", config::config_stub()?);
        return Ok(());
    }
    let config = config::load_config(args.config.as_deref())?;
    match args.command {
        Command::Open(args) => run_open(args, &config),
        Command::Workflow(args) => run_workflow(args, &config),
        Command::Serve(args) => run_serve(args, &config),
        Command::Config(_) => run_config(&config),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run_open(args: OpenArgs, config: &Config) -> Result<()> {
    let route = Route::resolve(&args.path);
    viewer::run(route, config)
}

fn run_workflow(args: WorkflowArgs, config: &Config) -> Result<()> {
    if args.json {
        return viewer::print_workflow_json(config);
    }
    viewer::run(Route::Workflow, config)
}

fn run_serve(args: ServeArgs, config: &Config) -> Result<()> {
    let options = serve::ServeOptions {
        root: args.dir.unwrap_or_else(|| config.serve.assets_dir.clone()),
        bind: args.bind.unwrap_or_else(|| config.serve.bind.clone()),
        port: args.port.unwrap_or(config.serve.port),
    };
    serve::serve(&options)
}

fn run_config(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
