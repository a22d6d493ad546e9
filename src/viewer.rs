//! Terminal viewer for the home and workflow views.
//!
//! The workflow view draws the phase-grouped steps with their connectors and
//! lets the user tick completion gates and copy prompts. Checklist state lives
//! only as long as the viewer does.
mod app;
mod external;
mod format;
mod text;
mod ui;

use crate::catalog::WORKFLOW;
use crate::config::Config;
use crate::copy::SystemClipboard;
use crate::routes::Route;
use anyhow::Result;
use std::io::{self, IsTerminal};

const EVENT_POLL_MS: u64 = 200;
/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 5;

const HOME_TITLE: &str = "vibe-engineering";
const HOME_BLURB: &str = "Workflow prompts for building software with a coding agent, grouped by phase. Tick each gate before moving on.";
const HOME_STACK: [&str; 5] = ["Rust", "ratatui", "crossterm", "clap", "serde"];

/// Entries on the home view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum HomeEntry {
    WorkflowPrompts,
    Documentation,
}

impl HomeEntry {
    const ALL: [HomeEntry; 2] = [HomeEntry::WorkflowPrompts, HomeEntry::Documentation];

    fn label(self) -> &'static str {
        match self {
            HomeEntry::WorkflowPrompts => "Workflow Prompts",
            HomeEntry::Documentation => "Documentation",
        }
    }
}

/// Print the view for non-terminal output, or run the interactive viewer.
pub fn run(route: Route, config: &Config) -> Result<()> {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return text::print_route(route, WORKFLOW, &config.profile_base_url);
    }
    let clipboard = SystemClipboard::new(config.clipboard_argv()?);
    let app = app::App::new(
        route,
        WORKFLOW,
        Box::new(clipboard),
        config.profile_base_url.clone(),
    );
    ui::run_tui(app)
}

/// Print the workflow layout as JSON.
pub fn print_workflow_json(config: &Config) -> Result<()> {
    text::print_workflow_json(WORKFLOW, &config.profile_base_url)
}
