use anyhow::{anyhow, Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;
use std::process::{Command, Stdio};

const OPENERS: [&str; 2] = ["xdg-open", "open"];

/// Hand a URL to the platform opener. The opener detaches from the terminal.
pub(super) fn open_url(url: &str) -> Result<()> {
    let program = OPENERS
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| anyhow!("no URL opener found (tried {})", OPENERS.join(", ")))?;
    let status = Command::new(&program)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("run {}", program.display()))?;
    if !status.success() {
        return Err(anyhow!("{} exited with {status}", program.display()));
    }
    Ok(())
}

pub(super) struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub(super) fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide).context("enter alt screen")?;
        Ok(Self { active: true })
    }

    fn leave(&mut self) {
        if self.active {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
            self.active = false;
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.leave();
    }
}
