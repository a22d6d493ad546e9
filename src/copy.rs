//! Clipboard writes and the per-control "copied" confirmation.
//!
//! The confirmation is stored as the instant of the last successful copy and
//! evaluated against the current instant whenever the view draws, so there is
//! no timer to schedule or cancel.
use crate::layout::CopyTarget;
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// How long a control reads "copied" after a successful write.
pub const COPY_CONFIRM: Duration = Duration::from_millis(2000);

/// Places literal text on the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

const FALLBACK_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Pipes text into the first clipboard tool that succeeds.
pub struct SystemClipboard {
    configured: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn new(configured: Option<Vec<String>>) -> Self {
        Self { configured }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        let mut candidates = Vec::new();
        if let Some(command) = self.configured.as_ref().filter(|cmd| !cmd.is_empty()) {
            candidates.push(command.clone());
        }
        for command in FALLBACK_COMMANDS {
            candidates.push(command.iter().map(|part| part.to_string()).collect());
        }
        candidates
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        for candidate in self.candidates() {
            let Some((program, args)) = candidate.split_first() else {
                continue;
            };
            let Ok(path) = which::which(program) else {
                continue;
            };
            match pipe_into(&path, args, text) {
                Ok(()) => return Ok(()),
                Err(err) => tracing::debug!(program = %program, error = %err, "clipboard command failed"),
            }
        }
        Err(anyhow!("no clipboard command available"))
    }
}

fn pipe_into(program: &Path, args: &[String], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("spawn {}", program.display()))?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    // The child is reaped even when the write failed.
    let status = child.wait().context("wait for clipboard command")?;
    if !status.success() {
        return Err(anyhow!("{} exited with {status}", program.display()));
    }
    written.context("write clipboard input")
}

/// Tracks which copy controls are inside their confirmation window.
#[derive(Debug, Default)]
pub struct CopyFlash {
    copied_at: HashMap<CopyTarget, Instant>,
}

impl CopyFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the confirmation window for `target`.
    pub fn mark(&mut self, target: CopyTarget, now: Instant) {
        self.copied_at.insert(target, now);
    }

    pub fn is_copied(&self, target: CopyTarget, now: Instant) -> bool {
        self.copied_at
            .get(&target)
            .is_some_and(|at| now.saturating_duration_since(*at) < COPY_CONFIRM)
    }

    /// Drop entries whose window has closed.
    pub fn expire(&mut self, now: Instant) {
        self.copied_at
            .retain(|_, at| now.saturating_duration_since(*at) < COPY_CONFIRM);
    }
}

/// Write `text` for `target`; the confirmation only starts once the write succeeded.
pub fn copy_prompt(
    clipboard: &mut dyn Clipboard,
    flash: &mut CopyFlash,
    target: CopyTarget,
    text: &str,
    now: Instant,
) -> Result<()> {
    clipboard.write_text(text)?;
    flash.mark(target, now);
    Ok(())
}
