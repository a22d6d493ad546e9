//! Actions for the viewer.

use super::super::external::open_url;
use super::super::HomeEntry;
use super::App;
use crate::copy::copy_prompt;
use crate::layout::{copy_text, Row};
use crate::routes::Route;
use anyhow::{anyhow, Result};
use std::time::Instant;
use tracing::debug;

impl App {
    /// Enter: open the selected home entry, toggle a connector, or copy a prompt.
    pub(in crate::viewer) fn activate(&mut self, now: Instant) -> Result<()> {
        match self.route {
            Route::Home => {
                match self.selected_home_entry() {
                    HomeEntry::WorkflowPrompts => self.switch_route(Route::Workflow),
                    HomeEntry::Documentation => {
                        self.set_message("documentation is not bundled with this build".to_string())
                    }
                }
                Ok(())
            }
            Route::Workflow => {
                let rows = self.rows();
                match self.selected_row(&rows).map(|index| &rows[index]) {
                    Some(Row::Connector(_)) => self.toggle_selected(),
                    Some(Row::Prompt { .. }) => self.copy_selected(now),
                    _ => Err(anyhow!("nothing selected")),
                }
            }
        }
    }

    /// Flip the completion gate behind the selected connector.
    pub(in crate::viewer) fn toggle_selected(&mut self) -> Result<()> {
        let rows = self.rows();
        let Some(Row::Connector(connector)) = self.selected_row(&rows).map(|index| &rows[index])
        else {
            return Err(anyhow!("select a gate to toggle"));
        };
        self.checklist.toggle(connector.after);
        Ok(())
    }

    /// Copy the selected prompt (only the selected variant of a variant set).
    /// Errors only when no prompt is focused.
    pub(in crate::viewer) fn copy_selected(&mut self, now: Instant) -> Result<()> {
        let rows = self.rows();
        let Some(Row::Prompt { target, .. }) = self.selected_row(&rows).map(|index| &rows[index])
        else {
            return Err(anyhow!("select a prompt to copy"));
        };
        let target = *target;
        let text = copy_text(self.steps, target).ok_or_else(|| anyhow!("prompt not found"))?;
        // A failed write only leaves the control unflipped.
        if let Err(err) = copy_prompt(self.clipboard.as_mut(), &mut self.flash, target, text, now) {
            debug!(position = target.position, error = %err, "copy failed");
            return Ok(());
        }
        self.set_message("copied to clipboard".to_string());
        Ok(())
    }

    /// Link behind the selected prompt's attribution, if it has one.
    pub(in crate::viewer) fn selected_link(&self) -> Result<String> {
        let rows = self.rows();
        match self.selected_row(&rows).map(|index| &rows[index]) {
            Some(Row::Prompt {
                attribution: Some(attribution),
                ..
            }) => attribution
                .url
                .clone()
                .ok_or_else(|| anyhow!("{} has no link", attribution.text)),
            Some(Row::Prompt { .. }) => Err(anyhow!("prompt has no attribution")),
            _ => Err(anyhow!("select a prompt to open its link")),
        }
    }

    pub(in crate::viewer) fn open_selected_link(&mut self) -> Result<()> {
        let url = self.selected_link()?;
        open_url(&url)?;
        self.set_message(format!("opened {url}"));
        Ok(())
    }

    /// Forget confirmation windows that have closed.
    pub(in crate::viewer) fn tick(&mut self, now: Instant) {
        self.flash.expire(now);
    }
}
