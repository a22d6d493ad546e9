mod actions;
mod state;
mod view;

use crate::catalog::Step;
use crate::checklist::Checklist;
use crate::copy::{Clipboard, CopyFlash};
use crate::routes::Route;

pub(super) struct App {
    route: Route,
    steps: &'static [Step],
    checklist: Checklist,
    flash: CopyFlash,
    clipboard: Box<dyn Clipboard>,
    profile_base_url: String,
    /// Per route: home entry index, or index into the workflow's focusable rows.
    selection: [usize; 2],
    scroll: u16,
    message: Option<String>,
    show_help: bool,
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
