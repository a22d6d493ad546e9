//! Application state management for the viewer.

use super::super::HomeEntry;
use super::App;
use crate::catalog::Step;
use crate::checklist::Checklist;
use crate::copy::{Clipboard, CopyFlash};
use crate::layout::{self, Row};
use crate::routes::Route;

impl App {
    pub(in crate::viewer) fn new(
        route: Route,
        steps: &'static [Step],
        clipboard: Box<dyn Clipboard>,
        profile_base_url: String,
    ) -> Self {
        Self {
            route,
            steps,
            checklist: Checklist::new(),
            flash: CopyFlash::new(),
            clipboard,
            profile_base_url,
            selection: [0; 2],
            scroll: 0,
            message: None,
            show_help: false,
        }
    }

    pub(in crate::viewer) fn route(&self) -> Route {
        self.route
    }

    pub(in crate::viewer) fn switch_route(&mut self, route: Route) {
        if self.route != route {
            self.route = route;
            self.scroll = 0;
            self.message = None;
        }
    }

    pub(in crate::viewer) fn next_route(&mut self) {
        self.switch_route(self.route.next());
    }

    /// Fresh projection of the catalog and current checklist.
    pub(super) fn rows(&self) -> Vec<Row> {
        layout::layout(self.steps, &self.checklist, &self.profile_base_url)
    }

    /// Index into `rows` of the focused row, on the workflow view.
    pub(super) fn selected_row(&self, rows: &[Row]) -> Option<usize> {
        if self.route != Route::Workflow {
            return None;
        }
        rows.iter()
            .enumerate()
            .filter(|(_, row)| row.is_focusable())
            .map(|(index, _)| index)
            .nth(self.selection[Route::Workflow.index()])
    }

    pub(super) fn selected_home_entry(&self) -> HomeEntry {
        let idx = self.selection[Route::Home.index()].min(HomeEntry::ALL.len() - 1);
        HomeEntry::ALL[idx]
    }

    pub(in crate::viewer) fn move_selection(&mut self, delta: isize) {
        let idx = self.route.index();
        let max = self.selectable_len();
        if max == 0 {
            self.selection[idx] = 0;
            return;
        }
        let current = self.selection[idx] as isize;
        let next = current + delta;
        let clamped = if next < 0 {
            0
        } else if next as usize >= max {
            max as isize - 1
        } else {
            next
        };
        self.selection[idx] = clamped as usize;
    }

    fn selectable_len(&self) -> usize {
        match self.route {
            Route::Home => HomeEntry::ALL.len(),
            Route::Workflow => self.rows().iter().filter(|row| row.is_focusable()).count(),
        }
    }

    pub(in crate::viewer) fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub(in crate::viewer) fn is_help_open(&self) -> bool {
        self.show_help
    }

    pub(in crate::viewer) fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Checked gates out of all gates. Only connector positions are ever toggled.
    pub(super) fn progress(&self) -> (usize, usize) {
        let gates = self.steps.len().saturating_sub(1);
        (self.checklist.completed_count(), gates)
    }
}
