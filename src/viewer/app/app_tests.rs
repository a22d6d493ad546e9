use super::super::HomeEntry;
use super::App;
use crate::catalog::{Prompt, WORKFLOW};
use crate::copy::Clipboard;
use crate::layout::CopyTarget;
use crate::routes::Route;
use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone, Default)]
struct SharedClipboard {
    written: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl Clipboard for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

fn app_with(route: Route, clipboard: SharedClipboard) -> App {
    App::new(
        route,
        WORKFLOW,
        Box::new(clipboard),
        "https://x.com/".to_string(),
    )
}

/// Focus the nth focusable workflow row.
fn select(app: &mut App, focus: usize) {
    app.move_selection(-(WORKFLOW.len() as isize * 4));
    app.move_selection(focus as isize);
}

#[test]
fn copying_second_variant_copies_only_its_text() {
    let clipboard = SharedClipboard::default();
    let mut app = app_with(Route::Workflow, clipboard.clone());
    // Init prompt, gate, two brainstorm prompts with gates, then the plan variants.
    select(&mut app, 7);
    let now = Instant::now();
    app.copy_selected(now).unwrap();

    let Prompt::Variants(variants) = &WORKFLOW[3].prompt else {
        panic!("plan step should offer variants");
    };
    assert_eq!(*clipboard.written.borrow(), vec![variants[1].text.to_string()]);
    let second = CopyTarget {
        position: 3,
        variant: Some(1),
    };
    let first = CopyTarget {
        position: 3,
        variant: Some(0),
    };
    assert!(app.flash.is_copied(second, now));
    assert!(!app.flash.is_copied(first, now));
    assert!(!app.flash.is_copied(second, now + Duration::from_millis(2000)));
}

#[test]
fn failed_copy_is_not_reported() {
    let clipboard = SharedClipboard {
        fail: true,
        ..SharedClipboard::default()
    };
    let mut app = app_with(Route::Workflow, clipboard);
    let now = Instant::now();

    app.copy_selected(now).unwrap();
    assert_eq!(app.message, None);
    let target = CopyTarget {
        position: 0,
        variant: None,
    };
    assert!(!app.flash.is_copied(target, now));

    app.activate(now).unwrap();
    assert_eq!(app.message, None);
    assert!(!app.checklist.is_checked(0));
}

#[test]
fn copy_needs_a_prompt() {
    let mut app = app_with(Route::Workflow, SharedClipboard::default());
    select(&mut app, 1);
    assert!(app.copy_selected(Instant::now()).is_err());
}

#[test]
fn activate_toggles_the_focused_gate() {
    let mut app = app_with(Route::Workflow, SharedClipboard::default());
    select(&mut app, 1);
    let now = Instant::now();

    app.activate(now).unwrap();
    assert!(app.checklist.is_checked(0));
    assert_eq!(app.progress(), (1, WORKFLOW.len() - 1));

    app.activate(now).unwrap();
    assert!(!app.checklist.is_checked(0));
    assert_eq!(app.progress(), (0, WORKFLOW.len() - 1));
}

#[test]
fn activate_on_prompt_copies() {
    let clipboard = SharedClipboard::default();
    let mut app = app_with(Route::Workflow, clipboard.clone());
    app.activate(Instant::now()).unwrap();
    assert_eq!(clipboard.written.borrow().len(), 1);
    assert!(!app.checklist.is_checked(0));
}

#[test]
fn toggle_needs_a_gate() {
    let mut app = app_with(Route::Workflow, SharedClipboard::default());
    assert!(app.toggle_selected().is_err());
    assert_eq!(app.checklist.completed_count(), 0);
}

#[test]
fn home_entry_opens_workflow() {
    let mut app = app_with(Route::Home, SharedClipboard::default());
    assert_eq!(app.selected_home_entry(), HomeEntry::WorkflowPrompts);
    app.activate(Instant::now()).unwrap();
    assert_eq!(app.route(), Route::Workflow);

    app.next_route();
    app.move_selection(1);
    assert_eq!(app.selected_home_entry(), HomeEntry::Documentation);
    app.activate(Instant::now()).unwrap();
    assert_eq!(app.route(), Route::Home);
    assert!(app.message.is_some());
}

#[test]
fn selection_clamps_to_focusable_rows() {
    let mut app = app_with(Route::Workflow, SharedClipboard::default());
    app.move_selection(-3);
    assert_eq!(app.selection[Route::Workflow.index()], 0);

    app.move_selection(1000);
    let focusable = app.rows().iter().filter(|row| row.is_focusable()).count();
    assert_eq!(app.selection[Route::Workflow.index()], focusable - 1);

    // Prompts plus one gate between each pair of steps.
    let variants = WORKFLOW
        .iter()
        .map(|step| step.prompt.texts().len())
        .sum::<usize>();
    assert_eq!(focusable, variants + WORKFLOW.len() - 1);
}

#[test]
fn selections_are_kept_per_route() {
    let mut app = app_with(Route::Workflow, SharedClipboard::default());
    select(&mut app, 4);
    app.next_route();
    app.move_selection(1);
    app.next_route();
    assert_eq!(app.selection[Route::Workflow.index()], 4);
    assert_eq!(app.selection[Route::Home.index()], 1);
}

#[test]
fn attribution_link_for_selected_prompt() {
    let mut app = app_with(Route::Workflow, SharedClipboard::default());
    assert!(app.selected_link().is_err());
    // Plan review prompt, credited to a handle.
    select(&mut app, 9);
    assert_eq!(app.selected_link().unwrap(), "https://x.com/doodlestein");
    select(&mut app, 8);
    assert!(app.selected_link().is_err());
}
