use super::format::{
    attribution_text, badge_text, checkbox, copy_label, step_number, CONNECTOR_STEM, INDENT,
    OR_DIVIDER,
};
use super::{HomeEntry, HOME_BLURB, HOME_STACK, HOME_TITLE};
use crate::catalog::Step;
use crate::checklist::Checklist;
use crate::layout::{layout, ConnectorKind, Row};
use crate::routes::Route;
use anyhow::{Context, Result};
use serde::Serialize;

/// Track drawn beside rows that belong to a phase group.
const TEXT_TRACK: &str = "| ";
const TEXT_NO_TRACK: &str = "  ";

#[derive(Serialize)]
struct Progress {
    done: usize,
    gates: usize,
}

#[derive(Serialize)]
struct WorkflowDocument {
    route: &'static str,
    progress: Progress,
    rows: Vec<Row>,
}

pub(super) fn print_route(route: Route, steps: &[Step], profile_base_url: &str) -> Result<()> {
    let text = match route {
        Route::Home => render_home(),
        Route::Workflow => render_workflow(steps, &Checklist::new(), profile_base_url),
    };
    print!("{text}");
    Ok(())
}

pub(super) fn print_workflow_json(steps: &[Step], profile_base_url: &str) -> Result<()> {
    let text = render_workflow_json(steps, profile_base_url)?;
    println!("{text}");
    Ok(())
}

fn render_workflow_json(steps: &[Step], profile_base_url: &str) -> Result<String> {
    let checklist = Checklist::new();
    let document = WorkflowDocument {
        route: Route::Workflow.path(),
        progress: Progress {
            done: checklist.completed_count(),
            gates: steps.len().saturating_sub(1),
        },
        rows: layout(steps, &checklist, profile_base_url),
    };
    serde_json::to_string_pretty(&document).context("serialize workflow")
}

fn render_home() -> String {
    let mut out = String::new();
    out.push_str(HOME_TITLE);
    out.push_str("\n\n");
    out.push_str(HOME_BLURB);
    out.push_str("\n\n");
    for entry in HomeEntry::ALL {
        out.push_str(&format!("  * {}\n", entry.label()));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n", HOME_STACK.join(" · ")));
    out
}

fn render_workflow(steps: &[Step], checklist: &Checklist, profile_base_url: &str) -> String {
    let mut out = String::new();
    for row in layout(steps, checklist, profile_base_url) {
        let track = if row.track().is_some() {
            TEXT_TRACK
        } else {
            TEXT_NO_TRACK
        };
        match row {
            Row::GroupHeader { label, .. } => {
                out.push_str(&format!("{track}{}\n", label.to_uppercase()));
            }
            Row::StepHeader {
                position,
                trigger,
                badge,
                loop_back,
                ..
            } => {
                out.push_str(&format!("{track}{:<4}{trigger}\n", step_number(position)));
                if let Some(badges) = badge_text(badge, loop_back) {
                    out.push_str(&format!("{track}{INDENT}{badges}\n"));
                }
            }
            Row::Prompt {
                label,
                text,
                attribution,
                ..
            } => {
                if let Some(label) = label {
                    out.push_str(&format!("{track}{INDENT}{label}\n"));
                }
                for line in text.lines() {
                    out.push_str(&format!("{track}{INDENT}> {line}\n"));
                }
                out.push_str(&format!("{track}{INDENT}{}\n", copy_label(false)));
                if let Some(attribution) = attribution {
                    out.push_str(&format!(
                        "{track}{INDENT}{}\n",
                        attribution_text(&attribution)
                    ));
                }
            }
            Row::OrDivider { .. } => {
                out.push_str(&format!("{track}{INDENT}{OR_DIVIDER}\n"));
            }
            Row::Annotation { text, .. } => {
                out.push_str(&format!("{track}{INDENT}({text})\n"));
            }
            Row::Connector(connector) => {
                let marker = match connector.kind {
                    ConnectorKind::Within => "",
                    ConnectorKind::Transition => " >>",
                };
                out.push_str(&format!("{track}{CONNECTOR_STEM}\n"));
                out.push_str(&format!(
                    "{track}{} {}{marker}\n",
                    checkbox(connector.checked),
                    connector.label
                ));
                out.push_str(&format!("{track}{CONNECTOR_STEM}\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Phase, WORKFLOW};

    const STEPS: &[Step] = &[
        Step::new(Phase::Plan, "Draft", "Write the plan.", "Plan drafted"),
        Step::new(Phase::Plan, "Review", "Review it, ultrathink.", "Plan reviewed"),
        Step::new(Phase::Execute, "Build", "Build it.", "Built"),
    ];

    #[test]
    fn workflow_text_marks_gates_and_tracks() {
        let mut checklist = Checklist::new();
        checklist.toggle(0);
        let text = render_workflow(STEPS, &checklist, "https://x.com/");
        assert!(text.contains("| PLANNING\n"));
        assert!(text.contains("| 1.  Draft\n"));
        assert!(text.contains("| [x] Plan drafted\n"));
        assert!(text.contains("  [ ] Plan reviewed >>\n"));
        assert!(text.contains("[ultrathink]"));
        assert!(!text.contains("Built"));
    }

    #[test]
    fn home_lists_entries() {
        let text = render_home();
        assert!(text.starts_with(HOME_TITLE));
        assert!(text.contains("* Workflow Prompts"));
        assert!(text.contains("* Documentation"));
    }

    #[test]
    fn json_carries_progress_and_rows() {
        let text = render_workflow_json(WORKFLOW, "https://x.com/").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["route"], "/workflow");
        assert_eq!(value["progress"]["done"], 0);
        assert_eq!(value["progress"]["gates"], WORKFLOW.len() - 1);
        assert_eq!(value["rows"][0]["row"], "group_header");
    }
}
