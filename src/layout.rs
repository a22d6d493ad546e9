//! Connector and decoration rendering.
//!
//! [`layout`] projects the catalog and checklist into an ordered list of rows
//! that the terminal view and the text/JSON output both draw. It is recomputed
//! on every draw and holds no state of its own.
use crate::catalog::{Phase, Prompt, Step};
use crate::checklist::Checklist;
use crate::grouping::{group_by_phase, PositionedStep};
use serde::Serialize;

/// Steps whose prompt mentions this get a badge.
pub const MARKER: &str = "ultrathink";

/// Identifies one copy control: a step's single prompt, or one of its variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CopyTarget {
    pub position: usize,
    pub variant: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    /// Between two steps of the same group; drawn alongside the phase track.
    Within,
    /// From the last step of a group to the first of the next; no track.
    Transition,
}

/// Separator between two steps, bound to the completion of the earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Connector {
    /// Position of the preceding step; toggling writes here.
    pub after: usize,
    pub kind: ConnectorKind,
    pub phase: Phase,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum Row {
    GroupHeader {
        phase: Phase,
        label: &'static str,
    },
    StepHeader {
        phase: Phase,
        position: usize,
        trigger: &'static str,
        badge: bool,
        loop_back: bool,
    },
    Prompt {
        phase: Phase,
        target: CopyTarget,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<&'static str>,
        text: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        attribution: Option<Attribution>,
    },
    OrDivider {
        phase: Phase,
    },
    Annotation {
        phase: Phase,
        text: &'static str,
    },
    Connector(Connector),
}

impl Row {
    /// Phase whose colored track is drawn beside this row, if any.
    pub fn track(&self) -> Option<Phase> {
        match self {
            Row::GroupHeader { phase, .. }
            | Row::StepHeader { phase, .. }
            | Row::Prompt { phase, .. }
            | Row::OrDivider { phase }
            | Row::Annotation { phase, .. } => Some(*phase),
            Row::Connector(connector) => match connector.kind {
                ConnectorKind::Within => Some(connector.phase),
                ConnectorKind::Transition => None,
            },
        }
    }

    /// Rows the cursor can land on: prompts (copy) and connectors (toggle).
    pub fn is_focusable(&self) -> bool {
        matches!(self, Row::Prompt { .. } | Row::Connector(_))
    }
}

pub fn layout(steps: &[Step], checklist: &Checklist, profile_base_url: &str) -> Vec<Row> {
    let groups = group_by_phase(steps);
    let mut rows = Vec::new();
    for (group_index, group) in groups.iter().enumerate() {
        rows.push(Row::GroupHeader {
            phase: group.phase,
            label: group.phase.label(),
        });
        for (index, entry) in group.steps.iter().enumerate() {
            push_step(&mut rows, entry, profile_base_url);
            if index + 1 < group.steps.len() {
                rows.push(Row::Connector(connector(
                    entry,
                    ConnectorKind::Within,
                    checklist,
                )));
            }
        }
        if group_index + 1 < groups.len() {
            rows.push(Row::Connector(connector(
                group.last(),
                ConnectorKind::Transition,
                checklist,
            )));
        }
    }
    rows
}

fn push_step(rows: &mut Vec<Row>, entry: &PositionedStep<'_>, profile_base_url: &str) {
    let step = entry.step;
    let phase = step.phase;
    rows.push(Row::StepHeader {
        phase,
        position: entry.position,
        trigger: step.trigger,
        badge: has_marker(step),
        loop_back: step.loop_back,
    });
    match &step.prompt {
        Prompt::Single(text) => rows.push(Row::Prompt {
            phase,
            target: CopyTarget {
                position: entry.position,
                variant: None,
            },
            label: None,
            text: *text,
            attribution: step
                .attribution
                .map(|text| attribution(text, profile_base_url)),
        }),
        Prompt::Variants(variants) => {
            for (index, variant) in variants.iter().enumerate() {
                if index > 0 {
                    rows.push(Row::OrDivider { phase });
                }
                rows.push(Row::Prompt {
                    phase,
                    target: CopyTarget {
                        position: entry.position,
                        variant: Some(index),
                    },
                    label: Some(variant.label),
                    text: variant.text,
                    attribution: variant
                        .attribution
                        .or(step.attribution)
                        .map(|text| attribution(text, profile_base_url)),
                });
            }
        }
    }
    if let Some(text) = step.annotation {
        rows.push(Row::Annotation { phase, text });
    }
}

fn connector(entry: &PositionedStep<'_>, kind: ConnectorKind, checklist: &Checklist) -> Connector {
    Connector {
        after: entry.position,
        kind,
        phase: entry.step.phase,
        label: entry.step.done_check,
        checked: checklist.is_checked(entry.position),
    }
}

/// Whether any of the step's prompt texts contains [`MARKER`] (case-sensitive).
pub fn has_marker(step: &Step) -> bool {
    step.prompt.texts().iter().any(|text| text.contains(MARKER))
}

/// Credit line for a step or variant. `@handle` also links to the profile.
pub fn attribution(text: &'static str, profile_base_url: &str) -> Attribution {
    let url = text
        .strip_prefix('@')
        .filter(|handle| !handle.is_empty())
        .map(|handle| format!("{profile_base_url}{handle}"));
    Attribution { text, url }
}

/// Literal text a copy control places on the clipboard.
pub fn copy_text(steps: &[Step], target: CopyTarget) -> Option<&'static str> {
    let step = steps.get(target.position)?;
    match (&step.prompt, target.variant) {
        (Prompt::Single(text), None) => Some(*text),
        (Prompt::Variants(variants), Some(index)) => variants.get(index).map(|v| v.text),
        _ => None,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
