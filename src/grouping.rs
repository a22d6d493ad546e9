//! Contiguous phase grouping of the step catalog.
use crate::catalog::{Phase, Step};

/// A step paired with its catalog position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PositionedStep<'a> {
    pub position: usize,
    pub step: &'a Step,
}

/// A contiguous run of steps sharing one phase. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseGroup<'a> {
    pub phase: Phase,
    pub steps: Vec<PositionedStep<'a>>,
}

impl<'a> PhaseGroup<'a> {
    pub fn last(&self) -> &PositionedStep<'a> {
        &self.steps[self.steps.len() - 1]
    }
}

/// Partition `steps` into groups, splitting wherever the phase changes between
/// neighbors. A phase that reappears later opens a new group.
pub fn group_by_phase(steps: &[Step]) -> Vec<PhaseGroup<'_>> {
    let mut groups: Vec<PhaseGroup<'_>> = Vec::new();
    for (position, step) in steps.iter().enumerate() {
        let entry = PositionedStep { position, step };
        match groups.last_mut() {
            Some(group) if group.phase == step.phase => group.steps.push(entry),
            _ => groups.push(PhaseGroup {
                phase: step.phase,
                steps: vec![entry],
            }),
        }
    }
    groups
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod tests;
