use super::group_by_phase;
use crate::catalog::{Phase, Step, WORKFLOW};

fn step(phase: Phase, prompt: &'static str) -> Step {
    Step::new(phase, "trigger", prompt, "done")
}

fn catalogs() -> Vec<Vec<Step>> {
    use Phase::*;
    vec![
        vec![step(Plan, "a")],
        vec![step(Plan, "a"), step(Plan, "b"), step(Execute, "c")],
        vec![step(Init, "a"), step(Brainstorm, "b"), step(Plan, "c")],
        vec![step(Verify, "a"), step(Verify, "b"), step(Verify, "c")],
        vec![
            step(Plan, "a"),
            step(Execute, "b"),
            step(Plan, "c"),
            step(Plan, "d"),
            step(Execute, "e"),
        ],
        WORKFLOW.to_vec(),
    ]
}

#[test]
fn empty_catalog_has_no_groups() {
    assert!(group_by_phase(&[]).is_empty());
}

#[test]
fn groups_reproduce_the_catalog_in_order() {
    for catalog in catalogs() {
        let groups = group_by_phase(&catalog);
        let flattened: Vec<(usize, &Step)> = groups
            .iter()
            .flat_map(|group| group.steps.iter().map(|entry| (entry.position, entry.step)))
            .collect();
        let expected: Vec<(usize, &Step)> = catalog.iter().enumerate().collect();
        assert_eq!(flattened, expected);
    }
}

#[test]
fn groups_are_non_empty_and_adjacent_groups_differ() {
    for catalog in catalogs() {
        let groups = group_by_phase(&catalog);
        assert!(groups.iter().all(|group| !group.steps.is_empty()));
        assert!(groups
            .iter()
            .all(|group| group.steps.iter().all(|entry| entry.step.phase == group.phase)));
        for pair in groups.windows(2) {
            assert_ne!(pair[0].phase, pair[1].phase);
        }
    }
}

#[test]
fn plan_plan_execute_yields_two_groups() {
    let catalog = vec![
        step(Phase::Plan, "A"),
        step(Phase::Plan, "B"),
        step(Phase::Execute, "C"),
    ];
    let groups = group_by_phase(&catalog);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].phase, Phase::Plan);
    assert_eq!(
        groups[0].steps.iter().map(|e| e.position).collect::<Vec<_>>(),
        vec![0, 1]
    );
    assert_eq!(groups[1].phase, Phase::Execute);
    assert_eq!(groups[1].steps[0].position, 2);
    assert_eq!(groups[1].last().position, 2);
}

#[test]
fn repeated_phase_opens_a_new_group() {
    let catalog = vec![
        step(Phase::Plan, "a"),
        step(Phase::Execute, "b"),
        step(Phase::Plan, "c"),
    ];
    let phases: Vec<Phase> = group_by_phase(&catalog)
        .iter()
        .map(|group| group.phase)
        .collect();
    assert_eq!(phases, vec![Phase::Plan, Phase::Execute, Phase::Plan]);
}

#[test]
fn distinct_phases_yield_one_group_per_step() {
    use Phase::*;
    let catalog: Vec<Step> = [Init, Brainstorm, Plan, Execute, Verify, Compounding]
        .into_iter()
        .map(|phase| step(phase, "x"))
        .collect();
    assert_eq!(group_by_phase(&catalog).len(), catalog.len());
}

#[test]
fn grouping_is_deterministic() {
    assert_eq!(group_by_phase(WORKFLOW), group_by_phase(WORKFLOW));
}
