//! The workflow step catalog.
//!
//! Steps are authored by hand and never reordered at runtime, so a step's
//! index in [`WORKFLOW`] is its stable identity for checklist state and
//! connector rendering.
use ratatui::style::Color;
use serde::Serialize;

/// Workflow phase. Defines grouping and the colored track shown beside a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Init,
    Brainstorm,
    Plan,
    Execute,
    Verify,
    Compounding,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Init => "Initializing",
            Phase::Brainstorm => "Brainstorming",
            Phase::Plan => "Planning",
            Phase::Execute => "Execution",
            Phase::Verify => "Verifying",
            Phase::Compounding => "Compounding",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Phase::Init => Color::Gray,
            Phase::Brainstorm => Color::Cyan,
            Phase::Plan => Color::Blue,
            Phase::Execute => Color::Green,
            Phase::Verify => Color::Yellow,
            Phase::Compounding => Color::Magenta,
        }
    }
}

/// One named alternative in a variant set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptVariant {
    pub label: &'static str,
    pub text: &'static str,
    pub attribution: Option<&'static str>,
}

/// The prompt form of a step: a single text, or mutually exclusive variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    Single(&'static str),
    /// Never empty.
    Variants(&'static [PromptVariant]),
}

impl Prompt {
    /// Every prompt text of this step, in declared order.
    pub fn texts(&self) -> Vec<&'static str> {
        match self {
            Prompt::Single(text) => vec![*text],
            Prompt::Variants(variants) => variants.iter().map(|variant| variant.text).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub phase: Phase,
    /// When to reach for this step.
    pub trigger: &'static str,
    pub prompt: Prompt,
    /// Completion gate shown on the connector that follows this step.
    pub done_check: &'static str,
    pub attribution: Option<&'static str>,
    pub annotation: Option<&'static str>,
    /// Shows the "repeat" indicator. Carries no target.
    pub loop_back: bool,
}

impl Step {
    /// A single-prompt step with no optional decorations.
    pub const fn new(
        phase: Phase,
        trigger: &'static str,
        prompt: &'static str,
        done_check: &'static str,
    ) -> Self {
        Self {
            phase,
            trigger,
            prompt: Prompt::Single(prompt),
            done_check,
            attribution: None,
            annotation: None,
            loop_back: false,
        }
    }

    /// A step offering a choice between prompt variants.
    pub const fn choice(
        phase: Phase,
        trigger: &'static str,
        variants: &'static [PromptVariant],
        done_check: &'static str,
    ) -> Self {
        Self {
            phase,
            trigger,
            prompt: Prompt::Variants(variants),
            done_check,
            attribution: None,
            annotation: None,
            loop_back: false,
        }
    }

    pub const fn with_attribution(mut self, attribution: &'static str) -> Self {
        self.attribution = Some(attribution);
        self
    }

    pub const fn with_annotation(mut self, annotation: &'static str) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub const fn looping_back(mut self) -> Self {
        self.loop_back = true;
        self
    }
}

const DOODLESTEIN: &str = "@doodlestein";

const PLAN_VARIANTS: &[PromptVariant] = &[
    PromptVariant {
        label: "Beads",
        text: "OK so please take ALL of that and elaborate on it more and then create a comprehensive and granular set of beads for all this with tasks, subtasks, and dependency structure overlaid, with detailed comments so that the whole thing is totally self-contained and self-documenting (including relevant background, reasoning/justification, considerations, etc.-- anything we'd want our \"future self\" to know about the goals and intentions and thought process and how it serves the over-arching goals of the project.)",
        attribution: Some(DOODLESTEIN),
    },
    PromptVariant {
        label: "Plan doc",
        text: "ultrathink and turn all of that into a PLAN.md with numbered phases, each phase listing its tasks, the files it touches, the tests that prove it works, and the risks to watch for. Keep it self-contained so a fresh session can pick it up cold.",
        attribution: None,
    },
];

/// The workflow, in presentation order.
pub const WORKFLOW: &[Step] = &[
    Step::new(
        Phase::Init,
        "When starting a fresh project or a new session in an unfamiliar repo",
        "Read AGENTS.md and the README, then skim the top-level layout. Summarize the build, test, and lint commands and any conventions I should follow before we change anything.",
        "Repo conventions loaded",
    ),
    Step::new(
        Phase::Brainstorm,
        "When you have a vague idea and need to explore directions",
        "Help me brainstorm ideas for [topic]. Consider different angles, potential challenges, and creative approaches. What are the key questions we should be asking?",
        "Ideas explored & direction chosen",
    ),
    Step::new(
        Phase::Brainstorm,
        "When you need to deeply understand the system before building",
        "Now please take all that and write me a single Markdown doc with a deep, detailed guide for a dev to implement the change, including teaching me background and context about the broader surrounding system, and rationale behind why we're doing things a certain way.",
        "Concepts understood & documented",
    ),
    Step::choice(
        Phase::Plan,
        "When you know what to build, capture it as tasks",
        PLAN_VARIANTS,
        "Tasks created",
    )
    .with_annotation("Pick one. Beads suit long multi-session work; a plan doc is enough for a single sitting."),
    Step::new(
        Phase::Plan,
        "When the tasks are made, double check them",
        "Check over each bead super carefully-- are you sure it makes sense? Is it optimal? Could we change anything to make the system work better for users? If so, revise the beads. It's a lot easier and faster to operate in \"plan space\" before we start implementing these things!",
        "Plan reviewed & approved",
    )
    .with_attribution(DOODLESTEIN),
    Step::new(
        Phase::Execute,
        "When the tasks are good and it's time to build",
        "OK, so start systematically and methodically and meticulously and diligently executing those remaining beads tasks that you created in the optimal logical order! Don't forget to mark beads as you work on them.",
        "All tasks completed",
    )
    .with_attribution(DOODLESTEIN),
    Step::new(
        Phase::Verify,
        "When the build is done and you need to review",
        "Great, now I want you to carefully read over all of the new code you just wrote and other existing code you just modified with \"fresh eyes\" looking super carefully for any obvious bugs, errors, problems, issues, confusion, etc. Carefully fix anything you uncover.",
        "Quality verified & shipped",
    )
    .with_attribution(DOODLESTEIN),
    Step::new(
        Phase::Compounding,
        "When the work has shipped and the next round is about to start",
        "ultrathink about what slowed us down in this session. Update AGENTS.md (or the relevant docs) with the commands, gotchas, and conventions we learned so the next session starts smarter.",
        "Lessons captured",
    )
    .with_annotation("Then go back to Brainstorming with the next idea.")
    .looping_back(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_has_a_prompt() {
        for (position, step) in WORKFLOW.iter().enumerate() {
            let texts = step.prompt.texts();
            assert!(!texts.is_empty(), "step {position} has no prompt");
            assert!(
                texts.iter().all(|text| !text.trim().is_empty()),
                "step {position} has an empty prompt text"
            );
        }
    }

    #[test]
    fn every_phase_is_used() {
        let phases = [
            Phase::Init,
            Phase::Brainstorm,
            Phase::Plan,
            Phase::Execute,
            Phase::Verify,
            Phase::Compounding,
        ];
        for phase in phases {
            assert!(
                WORKFLOW.iter().any(|step| step.phase == phase),
                "{} unused",
                phase.label()
            );
        }
    }

    #[test]
    fn variant_texts_keep_declared_order() {
        let step = &WORKFLOW[3];
        let texts = step.prompt.texts();
        assert_eq!(texts, vec![PLAN_VARIANTS[0].text, PLAN_VARIANTS[1].text]);
    }
}
