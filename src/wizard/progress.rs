use serde::Serialize;

use crate::wizard::step::WizardStep;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepState {
    pub step: WizardStep,
    pub title: &'static str,
    pub is_completed: bool,
    pub is_current: bool,
}

/// Maps the wizard position onto the step indicator. Once the job has been
/// posted the review step stays completed even if the user navigates back.
pub fn step_indicator(current: WizardStep, review_completed: bool) -> Vec<StepState> {
    WizardStep::ALL
        .iter()
        .map(|&step| {
            let (is_completed, is_current) = if step == WizardStep::Review && review_completed {
                (true, false)
            } else {
                (step < current, step == current)
            };
            StepState {
                step,
                title: step.title(),
                is_completed,
                is_current,
            }
        })
        .collect()
}
