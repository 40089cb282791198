//! Step progress rendering for the wizard header.

use std::fmt;

use crate::models::STEPS;
use crate::wizard::WizardState;

/// One-line progress bar over the step sequence.
///
/// Each step renders with an icon: `✓` completed, `➤` current, `○`
/// pending.
pub struct StepProgress<'a> {
    pub state: &'a WizardState,
}

impl fmt::Display for StepProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "مرحله {}/{}: {}",
            self.state.current_step_index + 1,
            STEPS.len(),
            STEPS[self.state.current_step_index].category.label()
        )?;

        for (index, step) in STEPS.iter().enumerate() {
            let icon = if index == self.state.current_step_index {
                "➤"
            } else if self.state.completed_steps.contains(&step.category) {
                "✓"
            } else {
                "○"
            };
            writeln!(f, "{icon} {}", step.category.label())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_progress_marks_current_and_completed() {
        let state = WizardState {
            current_step_index: 1,
            completed_steps: [Category::Size].into_iter().collect(),
        };
        let text = StepProgress { state: &state }.to_string();

        assert!(text.contains("مرحله 2/8"));
        assert!(text.contains("✓ سایز نان"));
        assert!(text.contains("➤ نوع خمیر"));
        assert!(text.contains("○ مدل برش"));
    }
}
