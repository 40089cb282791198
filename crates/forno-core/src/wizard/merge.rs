//! Reconciling an interpreted voice order with the wizard.
//!
//! The external interpreter returns only the fields the user explicitly
//! mentioned. The merge overlays those fields on the default
//! configuration, works out which steps were thereby satisfied, and
//! either drops the user into the first unsatisfied step or, when every
//! category was covered, straight into the review screen.
//!
//! The merge is all-or-nothing per attempt: it only runs on a
//! successfully parsed interpreter response, so a failed call never
//! touches wizard state (the caller surfaces the error for a retry).

use std::collections::BTreeSet;

use log::info;

use crate::models::{Category, Configuration, PartialConfiguration, STEPS};

use super::{Wizard, WizardState};

/// Informational message shown when some categories were understood.
fn detected_message(labels: &[&str]) -> String {
    format!(
        "موارد دریافت شده: {}. لطفا سایر موارد را تکمیل کنید.",
        labels.join("، ")
    )
}

/// Fallback message when the interpreter produced an empty result.
const NOTHING_UNDERSTOOD: &str = "متوجه جزئیات نشدیم. لطفا مراحل را تکمیل کنید.";

/// Where the wizard landed after merging a voice interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// At least one step was not mentioned; the wizard resumed
    /// step-by-step mode at the first missing step.
    Resume {
        /// Index of the first step the user still has to complete
        step_index: usize,

        /// Persian message listing the categories already filled (or a
        /// generic notice when nothing was understood)
        message: String,
    },

    /// Every category was mentioned; the order skips straight to the
    /// review screen.
    Review,
}

impl Wizard<'_> {
    /// Merge a partial configuration from the voice interpreter into a
    /// fresh session.
    ///
    /// Fields present in the partial result override the defaults
    /// (multi-select maps replace wholesale, they are not unioned); the
    /// merged configuration is then revalidated, and any selection reset
    /// by a compatibility rule has its category re-opened so the user
    /// picks it explicitly.
    pub fn apply_interpretation(&mut self, partial: &PartialConfiguration) -> MergeOutcome {
        let mut detected: BTreeSet<Category> = STEPS
            .iter()
            .map(|step| step.category)
            .filter(|category| partial.mentions(*category))
            .collect();

        let defaults = Configuration::default();
        let config = Configuration {
            size: partial.size.clone().unwrap_or(defaults.size),
            crust: partial.crust.clone().unwrap_or(defaults.crust),
            cut: partial.cut.clone().unwrap_or(defaults.cut),
            sauce: partial.sauce.clone().or(defaults.sauce),
            sauce_amount: partial.sauce_amount.unwrap_or(defaults.sauce_amount),
            bake: partial.bake.unwrap_or(defaults.bake),
            cheeses: partial.cheeses.clone().unwrap_or_default(),
            meats: partial.meats.clone().unwrap_or_default(),
            veggies: partial.veggies.clone().unwrap_or_default(),
        };
        self.set_config(config);

        // A spoken combination can be contradictory (e.g. a small pizza
        // with the stuffed crust); the reset category is re-opened so the
        // user completes it manually.
        for category in self.revalidate() {
            detected.remove(&category);
        }

        info!(
            "Voice interpretation filled {} of {} steps",
            detected.len(),
            STEPS.len()
        );

        let first_missing = STEPS
            .iter()
            .position(|step| !detected.contains(&step.category));

        match first_missing {
            Some(position) => {
                let labels: Vec<&str> = STEPS
                    .iter()
                    .map(|step| step.category)
                    .filter(|category| detected.contains(category))
                    .map(|category| category.label())
                    .collect();
                let message = if labels.is_empty() {
                    NOTHING_UNDERSTOOD.to_string()
                } else {
                    detected_message(&labels)
                };

                self.set_state(WizardState {
                    current_step_index: position,
                    completed_steps: detected,
                });

                MergeOutcome::Resume {
                    step_index: position,
                    message,
                }
            }
            None => {
                self.set_state(WizardState {
                    current_step_index: 0,
                    completed_steps: detected,
                });
                MergeOutcome::Review
            }
        }
    }
}

/// Position of the first step sequence entry not covered by a set of
/// detected categories.
pub fn first_missing_step(detected: &BTreeSet<Category>) -> Option<usize> {
    STEPS
        .iter()
        .position(|step| !detected.contains(&step.category))
}

/// Convenience wrapper used by tests and callers that only need the
/// detected set.
pub fn detected_steps(partial: &PartialConfiguration) -> BTreeSet<Category> {
    STEPS
        .iter()
        .map(|step| step.category)
        .filter(|category| partial.mentions(*category))
        .collect()
}
