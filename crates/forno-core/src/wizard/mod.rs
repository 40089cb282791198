//! Step wizard for building a pizza order.
//!
//! The wizard walks the fixed [`STEPS`] sequence, owning the
//! configuration under construction and the navigation state (current
//! index plus the set of completed categories). It enforces the
//! advancement rules: required steps block until their field is filled,
//! optional steps never block, and advancing past the last step hands
//! over to checkout.
//!
//! Selection changes go through [`Wizard::toggle_selection`], which
//! validates ids against the menu, rejects items whose compatibility
//! rule excludes them, and retroactively resets selections that a later
//! change invalidated (e.g. downsizing after picking the stuffed crust).

use std::collections::BTreeSet;

use log::info;

use crate::error::{OrderError, Result};
use crate::menu::{Menu, MenuItem};
use crate::models::{BakeStyle, Category, Configuration, Intensity, StepDef, Totals, STEPS};
use crate::totals::compute_totals;

pub mod merge;


pub use merge::MergeOutcome;

/// Navigation state of one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// Index of the step currently shown, into [`STEPS`]
    pub current_step_index: usize,

    /// Categories whose steps have been completed or detected
    pub completed_steps: BTreeSet<Category>,
}

/// Outcome of an advancement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A required field is empty; nothing changed
    Blocked { field: Category },

    /// Moved forward to the given step index
    Moved { step_index: usize },

    /// Left the last step; the order is ready for checkout
    Checkout,
}

/// Outcome of a retreat attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retreat {
    /// Moved back to the given step index
    Moved { step_index: usize },

    /// Already at the first step; the session exits to the landing state
    Exited,
}

/// The step sequencer driving order construction.
pub struct Wizard<'m> {
    menu: &'m Menu,
    config: Configuration,
    state: WizardState,
}

impl<'m> Wizard<'m> {
    /// Creates a wizard over the given menu with the default
    /// configuration, positioned at the first step.
    pub fn new(menu: &'m Menu) -> Self {
        Self {
            menu,
            config: Configuration::default(),
            state: WizardState::default(),
        }
    }

    /// Resets configuration and navigation for a fresh manual session.
    pub fn start_manual(&mut self) {
        info!("Starting manual order session");
        self.config = Configuration::default();
        self.state = WizardState::default();
    }

    /// Re-enters step-by-step mode from the review screen, keeping the
    /// current configuration and marking every step as already visited.
    pub fn edit_from_review(&mut self) {
        self.state.current_step_index = 0;
        self.state.completed_steps = STEPS.iter().map(|s| s.category).collect();
    }

    /// The menu this wizard sells from.
    pub fn menu(&self) -> &Menu {
        self.menu
    }

    /// The configuration under construction.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Current navigation state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The step definition at the current index.
    pub fn current_step(&self) -> StepDef {
        STEPS[self.state.current_step_index]
    }

    /// Running totals, recomputed on every call.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.config, self.menu)
    }

    /// Menu items selectable for a category under the current
    /// configuration (items excluded by a compatibility rule are
    /// filtered out).
    pub fn available_items(&self, category: Category) -> Vec<&MenuItem> {
        self.menu
            .items(category)
            .iter()
            .filter(|item| item.is_available(&self.config))
            .collect()
    }

    /// Select or toggle an item within a category.
    ///
    /// Single-select categories replace their value unconditionally
    /// (re-selecting the current id is a no-op overwrite); multi-select
    /// categories toggle membership, inserting with normal intensity.
    /// Never advances the step.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidInput`] when the id does not exist
    /// in the category's list or its compatibility rule excludes it
    /// under the current configuration.
    pub fn toggle_selection(&mut self, category: Category, id: &str) -> Result<()> {
        if category == Category::Bake {
            let bake: BakeStyle = id
                .parse()
                .map_err(|reason: String| OrderError::invalid_input("bake").with_reason(reason))?;
            self.config.bake = bake;
            return Ok(());
        }

        let item = self.menu.find(category, id).ok_or_else(|| {
            OrderError::invalid_input(category.as_str())
                .with_reason(format!("'{id}' is not on the menu"))
        })?;

        if !item.is_available(&self.config) {
            return Err(OrderError::invalid_input(category.as_str())
                .with_reason(format!("'{id}' is not available for this configuration")));
        }

        if let Some(selection) = self.config.toppings_mut(category) {
            if selection.remove(id).is_none() {
                selection.insert(id.to_string(), Intensity::Normal);
            }
        } else {
            match category {
                Category::Size => self.config.size = id.to_string(),
                Category::Crust => self.config.crust = id.to_string(),
                Category::Cut => self.config.cut = id.to_string(),
                Category::Sauce => self.config.sauce = Some(id.to_string()),
                _ => unreachable!("bake and multi-select handled above"),
            }
            self.revalidate();
        }

        Ok(())
    }

    /// Attempt to move to the next step.
    ///
    /// A required step with an empty field blocks without any state
    /// change. Otherwise the current category joins the completed set
    /// (idempotent) and the index moves forward, or the wizard reports
    /// [`Advance::Checkout`] from the last step.
    pub fn advance(&mut self) -> Advance {
        let step = self.current_step();

        if step.required && !self.config.is_filled(step.category) {
            return Advance::Blocked {
                field: step.category,
            };
        }

        self.state.completed_steps.insert(step.category);

        if self.state.current_step_index < STEPS.len() - 1 {
            self.state.current_step_index += 1;
            Advance::Moved {
                step_index: self.state.current_step_index,
            }
        } else {
            Advance::Checkout
        }
    }

    /// Move back one step, or exit to the landing state from the first
    /// step (discarding in-progress completion state; the configuration
    /// resets on the next manual start).
    pub fn retreat(&mut self) -> Retreat {
        if self.state.current_step_index > 0 {
            self.state.current_step_index -= 1;
            Retreat::Moved {
                step_index: self.state.current_step_index,
            }
        } else {
            Retreat::Exited
        }
    }

    /// Drop selections that a compatibility rule now excludes, resetting
    /// them to the default configuration's value.
    ///
    /// Returns the categories that were reset. With the standard menu
    /// this only ever affects the crust (the stuffed crust is excluded
    /// while the size is small), but any single-select selection whose
    /// rule no longer holds is handled the same way.
    pub(crate) fn revalidate(&mut self) -> Vec<Category> {
        let defaults = Configuration::default();
        let mut reset = Vec::new();

        for category in [Category::Size, Category::Crust, Category::Cut, Category::Sauce] {
            let excluded = self
                .config
                .single_selection(category)
                .and_then(|id| self.menu.find(category, id))
                .map_or(false, |item| !item.is_available(&self.config));
            if excluded {
                reset.push(category);
            }
        }

        for category in &reset {
            info!(
                "Resetting {} selection excluded by a compatibility rule",
                category.as_str()
            );
            match category {
                Category::Size => self.config.size = defaults.size.clone(),
                Category::Crust => self.config.crust = defaults.crust.clone(),
                Category::Cut => self.config.cut = defaults.cut.clone(),
                Category::Sauce => self.config.sauce = defaults.sauce.clone(),
                _ => {}
            }
        }

        reset
    }

    pub(crate) fn set_config(&mut self, config: Configuration) {
        self.config = config;
    }

    pub(crate) fn set_state(&mut self, state: WizardState) {
        self.state = state;
    }
}
