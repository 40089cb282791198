//! Core library for the Forno pizza order builder.
//!
//! This crate provides the order-building logic behind the guided
//! wizard: the static menu catalog, the configuration model, pure
//! price/calorie totaling, step navigation with validation, the voice
//! interpretation merge, and checkout against the external AI and
//! webhook collaborators.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Wizard      │    │  Menu + Totals  │    │    Services     │
//! │ (steps, merge)  │───▶│ (catalog, sums) │    │ (chat, webhook) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Session state         Pure domain data       External calls
//! ```
//!
//! Totals are recomputed on every read; nothing is cached or persisted.
//! The only managed resource is the [`voice::RecordingSession`] buffer.
//! External collaborators sit behind traits ([`services::CommentGenerator`],
//! [`services::VoiceInterpreter`], [`services::OrderNotifier`]) so every
//! flow is testable without a network.
//!
//! # Quick Start
//!
//! ```rust
//! use forno_core::{Category, Menu, Wizard};
//!
//! # fn example() -> Result<(), forno_core::OrderError> {
//! let mut wizard = Wizard::new(Menu::standard());
//! wizard.start_manual();
//!
//! wizard.toggle_selection(Category::Size, "medium")?;
//! wizard.toggle_selection(Category::Meats, "pepperoni")?;
//! wizard.advance();
//!
//! let totals = wizard.totals();
//! println!("{} toman so far", totals.price);
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod totals;
pub mod voice;
pub mod wizard;

// Re-export commonly used types
pub use checkout::Checkout;
pub use display::{CategoryListing, Receipt, StepProgress};
pub use error::{OrderError, Result};
pub use menu::{format_price, CompatibilityRule, Menu, MenuItem};
pub use models::{
    step_index, BakeStyle, Category, Configuration, Intensity, OrderResult,
    PartialConfiguration, StepDef, Totals, STEPS,
};
pub use totals::compute_totals;
pub use voice::RecordingSession;
pub use wizard::{Advance, MergeOutcome, Retreat, Wizard, WizardState};
