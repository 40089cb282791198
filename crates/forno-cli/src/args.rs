use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use forno_core::Category;

/// Main command-line interface for the Forno pizza order builder
///
/// Forno guides a customer through assembling a pizza step by step
/// (size, crust, cut, sauce, bake, toppings) with running price and
/// calorie totals, or seeds the order from a recorded natural-language
/// request interpreted by an external AI service. Completed orders are
/// receipted to a notification webhook together with an AI-generated
/// chef comment.
#[derive(Parser)]
#[command(version, about, name = "forno")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Forno CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build a pizza step by step
    #[command(alias = "b")]
    Build,
    /// Order by voice from a recorded audio file
    #[command(alias = "v")]
    Voice(VoiceArgs),
    /// Browse the menu
    #[command(alias = "m")]
    Menu(MenuArgs),
}

/// Order by voice from a recorded audio file
///
/// The file is read as one finished recording session and sent to the
/// voice interpreter. Categories the interpreter understood are filled
/// in; the wizard resumes at the first step that was not mentioned.
#[derive(ClapArgs)]
pub struct VoiceArgs {
    /// Path to a WAV recording of the spoken order
    #[arg(help = "WAV file containing the spoken order (Persian)")]
    pub audio_file: PathBuf,
}

/// Browse the menu
#[derive(ClapArgs)]
pub struct MenuArgs {
    /// Category to list; all categories when omitted
    #[arg(value_enum)]
    pub category: Option<CategoryArg>,
}

/// Command-line argument representation of customization categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Size,
    Crust,
    Cut,
    Sauce,
    Bake,
    Cheese,
    Meats,
    Veggies,
}

impl From<CategoryArg> for Category {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::Size => Category::Size,
            CategoryArg::Crust => Category::Crust,
            CategoryArg::Cut => Category::Cut,
            CategoryArg::Sauce => Category::Sauce,
            CategoryArg::Bake => Category::Bake,
            CategoryArg::Cheese => Category::Cheese,
            CategoryArg::Meats => Category::Meats,
            CategoryArg::Veggies => Category::Veggies,
        }
    }
}
