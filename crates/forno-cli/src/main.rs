//! Forno CLI Application
//!
//! Command-line interface for the guided pizza order builder.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(renderer);

    info!("Forno started");

    match command {
        Some(Build) => cli.run_build().await,
        Some(Voice(args)) => cli.run_voice(&args.audio_file).await,
        Some(Menu(args)) => cli.show_menu(args.category.map(Into::into)),
        None => cli.show_menu(None),
    }
}
