//! svgsfc command-line entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use svgsfc::{
    cli::{self, Cli, Commands},
    config::ProjectConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { force, .. } => cli::init::init_project(&config, *force),
        Commands::Build { .. } => cli::build::run_build(&config),
        Commands::Convert { args } => cli::convert::run_convert(args, &config),
        Commands::Name { names, index, .. } => {
            cli::name::run_name(names, &config.naming.prefix, *index);
            Ok(())
        }
        Commands::Layout { args } => {
            cli::layout::run_layout(args);
            Ok(())
        }
    }
}
