//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;
use crate::geometry::{Rect, ScaleStandard, Size};

/// svgsfc - turn raw svg icons into vue single-file components
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default svgsfc.toml
    #[command(visible_alias = "i")]
    Init {
        /// Project directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Convert every svg in the configured input directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Convert a single svg file, stdin (`-`) or data URL
    #[command(visible_alias = "c")]
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Print the component name generated for each file name
    #[command(visible_alias = "n")]
    Name {
        /// File names or stems (extension is ignored)
        #[arg(required = true)]
        names: Vec<String>,

        /// Number appended to every name
        #[arg(short, long)]
        index: Option<usize>,

        /// Prefix prepended to every name (overrides naming.prefix)
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Compute stage scale, widget placements and overlaps
    #[command(visible_alias = "l")]
    Layout {
        #[command(flatten)]
        args: LayoutArgs,
    },
}

/// Transformer switches shared by Build and Convert.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TransformArgs {
    /// Emit `<script lang="ts">`
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub typescript: Option<bool>,

    /// Rewrite stroke/fill values to currentColor
    #[arg(short = 'k', long = "current-color", action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub current_color: Option<bool>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Remove the output directory before building
    #[arg(short, long)]
    pub clean: bool,

    /// Input directory (overrides build.input)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub input: Option<PathBuf>,

    /// Output directory (overrides build.output)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Write the index barrel
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub index: Option<bool>,

    #[command(flatten)]
    pub transform: TransformArgs,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Svg file path, `-` for stdin, or a `data:` URL
    pub input: String,

    /// Write to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub transform: TransformArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Design stage size
    #[arg(long, default_value = "1920x1080")]
    pub design: Size,

    /// Viewport size the stage is shown in
    #[arg(long)]
    pub viewport: Size,

    /// Axis that drives the scale
    #[arg(long, value_enum, default_value_t = ScaleStandard::Contain)]
    pub standard: ScaleStandard,

    /// Widget rectangle in design pixels: LEFT,TOP,WIDTH,HEIGHT (repeatable)
    #[arg(short, long = "rect")]
    pub rects: Vec<Rect>,

    /// Outline placements for layout debugging
    #[arg(long)]
    pub dev: bool,
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
