//! Command-line interface module.

mod args;
pub mod build;
pub mod convert;
pub mod init;
pub mod layout;
pub mod name;

pub use args::{BuildArgs, Cli, Commands, ConvertArgs, LayoutArgs, TransformArgs};
