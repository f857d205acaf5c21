//! svgsfc - turn raw svg icons into Vue single-file components.
//!
//! The heart of the crate is [`template`], a pure transformer that rewrites
//! svg markup into component source with per-instance unique ids. The rest
//! is the command-line tool around it.

pub mod cli;
pub mod config;
pub mod dataurl;
pub mod geometry;
pub mod logger;
pub mod naming;
pub mod template;

pub use template::{
    TemplateError, TemplateOptions, extract_svg, generate_component_source,
    normalize_current_color,
};
