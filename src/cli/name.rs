//! `name`: preview generated component names.

use std::path::Path;

use crate::naming::component_name;

/// Component name for a file name, with prefix and optional index.
///
/// Any extension is dropped first, so `首页.svg` and `首页` agree.
pub fn preview_name(file_name: &str, prefix: &str, index: Option<usize>) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| file_name.into());
    format!("{prefix}{}", component_name(&stem, index))
}

pub fn run_name(names: &[String], prefix: &str, index: Option<usize>) {
    for name in names {
        println!("{}", preview_name(name, prefix, index));
    }
}
