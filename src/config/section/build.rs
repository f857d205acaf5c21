//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! input = "icons"            # Directory scanned for *.svg (relative to project root)
//! output = "components"      # Directory receiving generated *.vue files
//! typescript = true          # Emit `<script lang="ts">`
//! current_color = true       # Rewrite stroke/fill values to currentColor
//! index = true               # Write an index barrel exporting every component
//! clean = false              # Remove the output directory before building
//! ```

use super::super::ConfigDiagnostics;
use crate::template::TemplateOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub typescript: bool,
    pub current_color: bool,
    pub index: bool,
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input: "icons".into(),
            output: "components".into(),
            typescript: true,
            current_color: true,
            index: true,
            clean: false,
        }
    }
}

impl BuildConfig {
    /// Transformer options derived from this section.
    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            current_color: self.current_color,
            typescript: self.typescript,
        }
    }

    /// File name of the generated barrel module.
    pub fn index_file_name(&self) -> &'static str {
        if self.typescript { "index.ts" } else { "index.js" }
    }

    /// Resolve relative directories against `root`.
    pub fn normalize(&mut self, root: &Path) {
        self.input = root.join(&self.input);
        self.output = root.join(&self.output);
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.input.is_dir() {
            diag.error_with_hint(
                "build.input",
                format!("directory `{}` not found", self.input.display()),
                "create it or point build.input at your icon folder",
            );
        }

        if self.input == self.output {
            diag.error(
                "build.output",
                "output directory must differ from build.input",
            );
        } else if self.output.starts_with(&self.input) {
            diag.error_with_hint(
                "build.output",
                "output directory is nested inside build.input",
                "generated files would be rescanned; move the output elsewhere",
            );
        }
    }
}
