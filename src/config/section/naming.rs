//! `[naming]` section configuration.
//!
//! ```toml
//! [naming]
//! prefix = "Icon"   # IconHome, IconArrowLeft, ...
//! ```

use super::super::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Prepended to every generated component name.
    pub prefix: String,
}

impl NamingConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.prefix.is_empty() {
            return;
        }

        let starts_upper = self
            .prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase());
        let word_chars = self
            .prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !starts_upper || !word_chars {
            diag.error_with_hint(
                "naming.prefix",
                format!("`{}` is not a valid component name prefix", self.prefix),
                "use ASCII PascalCase, e.g. \"Icon\"",
            );
        }
    }
}
