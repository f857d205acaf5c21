//! `init`: write a commented default config.

use anyhow::{Context, Result, bail};
use std::fs;

use crate::{config::ProjectConfig, log};

/// Default `svgsfc.toml` written by `init`.
pub const DEFAULT_CONFIG: &str = r#"[build]
# Directory scanned for *.svg (relative to this file)
input = "icons"
# Directory receiving generated *.vue components
output = "components"
# Emit <script lang="ts"> in generated components
typescript = true
# Rewrite stroke/fill values (except "none") to currentColor
current_color = true
# Write an index barrel exporting every component
index = true
# Remove the output directory before each build
clean = false

[naming]
# Prepended to every component name, e.g. "Icon" -> IconHome
prefix = ""
"#;

pub fn init_project(config: &ProjectConfig, force: bool) -> Result<()> {
    let path = &config.config_path;
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let input = &config.build.input;
    if !input.exists() {
        fs::create_dir_all(input)
            .with_context(|| format!("Failed to create {}", input.display()))?;
    }

    log!("init"; "created {}", path.display());
    log!("init"; "drop svg files into {} and run `svgsfc build`", config.root_relative(input).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, test_parse_config};
    use tempfile::TempDir;

    fn make_config(temp: &TempDir) -> ProjectConfig {
        let mut config = ProjectConfig {
            root: temp.path().to_path_buf(),
            config_path: temp.path().join(CONFIG_FILE),
            ..ProjectConfig::default()
        };
        config.build.normalize(temp.path());
        config
    }

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed = test_parse_config(DEFAULT_CONFIG);
        let defaults = ProjectConfig::default();
        assert_eq!(parsed.build, defaults.build);
        assert_eq!(parsed.naming, defaults.naming);
    }

    #[test]
    fn test_init_writes_config_and_input() {
        let temp = TempDir::new().unwrap();
        let config = make_config(&temp);

        init_project(&config, false).unwrap();
        assert_eq!(
            fs::read_to_string(&config.config_path).unwrap(),
            DEFAULT_CONFIG
        );
        assert!(config.build.input.is_dir());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let config = make_config(&temp);
        fs::write(&config.config_path, "[build]").unwrap();

        assert!(init_project(&config, false).is_err());
        init_project(&config, true).unwrap();
        assert_eq!(
            fs::read_to_string(&config.config_path).unwrap(),
            DEFAULT_CONFIG
        );
    }
}
