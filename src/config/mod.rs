//! Project configuration management for `svgsfc.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [build], [naming]
//! ├── error.rs       # ConfigError, ConfigDiagnostics
//! ├── util.rs        # config discovery, path normalization
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! The config file is searched upward from the working directory. Its parent
//! directory becomes the project root; relative paths resolve against it.
//! Only `build` insists on a config file; the other commands fall back to
//! defaults.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use section::{BuildConfig, NamingConfig};
pub use util::{find_config_file, normalize_path};

use crate::{
    cli::{BuildArgs, Cli, Commands, TransformArgs},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "svgsfc.toml";

/// Root configuration structure representing `svgsfc.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub naming: NamingConfig,
}

impl ProjectConfig {
    /// Load configuration for the parsed command line.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let found = match &cli.command {
            Commands::Init { .. } => None,
            _ => find_config_file(&cli.config, &cwd),
        };

        let mut config = match &found {
            Some(path) => Self::from_path(path)?,
            None if cli.is_build() => bail!(ConfigError::NotFound(cli.config.clone())),
            None => Self::default(),
        };

        let root = match (&cli.command, &found) {
            (Commands::Init { dir: Some(dir), .. }, _) => cwd.join(dir),
            (_, Some(path)) => path.parent().map(Path::to_path_buf).unwrap_or_default(),
            _ => cwd.clone(),
        };
        let root = normalize_path(&root);

        config.config_path = found.unwrap_or_else(|| root.join(&cli.config));
        config.root = root.clone();
        config.build.normalize(&root);
        config.apply_command_options(cli, &cwd);

        if cli.is_build() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            let display_path = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {}, ignoring: {}", display_path, ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli, cwd: &Path) {
        match &cli.command {
            Commands::Build { args } => self.apply_build_args(args, cwd),
            Commands::Convert { args } => self.apply_transform_args(&args.transform),
            Commands::Name { prefix, .. } => {
                Self::update_option(&mut self.naming.prefix, prefix.as_ref());
            }
            Commands::Init { .. } | Commands::Layout { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs, cwd: &Path) {
        crate::logger::set_verbose(args.verbose);

        // CLI paths are relative to where the command runs, not the project root
        if let Some(input) = &args.input {
            self.build.input = normalize_path(&cwd.join(input));
        }
        if let Some(output) = &args.output {
            self.build.output = normalize_path(&cwd.join(output));
        }
        Self::update_option(&mut self.build.index, args.index.as_ref());
        self.build.clean |= args.clean;
        self.apply_transform_args(&args.transform);
    }

    fn apply_transform_args(&mut self, args: &TransformArgs) {
        Self::update_option(&mut self.build.typescript, args.typescript.as_ref());
        Self::update_option(&mut self.build.current_color, args.current_color.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        self.naming.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content. Panics on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(ProjectConfig::from_str("[build\ninput = \"icons\"").is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[build]\ninput = \"svg\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.build.input, PathBuf::from("svg"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_root_relative() {
        let config = ProjectConfig {
            root: PathBuf::from("/project"),
            ..ProjectConfig::default()
        };
        assert_eq!(
            config.root_relative("/project/components/Home.vue"),
            PathBuf::from("components/Home.vue")
        );
        assert_eq!(config.root_relative("/elsewhere/x"), PathBuf::from("/elsewhere/x"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config("[naming]\nprefix = \"lower\"");
        config.build.normalize(temp.path());

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_from_path_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[build]\nindex = false\n[extra]\nx = 1").unwrap();

        let config = ProjectConfig::from_path(&path).unwrap();
        assert!(!config.build.index);
    }

    #[test]
    fn test_from_path_missing() {
        let err = ProjectConfig::from_path(Path::new("/no/such/svgsfc.toml")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
