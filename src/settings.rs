//! Layered settings.
//!
//! Sources are merged in increasing priority: built-in defaults, the user
//! config file, `./animal-dictionary.toml`, files passed with `--config`,
//! `ANIMAL_DICTIONARY__*` environment variables and finally CLI flags.

use std::env;
use std::path::PathBuf;

use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::app::DEFAULT_TITLE;
use crate::cli::CliArgs;
use crate::dictionary::Variant;

/// Errors raised while assembling settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Resolved program settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How names are added.
    pub variant: Variant,
    /// Heading shown above the search box.
    pub title: String,
    /// Names file; the builtin list is used when unset.
    pub source: Option<PathBuf>,
    /// Log output.
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            title: DEFAULT_TITLE.to_string(),
            source: None,
            logging: LoggingSettings::default(),
        }
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive.
    pub level: String,
    /// Log file; logging is off when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Settings {
    /// Loads settings from every source and applies the CLI overrides.
    pub fn load(cli: &CliArgs) -> Result<Self, SettingsError> {
        let mut settings: Settings = build_config(cli)?.try_deserialize()?;
        settings.apply_cli_overrides(cli);
        Ok(settings)
    }

    /// Replaces values with the ones given on the command line.
    pub fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(variant) = cli.variant {
            self.variant = variant.into();
        }
        if let Some(title) = &cli.title {
            self.title = title.clone();
        }
        if let Some(source) = &cli.source {
            self.source = Some(source.clone());
        }
        if let Some(file) = &cli.log_file {
            self.logging.file = Some(file.clone());
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
    }
}

fn build_config(cli: &CliArgs) -> Result<Config, SettingsError> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("ANIMAL_DICTIONARY")
            .separator("__")
            .try_parsing(true),
    );

    Ok(builder.build()?)
}

/// Default configuration file locations, lowest priority first.
pub fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Some(dirs) = ProjectDirs::from("", "", "animal-dictionary") {
        files.push(dirs.config_dir().join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join("animal-dictionary.toml"));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    fn isolated(files: &[&tempfile::NamedTempFile]) -> CliArgs {
        CliArgs {
            no_config: true,
            config: files.iter().map(|f| f.path().to_path_buf()).collect(),
            ..CliArgs::default()
        }
    }

    #[test]
    fn defaults_without_sources() {
        let settings = Settings::load(&isolated(&[])).expect("defaults load");
        assert_eq!(settings.variant, Variant::SplitPanel);
        assert_eq!(settings.title, DEFAULT_TITLE);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.file.is_none());
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let base = config_file("variant = \"inline-add\"\ntitle = \"Zoo\"\n");
        let overlay = config_file("title = \"Aquarium\"\n[logging]\nlevel = \"debug\"\n");

        let settings = Settings::load(&isolated(&[&base, &overlay])).expect("loads");
        assert_eq!(settings.variant, Variant::InlineAdd);
        assert_eq!(settings.title, "Aquarium");
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn cli_flags_win_over_files() {
        let file = config_file("variant = \"inline-add\"\nsource = \"names.txt\"\n");
        let mut cli = isolated(&[&file]);
        cli.variant = Some(crate::cli::VariantArg::SplitPanel);
        cli.log_file = Some(PathBuf::from("dict.log"));

        let settings = Settings::load(&cli).expect("loads");
        assert_eq!(settings.variant, Variant::SplitPanel);
        assert_eq!(settings.source, Some(PathBuf::from("names.txt")));
        assert_eq!(settings.logging.file, Some(PathBuf::from("dict.log")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let cli = CliArgs {
            no_config: true,
            config: vec![PathBuf::from("/definitely/not/here.toml")],
            ..CliArgs::default()
        };
        assert!(Settings::load(&cli).is_err());
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let file = config_file("variant = \"tabs\"\n");
        assert!(Settings::load(&isolated(&[&file])).is_err());
    }

    #[test]
    fn default_files_include_current_directory() {
        let files = default_config_files();
        assert!(files
            .iter()
            .any(|path| path.ends_with("animal-dictionary.toml")));
    }
}
