//! Preset handling and non-interactive defaults.
//! A preset file (esyt.json, esyt.yml or esyt.yaml) supplies values for
//! anything the command line left unset.

use crate::constants::{DEFAULT_PROJECT_NAME, PRESET_FILES};
use crate::error::{Error, Result};
use crate::flags::{Editor, Flags, Framework, Language};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Values read from a preset file. Keys follow the configuration record.
///
/// Choice fields stay plain strings here; a value esyt does not know is
/// carried into [`Flags`] as `Unsupported` and rejected by validation.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Preset {
    pub framework: Option<String>,
    pub language: Option<String>,
    pub project_name: Option<String>,
    #[serde(default)]
    pub packages: Vec<String>,
    pub git_init: Option<bool>,
    pub install_deps: Option<bool>,
    #[serde(rename = "selectedIDE")]
    pub selected_ide: Option<String>,
    pub run_dev_server: Option<bool>,
}

impl Preset {
    /// Fills the absent fields of `flags`.
    ///
    /// Preset packages are used only when the command line selected none.
    pub fn apply_to(&self, flags: &mut Flags) {
        if flags.framework.is_none() {
            flags.framework = self.framework.as_deref().map(Framework::from);
        }
        if flags.language.is_none() {
            flags.language = self.language.as_deref().map(Language::from);
        }
        if flags.project_name.is_none() {
            flags.project_name = self.project_name.clone();
        }
        if flags.npm_packages().is_empty() {
            for package in &self.packages {
                flags.push_package(package);
            }
        }
        if flags.git_init.is_none() {
            flags.git_init = self.git_init;
        }
        if flags.install_deps.is_none() {
            flags.install_deps = self.install_deps;
        }
        if flags.selected_ide.is_none() {
            flags.selected_ide = self.selected_ide.as_deref().map(Editor::from);
        }
        if flags.run_dev_server.is_none() {
            flags.run_dev_server = self.run_dev_server;
        }
    }
}

/// Returns the first preset file present in `dir`.
pub fn find_preset<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    PRESET_FILES.iter().map(|file| dir.as_ref().join(file)).find(|path| path.is_file())
}

/// Parses preset content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither, or has unknown keys
pub fn parse_preset(content: &str) -> Result<Preset> {
    if content.trim().is_empty() {
        return Ok(Preset::default());
    }
    match serde_json::from_str(content) {
        Ok(preset) => Ok(preset),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid preset format: {e}"))),
    }
}

/// Loads the preset of `dir`, if there is one.
///
/// # Returns
/// * `Result<Option<Preset>>` - `None` when no preset file exists
pub fn load_preset<P: AsRef<Path>>(dir: P) -> Result<Option<Preset>> {
    let Some(path) = find_preset(&dir) else {
        debug!("No preset file in {}", dir.as_ref().display());
        return Ok(None);
    };

    debug!("Loading preset from {}", path.display());
    let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
    parse_preset(&content).map(Some).map_err(|e| match e {
        Error::ConfigError(msg) => Error::ConfigError(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Fills everything still unset with the `--yes` defaults.
///
/// Explicit values, negations included, are kept.
pub fn apply_defaults(flags: &mut Flags) {
    flags.framework.get_or_insert(Framework::Vite);
    flags.language.get_or_insert(Language::JavaScript);
    flags.project_name.get_or_insert_with(|| DEFAULT_PROJECT_NAME.to_string());
    flags.git_init.get_or_insert(true);
    flags.install_deps.get_or_insert(true);
    flags.selected_ide.get_or_insert(Editor::None);
    flags.run_dev_server.get_or_insert(true);
}
