//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/create-component/create-component.toml`
//! 3. Project config: `<root>/.create-component.toml`
//! 4. Environment variables: `CREATE_COMPONENT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, Layout};

const APP_NAME: &str = "create-component";
const ENV_PREFIX: &str = "CREATE_COMPONENT";

/// Unified configuration for create-component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Tooling subdirectory the command may be started from (default: scripts)
    pub tooling_dir: String,
    /// Template directory relative to the project root (default: scripts/templates)
    pub templates_dir: PathBuf,
    /// Components directory relative to the project root (default: src/components)
    pub components_dir: PathBuf,
    /// Token replaced by the component name (default: component)
    pub placeholder: String,
    /// Template files, processed in order
    pub templates: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let layout = Layout::default();
        Self {
            tooling_dir: layout.tooling_dir,
            templates_dir: layout.templates_dir,
            components_dir: layout.components_dir,
            placeholder: layout.placeholder,
            templates: layout.templates,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub tooling_dir: Option<String>,
    pub templates_dir: Option<PathBuf>,
    pub components_dir: Option<PathBuf>,
    pub placeholder: Option<String>,
    pub templates: Option<Vec<String>>,
}

/// Get the XDG config directory for create-component.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

/// Get the path to the project config file under a resolved root.
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(format!(".{APP_NAME}.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Layout handed to the scaffolding service.
    pub fn layout(&self) -> Layout {
        Layout {
            tooling_dir: self.tooling_dir.clone(),
            templates_dir: self.templates_dir.clone(),
            components_dir: self.components_dir.clone(),
            placeholder: self.placeholder.clone(),
            templates: self.templates.clone(),
        }
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            tooling_dir: overlay
                .tooling_dir
                .clone()
                .unwrap_or_else(|| self.tooling_dir.clone()),
            templates_dir: overlay
                .templates_dir
                .clone()
                .unwrap_or_else(|| self.templates_dir.clone()),
            components_dir: overlay
                .components_dir
                .clone()
                .unwrap_or_else(|| self.components_dir.clone()),
            placeholder: overlay
                .placeholder
                .clone()
                .unwrap_or_else(|| self.placeholder.clone()),
            templates: overlay
                .templates
                .clone()
                .unwrap_or_else(|| self.templates.clone()),
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.templates_dir = PathBuf::from(expand_env_vars(&self.templates_dir.to_string_lossy()));
        self.components_dir =
            PathBuf::from(expand_env_vars(&self.components_dir.to_string_lossy()));
    }

    /// Reject settings that would make substitution or the run meaningless.
    fn validate(&self) -> Result<(), ApplicationError> {
        if self.placeholder.is_empty() {
            return Err(ApplicationError::Config {
                message: "placeholder must not be empty".into(),
            });
        }
        if self.templates.is_empty() {
            return Err(ApplicationError::Config {
                message: "at least one template is required".into(),
            });
        }
        if self.tooling_dir.is_empty() {
            return Err(ApplicationError::Config {
                message: "tooling_dir must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `root` - Optional project root for the project config file. Pass
    ///   `None` to get the settings used for resolving the root itself.
    pub fn load(root: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), root, None)
    }

    /// Load settings from explicit sources.
    ///
    /// `env` replaces the process environment as the source of
    /// `CREATE_COMPONENT_*` overrides when given.
    pub fn load_from(
        global: Option<&Path>,
        root: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let settings = Self::load_files(global, root)?;

        Self::apply_env_overrides(settings, env)?.finalize()
    }

    /// Merge defaults, an optional global file and an optional project root's
    /// config file. No environment overrides, no expansion.
    pub fn load_files(global: Option<&Path>, root: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            current = current.merge_with(&load_raw_settings(global_path)?);
        }

        if let Some(root) = root {
            let local_path = project_config_path(root);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Ok(current)
    }

    /// Apply CREATE_COMPONENT_* environment variables as explicit overrides.
    ///
    /// Scalars are read verbatim: `007` stays `007`. Only `templates` goes
    /// through the list parser, which needs `try_parsing` to split on commas.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let environment = || {
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env.clone())
        };

        let scalars = Config::builder()
            .add_source(environment())
            .build()
            .map_err(config_err)?;

        if let Ok(val) = scalars.get_string("tooling_dir") {
            settings.tooling_dir = val;
        }
        if let Ok(val) = scalars.get_string("templates_dir") {
            settings.templates_dir = PathBuf::from(val);
        }
        if let Ok(val) = scalars.get_string("components_dir") {
            settings.components_dir = PathBuf::from(val);
        }
        if let Ok(val) = scalars.get_string("placeholder") {
            settings.placeholder = val;
        }

        let lists = Config::builder()
            .add_source(
                environment()
                    .list_separator(",")
                    .with_list_parse_key("templates")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = lists.get::<Vec<String>>("templates") {
            settings.templates = val;
        }

        Ok(settings)
    }

    /// Finish settings built by [`Settings::load_files`]: expand paths and validate.
    pub fn finalize(mut self) -> Result<Self, ApplicationError> {
        self.expand_paths();
        self.validate()?;
        Ok(self)
    }
}
