//! Integration tests for Settings layered loading.
//!
//! Uses explicit global config paths and temp project roots, so results do not
//! depend on the machine's XDG config directory.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

use create_component::application::ApplicationError;
use create_component::config::{project_config_path, Settings};

#[test]
fn given_no_config_files_when_load_files_then_defaults() {
    // Arrange
    let root = TempDir::new().unwrap();

    // Act
    let settings = Settings::load_files(None, Some(root.path())).expect("load settings");

    // Assert
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_project_config_when_load_files_then_overrides_defaults() {
    // Arrange
    let root = TempDir::new().unwrap();
    fs::write(
        project_config_path(root.path()),
        r#"
components_dir = "app/ui"
placeholder = "Widget"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_files(None, Some(root.path())).expect("load settings");

    // Assert
    assert_eq!(settings.components_dir, PathBuf::from("app/ui"));
    assert_eq!(settings.placeholder, "Widget");
    assert_eq!(settings.templates_dir, PathBuf::from("scripts/templates"));
}

#[test]
fn given_global_and_project_config_when_load_files_then_project_wins() {
    // Arrange
    let global_dir = TempDir::new().unwrap();
    let global_path = global_dir.path().join("create-component.toml");
    fs::write(
        &global_path,
        r#"
tooling_dir = "tools"
templates = ["index.ts", "component.tsx"]
placeholder = "Thing"
"#,
    )
    .unwrap();
    let root = TempDir::new().unwrap();
    fs::write(project_config_path(root.path()), "placeholder = \"Widget\"\n").unwrap();

    // Act
    let settings =
        Settings::load_files(Some(&global_path), Some(root.path())).expect("load settings");

    // Assert
    assert_eq!(settings.tooling_dir, "tools");
    assert_eq!(settings.templates, vec!["index.ts", "component.tsx"]);
    assert_eq!(settings.placeholder, "Widget");
}

#[test]
fn given_no_root_when_load_files_then_project_config_ignored() {
    // Arrange
    let global_dir = TempDir::new().unwrap();
    let global_path = global_dir.path().join("create-component.toml");
    fs::write(&global_path, "tooling_dir = \"tools\"\n").unwrap();

    // Act
    let settings = Settings::load_files(Some(&global_path), None).expect("load settings");

    // Assert
    assert_eq!(settings.tooling_dir, "tools");
    assert_eq!(settings.placeholder, "component");
}

#[test]
fn given_invalid_toml_when_load_files_then_config_error_names_file() {
    // Arrange
    let root = TempDir::new().unwrap();
    let path = project_config_path(root.path());
    fs::write(&path, "placeholder = [").unwrap();

    // Act
    let err = Settings::load_files(None, Some(root.path())).unwrap_err();

    // Assert
    match err {
        ApplicationError::Config { message } => {
            assert!(message.contains(".create-component.toml"), "{message}");
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn given_unknown_key_when_load_files_then_config_error() {
    // Arrange
    let root = TempDir::new().unwrap();
    fs::write(project_config_path(root.path()), "placehodler = \"x\"\n").unwrap();

    // Act
    let result = Settings::load_files(None, Some(root.path()));

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_empty_placeholder_when_finalize_then_rejected() {
    // Arrange
    let root = TempDir::new().unwrap();
    fs::write(project_config_path(root.path()), "placeholder = \"\"\n").unwrap();
    let settings = Settings::load_files(None, Some(root.path())).expect("load settings");

    // Act
    let result = settings.finalize();

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_tilde_templates_dir_when_finalize_then_expanded() {
    // Arrange
    let root = TempDir::new().unwrap();
    fs::write(
        project_config_path(root.path()),
        "templates_dir = \"~/templates\"\n",
    )
    .unwrap();
    let settings = Settings::load_files(None, Some(root.path())).expect("load settings");

    // Act
    let settings = settings.finalize().expect("finalize");

    // Assert
    assert!(!settings.templates_dir.to_string_lossy().starts_with('~'));
    assert!(settings.templates_dir.ends_with("templates"));
}

// ============================================================
// CREATE_COMPONENT_* environment overrides
// ============================================================

/// Serializes tests that touch the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_env_placeholder_and_project_config_when_load_from_then_env_wins() {
    // Arrange
    let root = TempDir::new().unwrap();
    fs::write(project_config_path(root.path()), "placeholder = \"Widget\"\n").unwrap();
    let env = env_map(&[("CREATE_COMPONENT_PLACEHOLDER", "Thing")]);

    // Act
    let settings = Settings::load_from(None, Some(root.path()), Some(env)).expect("load");

    // Assert
    assert_eq!(settings.placeholder, "Thing");
}

#[test]
fn given_env_templates_list_when_load_from_then_split_on_commas() {
    // Arrange
    let env = env_map(&[("CREATE_COMPONENT_TEMPLATES", "a.ts,component.tsx")]);

    // Act
    let settings = Settings::load_from(None, None, Some(env)).expect("load");

    // Assert
    assert_eq!(settings.templates, vec!["a.ts", "component.tsx"]);
}

#[test]
fn given_numeric_looking_env_values_when_load_from_then_kept_verbatim() {
    // Arrange
    let env = env_map(&[
        ("CREATE_COMPONENT_PLACEHOLDER", "007"),
        ("CREATE_COMPONENT_TOOLING_DIR", "0123"),
        ("CREATE_COMPONENT_TEMPLATES_DIR", "1.50"),
        ("CREATE_COMPONENT_COMPONENTS_DIR", "true"),
    ]);

    // Act
    let settings = Settings::load_from(None, None, Some(env)).expect("load");

    // Assert
    assert_eq!(settings.placeholder, "007");
    assert_eq!(settings.tooling_dir, "0123");
    assert_eq!(settings.templates_dir, PathBuf::from("1.50"));
    assert_eq!(settings.components_dir, PathBuf::from("true"));
}

#[test]
fn given_no_env_overrides_when_load_from_then_files_untouched() {
    // Arrange
    let root = TempDir::new().unwrap();
    fs::write(project_config_path(root.path()), "placeholder = \"Widget\"\n").unwrap();

    // Act
    let settings =
        Settings::load_from(None, Some(root.path()), Some(HashMap::new())).expect("load");

    // Assert
    assert_eq!(settings.placeholder, "Widget");
    assert_eq!(settings.templates.len(), 3);
}

#[test]
fn given_process_env_overrides_when_load_then_applied_verbatim() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    // Arrange
    let root = TempDir::new().unwrap();
    fs::write(project_config_path(root.path()), "placeholder = \"Widget\"\n").unwrap();
    env::set_var("CREATE_COMPONENT_PLACEHOLDER", "007");
    env::set_var("CREATE_COMPONENT_TEMPLATES", "index.ts,component.tsx");

    // Act
    let result = Settings::load_from(None, Some(root.path()), None);
    env::remove_var("CREATE_COMPONENT_PLACEHOLDER");
    env::remove_var("CREATE_COMPONENT_TEMPLATES");

    // Assert
    let settings = result.expect("load");
    assert_eq!(settings.placeholder, "007");
    assert_eq!(settings.templates, vec!["index.ts", "component.tsx"]);
}
