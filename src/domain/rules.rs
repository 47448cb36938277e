//! Pure scaffolding rules: root resolution, substitution, confirmation

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::ComponentName;

/// Resolve the project root from a working directory.
///
/// When `cwd` ends in the tooling subdirectory (e.g. `scripts`) the tool was
/// started from inside it, so the root is its parent. Otherwise `cwd` is the root.
pub fn resolve_root(cwd: &Path, tooling_dir: &str) -> PathBuf {
    if cwd.file_name() == Some(OsStr::new(tooling_dir)) {
        if let Some(parent) = cwd.parent() {
            return parent.to_path_buf();
        }
    }
    cwd.to_path_buf()
}

/// Replace every literal occurrence of `placeholder` with the component name.
pub fn render(template: &str, placeholder: &str, name: &ComponentName) -> String {
    template.replace(placeholder, name.as_str())
}

/// File name written for a template identifier: `component.tsx` -> `button.tsx`.
pub fn output_file_name(identifier: &str, placeholder: &str, name: &ComponentName) -> String {
    identifier.replace(placeholder, name.as_str())
}

/// Whether a confirmation response allows deleting an existing component.
///
/// Only lowercase `y` is accepted. The prompt advertises `y/N` and the intent
/// was probably to accept `Y` as well, but existing users rely on the stricter
/// check, so `Y`, `yes` and padded input all decline.
pub fn is_affirmative(response: &str) -> bool {
    response == "y"
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
