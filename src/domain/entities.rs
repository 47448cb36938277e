//! Domain entities: core data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::rules::output_file_name;
use crate::domain::DomainError;

/// Identifier of the component to scaffold.
///
/// Only emptiness is rejected. The name is used verbatim as a directory name,
/// a file stem, and the substitution text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Project conventions that drive a scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Name of the tooling subdirectory the tool may be invoked from
    pub tooling_dir: String,
    /// Template directory, relative to the root (or absolute)
    pub templates_dir: PathBuf,
    /// Directory holding one subdirectory per component, relative to the root
    pub components_dir: PathBuf,
    /// Literal token replaced by the component name
    pub placeholder: String,
    /// Template identifiers, processed in order
    pub templates: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            tooling_dir: "scripts".into(),
            templates_dir: PathBuf::from("scripts/templates"),
            components_dir: PathBuf::from("src/components"),
            placeholder: "component".into(),
            templates: vec![
                "index.ts".into(),
                "component.tsx".into(),
                "component.scss".into(),
            ],
        }
    }
}

/// One template-to-output mapping inside a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Template identifier, e.g. `component.tsx`
    pub identifier: String,
    /// Absolute location of the template
    pub template_path: PathBuf,
    /// Destination inside the target directory
    pub output_path: PathBuf,
}

/// Every path a run touches, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub root: PathBuf,
    pub target_dir: PathBuf,
    pub files: Vec<PlannedFile>,
}

impl ScaffoldPlan {
    /// Build the plan for `name` under an already resolved root.
    pub fn new(root: &Path, name: &ComponentName, layout: &Layout) -> Self {
        let target_dir = root.join(&layout.components_dir).join(name.as_str());
        let templates_dir = root.join(&layout.templates_dir);

        let files = layout
            .templates
            .iter()
            .map(|identifier| PlannedFile {
                identifier: identifier.clone(),
                template_path: templates_dir.join(identifier),
                output_path: target_dir.join(output_file_name(
                    identifier,
                    &layout.placeholder,
                    name,
                )),
            })
            .collect();

        Self {
            root: root.to_path_buf(),
            target_dir,
            files,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub target_dir: PathBuf,
    /// Whether an existing directory was removed first
    pub replaced: bool,
    /// Written files, in template order
    pub files: Vec<PathBuf>,
}

/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created(ScaffoldReport),
    /// Target existed and the overwrite was not confirmed; nothing changed.
    Declined { target_dir: PathBuf },
}

/// Progress notification emitted while a run executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    Started { name: String },
    Replacing { target_dir: PathBuf },
    FileCreated { path: PathBuf },
    Finished { target_dir: PathBuf },
}
