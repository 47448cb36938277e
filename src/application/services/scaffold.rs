//! Component scaffolding service
//!
//! Copies the project's templates into a new component directory, replacing
//! the placeholder token with the component name.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{
    is_affirmative, render, ComponentName, Layout, ScaffoldEvent, ScaffoldOutcome, ScaffoldPlan,
    ScaffoldReport,
};
use crate::infrastructure::traits::{FileSystem, Prompter};

/// Question shown when the component directory already exists.
pub const OVERWRITE_PROMPT: &str =
    "WARNING: Already exists, are you sure you wish to remove this? y/N: ";

/// Scaffolding service.
pub struct ScaffoldService {
    fs: Arc<dyn FileSystem>,
    prompter: Arc<dyn Prompter>,
    layout: Layout,
}

impl ScaffoldService {
    /// Create a new scaffolding service.
    pub fn new(fs: Arc<dyn FileSystem>, prompter: Arc<dyn Prompter>, layout: Layout) -> Self {
        Self {
            fs,
            prompter,
            layout,
        }
    }

    /// Layout this service scaffolds with.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Plan the paths for `name` under `root` without touching the filesystem.
    pub fn plan(&self, root: &Path, name: &ComponentName) -> ScaffoldPlan {
        ScaffoldPlan::new(root, name, &self.layout)
    }

    /// Create the component `name` under `root`.
    ///
    /// If the target directory exists the user is asked once; anything but `y`
    /// returns [`ScaffoldOutcome::Declined`] without changes. Templates are read
    /// one at a time, so a missing template stops the run with the earlier
    /// files already written (see [`ApplicationError::MissingTemplate`]).
    ///
    /// `progress` receives an event when the run starts, before an existing
    /// directory is removed, after each file, and at completion.
    #[instrument(skip(self, progress))]
    pub fn create(
        &self,
        root: &Path,
        name: &ComponentName,
        progress: &mut dyn FnMut(ScaffoldEvent),
    ) -> ApplicationResult<ScaffoldOutcome> {
        progress(ScaffoldEvent::Started {
            name: name.to_string(),
        });

        let plan = self.plan(root, name);
        debug!("target_dir: {}", plan.target_dir.display());

        let replaced = self.fs.is_dir(&plan.target_dir);
        if replaced {
            let response = self
                .prompter
                .ask(OVERWRITE_PROMPT)
                .with_path_context("read confirmation", &plan.target_dir)?;
            debug!("confirmation response: {:?}", response);

            if !is_affirmative(&response) {
                debug!("overwrite declined, leaving {} untouched", plan.target_dir.display());
                return Ok(ScaffoldOutcome::Declined {
                    target_dir: plan.target_dir,
                });
            }

            progress(ScaffoldEvent::Replacing {
                target_dir: plan.target_dir.clone(),
            });
            self.fs
                .remove_dir_all(&plan.target_dir)
                .with_path_context("remove existing component", &plan.target_dir)?;
        }

        self.fs
            .create_dir(&plan.target_dir)
            .with_path_context("create component directory", &plan.target_dir)?;

        let mut written = Vec::with_capacity(plan.files.len());
        for file in &plan.files {
            // No rollback: files from earlier iterations remain on failure.
            if !self.fs.is_file(&file.template_path) {
                return Err(ApplicationError::MissingTemplate {
                    path: file.template_path.clone(),
                    written,
                });
            }

            let template = self
                .fs
                .read_to_string(&file.template_path)
                .with_path_context("read template", &file.template_path)?;
            let content = render(&template, &self.layout.placeholder, name);

            self.fs
                .write(&file.output_path, &content)
                .with_path_context("write file", &file.output_path)?;
            debug!("{} -> {}", file.identifier, file.output_path.display());

            progress(ScaffoldEvent::FileCreated {
                path: file.output_path.clone(),
            });
            written.push(file.output_path.clone());
        }

        progress(ScaffoldEvent::Finished {
            target_dir: plan.target_dir.clone(),
        });

        Ok(ScaffoldOutcome::Created(ScaffoldReport {
            target_dir: plan.target_dir,
            replaced,
            files: written,
        }))
    }
}
