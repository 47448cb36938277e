//! Command execution

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{resolve_root, ComponentName, ScaffoldEvent, ScaffoldOutcome};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the CLI invocation.
pub fn execute(cli: &Cli) -> CliResult<()> {
    let name =
        ComponentName::new(cli.name.as_str()).map_err(|e| CliError::InvalidArgs(e.to_string()))?;
    let cwd = working_dir(cli.project_dir.as_deref())?;

    // The project config lives under the root, so the root is resolved with
    // global and environment settings only.
    let bootstrap = Settings::load(None)?;
    let root = resolve_root(&cwd, &bootstrap.tooling_dir);
    debug!("cwd: {}, root: {}", cwd.display(), root.display());

    let settings = Settings::load(Some(&root))?;
    let container = ServiceContainer::new(settings);
    create_component(&container, &root, &name)
}

fn working_dir(project_dir: Option<&Path>) -> CliResult<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("determine working directory", e).into()),
    }
}

#[instrument(skip(container))]
fn create_component(container: &ServiceContainer, root: &Path, name: &ComponentName) -> CliResult<()> {
    let service = container.scaffold_service();

    match service.create(root, name, &mut |event| report(&event))? {
        ScaffoldOutcome::Created(summary) => {
            debug!(
                "created {} files in {} (replaced: {})",
                summary.files.len(),
                summary.target_dir.display(),
                summary.replaced
            );
        }
        ScaffoldOutcome::Declined { target_dir } => {
            debug!("kept existing {}", target_dir.display());
        }
    }
    Ok(())
}

fn report(event: &ScaffoldEvent) {
    match event {
        ScaffoldEvent::Started { name } => {
            output::header(&format!("Creating component {}", name));
        }
        ScaffoldEvent::Replacing { target_dir } => {
            output::warning(&format!("removing {}", target_dir.display()));
        }
        ScaffoldEvent::FileCreated { path } => {
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            output::success_detail(&format!("Created {}", file_name));
        }
        ScaffoldEvent::Finished { .. } => output::success("Done!"),
    }
}
