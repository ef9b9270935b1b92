//! Build step: runs the build CLI inside a project directory.

use crate::config::Config;
use crate::error::Result;
use crate::exec::{check_call, CommandRunner, Invocation};
use std::path::PathBuf;

/// Files a successful build leaves in the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub project: String,
    /// Compiled module, `<project>/<project>.wasm`
    pub wasm_file: PathBuf,
    /// Project manifest, `<project>/transform.yaml`
    pub manifest_file: PathBuf,
}

impl BuildArtifacts {
    /// Conventional artifact locations for `project`
    pub fn expected(config: &Config, project: &str) -> Self {
        let dir = config.project_dir(project);
        BuildArtifacts {
            project: project.to_string(),
            wasm_file: dir.join(format!("{}.wasm", project)),
            manifest_file: dir.join(&config.manifest_file),
        }
    }
}

/// Builds `project` with `rpk transform build`.
///
/// The returned paths are not checked: a zero exit status from the build
/// tool is taken as the guarantee that they exist.
pub fn build(runner: &dyn CommandRunner, config: &Config, project: &str) -> Result<BuildArtifacts> {
    check_call(
        runner,
        &Invocation::new(&config.tools.build, config.project_dir(project))
            .args(["transform", "build"]),
    )?;

    let artifacts = BuildArtifacts::expected(config, project);
    tracing::info!(project, wasm = %artifacts.wasm_file.display(), "build finished");
    Ok(artifacts)
}
