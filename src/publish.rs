//! Publish step: creates the hosted release with artifacts and notes.

use crate::build::BuildArtifacts;
use crate::config::Config;
use crate::domain::{ReleaseTag, Version};
use crate::error::Result;
use crate::exec::{check_call, CommandRunner, Invocation};
use crate::manifest::Manifest;
use crate::notes::{release_title, render_notes, DeployCommand};

/// What was sent to the release host
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedRelease {
    pub tag: String,
    pub title: String,
    pub notes: String,
}

/// Creates the release `<project>-<version>` with `gh release create`.
///
/// Reads the manifest to render the notes, then attaches the manifest and
/// the wasm module. Nothing is rolled back if the release CLI fails.
pub fn make_release(
    runner: &dyn CommandRunner,
    config: &Config,
    version: Version,
    artifacts: &BuildArtifacts,
) -> Result<PublishedRelease> {
    let manifest = Manifest::load(&artifacts.manifest_file, &config.required_marker)?;
    let required_env = manifest.required_env();

    let notes = render_notes(
        &manifest.description,
        &DeployCommand {
            tool: &config.tools.build,
            scope: &config.deploy_scope,
            project: &artifacts.project,
            version,
            required_env: &required_env,
        },
    );
    let tag = ReleaseTag::new(artifacts.project.as_str(), version).name();
    let title = release_title(&artifacts.project, version);

    check_call(
        runner,
        &Invocation::new(&config.tools.release, &config.root)
            .args(["release", "create"])
            .arg(tag.as_str())
            .arg(&artifacts.manifest_file)
            .arg(&artifacts.wasm_file)
            .arg("--notes")
            .arg(notes.as_str())
            .arg("--title")
            .arg(title.as_str()),
    )?;

    tracing::info!(%tag, %title, "release created");
    Ok(PublishedRelease { tag, title, notes })
}
