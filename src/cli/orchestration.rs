//! Main release workflow orchestration
//!
//! Runs the whole release as a straight line of steps, each one blocking
//! until its external command finishes:
//! 1. Fetch and list tags, pick the highest version of the project
//! 2. Bump it
//! 3. Build the project
//! 4. Publish the release
//!
//! The first failing step aborts the run. Steps that already ran are not
//! undone.

use crate::build::build;
use crate::config::Config;
use crate::domain::{Version, VersionBump};
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::git::latest_version;
use crate::publish::make_release;
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI arguments without depending on clap, so the workflow
/// can be driven programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Project directory name
    pub project: String,

    /// Version component to increment
    pub bump: VersionBump,
}

/// Result of a successful release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Highest version released before this run
    pub previous: Version,

    /// Version that was released
    pub version: Version,

    /// Tag the release was created under
    pub tag: String,

    /// Title of the hosted release
    pub title: String,
}

/// Main release workflow
///
/// # Arguments
///
/// * `request` - Project and bump kind
/// * `config` - Repository root and tool names
/// * `runner` - Executes the external commands
pub fn run_release(
    request: &ReleaseRequest,
    config: &Config,
    runner: &dyn CommandRunner,
) -> Result<ReleaseOutcome> {
    ui::display_status(&format!(
        "Fetching release tags for '{}'...",
        request.project
    ));
    let previous = latest_version(runner, config, &request.project)?;
    let version = previous.bump(request.bump)?;
    tracing::info!(
        project = %request.project,
        %previous,
        %version,
        bump = %request.bump,
        "computed next version"
    );
    ui::display_version_change(&request.project, previous, version);

    ui::display_status(&format!("Building '{}'...", request.project));
    let artifacts = build(runner, config, &request.project)?;
    ui::display_success(&format!("Built {}", artifacts.wasm_file.display()));

    ui::display_status("Creating release...");
    let release = make_release(runner, config, version, &artifacts)?;
    ui::display_success(&format!("Created release {} ({})", release.tag, release.title));

    Ok(ReleaseOutcome {
        previous,
        version,
        tag: release.tag,
        title: release.title,
    })
}
