//! Release tag discovery through the version-control CLI.

use crate::config::Config;
use crate::domain::{ReleaseTag, Version};
use crate::error::Result;
use crate::exec::{check_call, check_output, CommandRunner, Invocation};

/// Synchronizes tags from every remote (`git fetch --tags --all`).
pub fn fetch_tags(runner: &dyn CommandRunner, config: &Config) -> Result<()> {
    check_call(
        runner,
        &Invocation::new(&config.tools.git, &config.root).args(["fetch", "--tags", "--all"]),
    )?;
    Ok(())
}

/// Lists every tag name in the repository (`git tag`).
pub fn list_tags(runner: &dyn CommandRunner, config: &Config) -> Result<Vec<String>> {
    let stdout = check_output(runner, &Invocation::new(&config.tools.git, &config.root).arg("tag"))?;
    Ok(stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Versions of `project` found in `tags`.
///
/// Tags without the `<project>-` prefix are skipped. A prefixed tag whose
/// remainder is not a version fails the whole call.
pub fn versions_from_tags<S: AsRef<str>>(project: &str, tags: &[S]) -> Result<Vec<Version>> {
    let mut versions = Vec::new();
    for tag in tags {
        if let Some(release) = ReleaseTag::parse_for_project(project, tag.as_ref())? {
            versions.push(release.version);
        }
    }
    Ok(versions)
}

/// Fetches remote tags, then returns every released version of `project`.
pub fn list_versions(
    runner: &dyn CommandRunner,
    config: &Config,
    project: &str,
) -> Result<Vec<Version>> {
    fetch_tags(runner, config)?;
    let tags = list_tags(runner, config)?;
    let versions = versions_from_tags(project, &tags)?;
    tracing::debug!(project, count = versions.len(), "found released versions");
    Ok(versions)
}

/// Highest released version of `project`, or [Version::ZERO] if none exist.
pub fn latest_version(
    runner: &dyn CommandRunner,
    config: &Config,
    project: &str,
) -> Result<Version> {
    let latest = list_versions(runner, config, project)?.into_iter().max();
    if latest.is_none() {
        tracing::info!(project, "no release tags found, starting from {}", Version::ZERO);
    }
    Ok(latest.unwrap_or(Version::ZERO))
}
