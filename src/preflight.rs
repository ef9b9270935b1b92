//! Startup check that the external tools are installed.

use crate::config::ToolsConfig;
use crate::error::{ReleaseError, Result};

/// Installation hint shown when `program` cannot be found
pub fn install_hint(program: &str) -> String {
    match program {
        "git" => "Please install git from https://git-scm.com/downloads".to_string(),
        "rpk" => {
            "Please install rpk via https://docs.redpanda.com/current/get-started/rpk-install/"
                .to_string()
        }
        "gh" => "Please install the GitHub CLI from https://cli.github.com/".to_string(),
        other => format!("Please install `{}` and make sure it is on PATH", other),
    }
}

/// Error for a tool that is not installed
pub fn missing_tool(program: &str) -> ReleaseError {
    ReleaseError::MissingTool {
        program: program.to_string(),
        hint: install_hint(program),
    }
}

/// Verifies every configured tool resolves on `PATH`.
///
/// Fails on the first tool that is missing, before anything is run.
pub fn check_tools(tools: &ToolsConfig) -> Result<()> {
    for program in tools.all() {
        match which::which(program) {
            Ok(path) => tracing::debug!(program, path = %path.display(), "found tool"),
            Err(_) => return Err(missing_tool(program)),
        }
    }
    Ok(())
}
