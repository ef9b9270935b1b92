//! Release notes and title rendering.
//!
//! The notes layout is scraped by downstream consumers, so it is reproduced
//! byte for byte: a leading newline, the description, a fenced deploy
//! command, and a closing fence followed by a newline and four spaces.

use crate::domain::Version;

/// Separator between continued lines of the deploy command
const CONTINUATION: &str = " \\\n    ";

/// Inputs for the deploy instructions embedded in the notes
#[derive(Debug, Clone, PartialEq)]
pub struct DeployCommand<'a> {
    /// Deploy CLI program name
    pub tool: &'a str,
    /// Package scope, as in `@<scope>/<project>`
    pub scope: &'a str,
    pub project: &'a str,
    pub version: Version,
    /// Env variables the deployer must supply
    pub required_env: &'a [&'a str],
}

impl DeployCommand<'_> {
    /// Render the multi-line deploy command
    pub fn render(&self) -> String {
        let mut cmd = format!(
            "{} transform deploy @{}/{}@{}",
            self.tool, self.scope, self.project, self.version
        );
        for flag in ["--name [NAME]", "--input-topic [TOPIC]", "--output-topic [TOPIC]"] {
            cmd.push_str(CONTINUATION);
            cmd.push_str(flag);
        }
        for name in self.required_env {
            cmd.push_str(CONTINUATION);
            cmd.push_str(&format!("--env-var='{}=[VALUE]'", name));
        }
        cmd
    }
}

/// Render the full release notes body
pub fn render_notes(description: &str, deploy: &DeployCommand<'_>) -> String {
    format!(
        "\n{}\n\n```\n# Deploy this transform using:\n{}\n```\n    ",
        description,
        deploy.render()
    )
}

/// Release title, e.g. "Regex v1.4.0"
pub fn release_title(project: &str, version: Version) -> String {
    format!("{} {}", title_case(project), version)
}

/// Capitalise the first letter of every alphabetic run and lower-case the rest.
///
/// "avro-to-json" becomes "Avro-To-Json", "jq2" becomes "Jq2".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
