use thiserror::Error;

/// Unified error type for transform-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Version format error: {0}")]
    Format(String),

    #[error("Command `{command}` failed with {}{}", describe_code(.code), describe_stderr(.stderr))]
    ExternalTool {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Required tool `{program}` was not found. {hint}")]
    MissingTool { program: String, hint: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in transform-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

impl ReleaseError {
    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        ReleaseError::Format(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Process exit code to report for this error.
    ///
    /// A failed external command hands its own exit code through so callers
    /// of this tool see the same status the collaborator reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseError::ExternalTool {
                code: Some(code), ..
            } if *code != 0 => *code,
            ReleaseError::MissingTool { .. } => crate::exit_codes::MISSING_TOOL,
            _ => crate::exit_codes::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("unknown project 'nope'");
        assert_eq!(err.to_string(), "Configuration error: unknown project 'nope'");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_external_tool_display_includes_stderr() {
        let err = ReleaseError::ExternalTool {
            command: "git fetch --tags --all".to_string(),
            code: Some(128),
            stderr: "fatal: could not read from remote\n".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Command `git fetch --tags --all` failed with exit code 128"));
        assert!(msg.ends_with("fatal: could not read from remote"));
    }

    #[test]
    fn test_external_tool_display_without_stderr() {
        let err = ReleaseError::ExternalTool {
            command: "rpk transform build".to_string(),
            code: None,
            stderr: "   ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command `rpk transform build` failed with no exit code (terminated by signal)"
        );
    }

    #[test]
    fn test_exit_code_propagates_child_status() {
        let err = ReleaseError::ExternalTool {
            command: "gh release create".to_string(),
            code: Some(4),
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_exit_code_falls_back_to_error() {
        let signalled = ReleaseError::ExternalTool {
            command: "rpk transform build".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(signalled.exit_code(), crate::exit_codes::ERROR);
        assert_eq!(
            ReleaseError::format("x").exit_code(),
            crate::exit_codes::ERROR
        );
        assert_eq!(
            ReleaseError::manifest("x").exit_code(),
            crate::exit_codes::ERROR
        );
    }

    #[test]
    fn test_missing_tool_has_distinct_exit_code() {
        let err = ReleaseError::MissingTool {
            program: "rpk".to_string(),
            hint: "Install it.".to_string(),
        };
        assert_eq!(err.exit_code(), crate::exit_codes::MISSING_TOOL);
        assert_ne!(err.exit_code(), crate::exit_codes::ERROR);
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::format("x"), "Version format error"),
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::manifest("x"), "Manifest error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
