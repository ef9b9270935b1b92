use crate::error::Result;
use crate::exec::{CommandOutput, CommandRunner, Invocation};
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
struct Response {
    program: String,
    args_prefix: Vec<OsString>,
    output: CommandOutput,
}

/// Mock runner for testing without spawning processes
///
/// Commands without a scripted response succeed with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Mutex<Vec<Response>>,
    invocations: Mutex<Vec<Invocation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockRunner {
    /// Create a new mock runner with no scripted responses
    pub fn new() -> Self {
        MockRunner::default()
    }

    /// Answer every call of `program` with `output`
    pub fn respond(&self, program: impl Into<String>, output: CommandOutput) {
        self.respond_to(program, &[], output);
    }

    /// Answer calls of `program` whose arguments start with `args_prefix`.
    ///
    /// When several responses match, the one with the longest prefix wins.
    pub fn respond_to(&self, program: impl Into<String>, args_prefix: &[&str], output: CommandOutput) {
        lock(&self.responses).push(Response {
            program: program.into(),
            args_prefix: args_prefix.iter().map(OsString::from).collect(),
            output,
        });
    }

    /// Every invocation seen so far, in call order
    pub fn invocations(&self) -> Vec<Invocation> {
        lock(&self.invocations).clone()
    }

    /// Command lines of every invocation seen so far
    pub fn command_lines(&self) -> Vec<String> {
        lock(&self.invocations)
            .iter()
            .map(Invocation::command_line)
            .collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        lock(&self.invocations).push(invocation.clone());

        let output = lock(&self.responses)
            .iter()
            .filter(|r| r.program == invocation.program && invocation.args.starts_with(&r.args_prefix))
            .max_by_key(|r| r.args_prefix.len())
            .map(|r| r.output.clone())
            .unwrap_or_else(|| CommandOutput::success(""));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_default_success() {
        let runner = MockRunner::new();
        let out = runner.run(&Invocation::new("rpk", "/tmp")).unwrap();
        assert!(out.is_success());
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn test_mock_runner_records_invocations() {
        let runner = MockRunner::new();
        runner.run(&Invocation::new("git", "/a").arg("tag")).unwrap();
        runner.run(&Invocation::new("rpk", "/a/b").args(["transform", "build"])).unwrap();

        assert_eq!(runner.command_lines(), vec!["git tag", "rpk transform build"]);
        assert_eq!(runner.invocations()[1].cwd, std::path::PathBuf::from("/a/b"));
    }

    #[test]
    fn test_mock_runner_longest_prefix_wins() {
        let runner = MockRunner::new();
        runner.respond("git", CommandOutput::success("generic"));
        runner.respond_to("git", &["tag"], CommandOutput::success("tags"));

        let tag = runner.run(&Invocation::new("git", "/").arg("tag")).unwrap();
        let fetch = runner.run(&Invocation::new("git", "/").arg("fetch")).unwrap();
        assert_eq!(tag.stdout, "tags");
        assert_eq!(fetch.stdout, "generic");
    }

    #[test]
    fn test_mock_runner_other_programs_unaffected() {
        let runner = MockRunner::new();
        runner.respond("gh", CommandOutput::failure(1, "boom"));
        assert!(runner.run(&Invocation::new("git", "/")).unwrap().is_success());
        assert!(!runner.run(&Invocation::new("gh", "/")).unwrap().is_success());
    }
}
