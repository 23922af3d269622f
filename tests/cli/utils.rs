use std::{
    io::Write as _,
    process::{Command, Output, Stdio},
};

/// A wrapper around the uafacts cli binary.
pub(super) struct UafactsCli;

impl UafactsCli {
    fn command() -> Command {
        escargot::CargoBuild::new()
            .package("uafacts-cli")
            .bin("uafacts")
            .target_dir("./target/")
            .run()
            .unwrap()
            .command()
    }

    fn output(args: &[&str], stdin: Option<&str>) -> Output {
        let mut child = Self::command()
            .env_remove("UAFACTS_IDENTITY")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .args(args)
            .spawn()
            .unwrap();

        let mut child_stdin = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).unwrap();
        }
        drop(child_stdin);

        child.wait_with_output().unwrap()
    }

    /// Run the cli and return its stdout, asserting it succeeded.
    pub(super) fn run(args: &[&str]) -> String {
        Self::run_with_stdin(args, None)
    }

    /// Run the cli with the given stdin and return its stdout, asserting it succeeded.
    pub(super) fn run_with_stdin(args: &[&str], stdin: Option<&str>) -> String {
        let output = Self::output(args, stdin);
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    /// Run the cli and return its stderr, asserting it failed.
    pub(super) fn run_failure(args: &[&str]) -> String {
        let output = Self::output(args, None);
        assert!(!output.status.success());
        String::from_utf8(output.stderr).unwrap()
    }
}
