use assert_cmd::Command;
use std::path::Path;

/// Prepare a `gtg` invocation rooted at the given directory
pub fn run_gtg_command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::cargo_bin("gtg").expect("gtg binary should build");
    command.current_dir(dir).args(args);
    command
}

/// Run `gtg` and capture stdout as a string
pub fn gtg_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_gtg_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout should be utf-8")
}
