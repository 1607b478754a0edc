use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `bit-graph` with its working directory set to `dir`
pub fn run_bit_graph(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-graph").expect("Failed to find bit-graph binary");
    cmd.current_dir(dir).env_remove("RUST_LOG").args(args);
    cmd
}

pub fn read_graph(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("graph.dot")).expect("Failed to read graph.dot")
}
