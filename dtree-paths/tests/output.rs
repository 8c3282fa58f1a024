use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn dtree_paths() -> Command {
    cargo_bin_cmd!("dtree-paths")
}

#[test]
fn prints_sorted_leaf_paths() {
    dtree_paths()
        .assert()
        .success()
        .stdout("[\"/a/b/d/\", \"/a/c/\"]\n");
}

#[test]
fn output_is_deterministic() {
    let first = dtree_paths().output().unwrap();
    let second = dtree_paths().output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn logging_stays_off_stdout() {
    dtree_paths()
        .env("RUST_LOG", "trace")
        .assert()
        .success()
        .stdout(predicate::str::diff("[\"/a/b/d/\", \"/a/c/\"]\n"));
}
