#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn encyclo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("encyclo").unwrap();
    cmd.env_remove("ENCYCLO_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized wiki at `root`
pub fn wiki_cmd(root: &Path) -> Command {
    let mut cmd = encyclo_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_wiki(root: &Path) {
    encyclo_cmd().arg("init").arg(root).assert().success();
}

pub fn add_entry(root: &Path, title: &str, body: &str) {
    wiki_cmd(root)
        .args(["new", title, "--body", body])
        .assert()
        .success();
}
