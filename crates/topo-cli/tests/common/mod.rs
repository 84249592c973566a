//! Shared harness for the end-to-end tests: builds repositories by writing
//! loose objects and ref files directly, and runs the binary against them.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use sha1::{Digest, Sha1};
use topo_hash::ObjectId;

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the binary in `dir` with the given arguments.
pub fn topo(dir: &Path, args: &[&str]) -> CommandResult {
    topo_env(dir, args, &[])
}

/// Run the binary with extra environment variables.
pub fn topo_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> CommandResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_topo-order-commits"));
    cmd.args(args)
        .current_dir(dir)
        .env_remove("GIT_DIR")
        .env_remove("GIT_CEILING_DIRECTORIES")
        .env_remove("RUST_LOG");
    for (k, v) in env {
        cmd.env(k, v);
    }
    let output = cmd.output().expect("failed to run topo-order-commits");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// A repository written by hand: `.git/objects` and `.git/refs/heads` only.
pub struct Fixture {
    dir: tempfile::TempDir,
    clock: u64,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        fs::create_dir_all(dir.path().join(".git/refs/heads")).unwrap();
        Self {
            dir,
            clock: 1_700_000_000,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git_dir(&self) -> PathBuf {
        self.dir.path().join(".git")
    }

    /// Write a commit object with the given parents, returning its id.
    pub fn commit(&mut self, parents: &[ObjectId], message: &str) -> ObjectId {
        self.clock += 60;
        let mut body = String::from("tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n");
        for p in parents {
            body.push_str(&format!("parent {p}\n"));
        }
        body.push_str(&format!("author T <t@example.com> {} +0000\n", self.clock));
        body.push_str(&format!("committer T <t@example.com> {} +0000\n\n", self.clock));
        body.push_str(message);
        body.push('\n');
        self.write_object("commit", body.as_bytes())
    }

    /// Write a loose object of any type, returning its id.
    pub fn write_object(&self, kind: &str, content: &[u8]) -> ObjectId {
        let mut raw = format!("{kind} {}\0", content.len()).into_bytes();
        raw.extend_from_slice(content);
        let oid = ObjectId::from_sha1(Sha1::digest(&raw).into());

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw).unwrap();
        let path = self.git_dir().join("objects").join(oid.loose_path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, encoder.finish().unwrap()).unwrap();
        oid
    }

    /// Point branch `name` at `oid`.
    pub fn branch(&self, name: &str, oid: ObjectId) {
        let path = self.git_dir().join("refs/heads").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("{oid}\n")).unwrap();
    }

    /// Delete the stored object for `oid`.
    pub fn remove_object(&self, oid: ObjectId) {
        fs::remove_file(self.git_dir().join("objects").join(oid.loose_path())).unwrap();
    }
}
