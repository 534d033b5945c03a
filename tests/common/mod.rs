//! Shared testing utilities for devstack CLI tests.
//!
//! Each context gets its own `$HOME`, a project directory with `backend/` and
//! `frontend/`, and fake `ipfs`, `truffle` and `npm` executables on `PATH`
//! that append their invocations to `calls.log`.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_IPFS: &str = r#"#!/bin/sh
case "$1" in
  id) test -f "$HOME/.ipfs/api"; exit $? ;;
esac
echo "ipfs $*" >> "$DEVSTACK_CALLS"
case "$1" in
  init)
    [ "$FAKE_FAIL" = "init" ] && exit 1
    mkdir -p "$HOME/.ipfs"
    ;;
  daemon)
    [ "$FAKE_FAIL" = "daemon" ] && { echo "daemon crashed" >&2; exit 4; }
    echo "Daemon is ready"
    touch "$HOME/.ipfs/api"
    exec sleep 60
    ;;
esac
"#;

const FAKE_TRUFFLE: &str = r#"#!/bin/sh
echo "truffle $*" >> "$DEVSTACK_CALLS"
case "$1" in
  compile)
    [ "$FAKE_FAIL" = "compile" ] && { echo "Compilation failed" >&2; exit 2; }
    mkdir -p build/contracts
    for name in DeedRepository AuctionRepository; do
      [ "$FAKE_SKIP_ARTIFACT" = "$name" ] && continue
      echo "{\"contractName\":\"$name\",\"abi\":[],\"networks\":{}}" > "build/contracts/$name.json"
    done
    ;;
  migrate)
    [ "$FAKE_FAIL" = "migrate" ] && exit 3
    for name in DeedRepository AuctionRepository; do
      [ -f "build/contracts/$name.json" ] || continue
      echo "{\"contractName\":\"$name\",\"abi\":[],\"networks\":{\"5777\":{\"address\":\"0x$name\"}}}" > "build/contracts/$name.json"
    done
    ;;
esac
"#;

const FAKE_NPM: &str = r#"#!/bin/sh
echo "npm $*" >> "$DEVSTACK_CALLS"
exit "${FAKE_SERVE_EXIT:-0}"
"#;

/// Readiness via the fake `ipfs id`, polled quickly.
const TEST_CONFIG: &str = r#"[daemon.readiness]
strategy = "command"
command = ["ipfs", "id"]
attempts = 100
interval_ms = 50
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(work_dir.join("backend")).expect("Failed to create backend directory");
        fs::create_dir_all(work_dir.join("frontend")).expect("Failed to create frontend directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");

        let ctx = Self { root, work_dir, bin_dir };
        ctx.write_tool("ipfs", FAKE_IPFS);
        ctx.write_tool("truffle", FAKE_TRUFFLE);
        ctx.write_tool("npm", FAKE_NPM);
        ctx.write_config(TEST_CONFIG);
        ctx
    }

    fn write_tool(&self, name: &str, script: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Replace `devstack.toml` in the project directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("devstack.toml"), content).expect("Failed to write config");
    }

    /// Build a command for invoking the compiled `devstack` binary within the project.
    pub fn cli(&self) -> Command {
        fs::create_dir_all(self.home()).expect("Failed to create home directory");
        let path = match env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin_dir.clone()];
                paths.extend(env::split_paths(&existing));
                env::join_paths(paths).expect("Failed to join PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };

        let mut cmd = Command::cargo_bin("devstack").expect("Failed to locate devstack binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("PATH", path)
            .env("DEVSTACK_CALLS", self.calls_log())
            .env_remove("RUST_LOG")
            .env_remove("FAKE_FAIL")
            .env_remove("FAKE_SKIP_ARTIFACT")
            .env_remove("FAKE_SERVE_EXIT");
        cmd
    }

    fn calls_log(&self) -> PathBuf {
        self.root.path().join("calls.log")
    }

    /// Recorded tool invocations, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.calls_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Pretend `ipfs init` already ran.
    pub fn mark_daemon_initialized(&self) {
        fs::create_dir_all(self.home().join(".ipfs")).expect("Failed to create daemon state");
    }

    /// Write a compiled artifact into the build output.
    pub fn write_build_artifact(&self, name: &str, content: &str) {
        let dir = self.work_dir.join("backend/build/contracts");
        fs::create_dir_all(&dir).expect("Failed to create build directory");
        fs::write(dir.join(format!("{name}.json")), content).expect("Failed to write artifact");
    }

    pub fn build_artifact(&self, name: &str) -> PathBuf {
        self.work_dir.join("backend/build/contracts").join(format!("{name}.json"))
    }

    pub fn published_artifact(&self, name: &str) -> PathBuf {
        self.work_dir.join("frontend/src/contracts").join(format!("{name}.json"))
    }

    pub fn daemon_log(&self) -> PathBuf {
        self.work_dir.join(".devstack/daemon.log")
    }
}
