//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

const PROXY_VARS: &[&str] = &[
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

impl Test {
    /// Create a casetally command running in the test directory.
    ///
    /// Proxy variables are cleared so requests reach the local backend and
    /// `CASETALLY_*` variables from the outer environment are dropped.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("casetally").expect("failed to find casetally binary");
        for var in PROXY_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("CASETALLY_VAULT");
        cmd.env_remove("CASETALLY_CONFIG");
        cmd.env_remove("CASETALLY_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `casetally run`.
    pub fn run(&self) -> Output {
        self.cmd()
            .arg("run")
            .output()
            .expect("failed to run casetally run")
    }

    /// Shortcut for `casetally count`.
    pub fn count(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("count")
            .args(args)
            .output()
            .expect("failed to run casetally count")
    }

    /// Shortcut for `casetally check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run casetally check")
    }
}
