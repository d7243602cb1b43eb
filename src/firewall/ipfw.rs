//! The real backend: shells out to the ipfw binary. One synchronous
//! invocation per call, no retries, no timeout — the loop blocks for the
//! duration, same as the operator would at a shell.

use std::path::PathBuf;
use std::process::Command;

use log::{debug, warn};

use super::{parse_list_output, Rule, RuleBackend};

pub struct IpfwBackend {
    program: PathBuf,
}

impl IpfwBackend {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl RuleBackend for IpfwBackend {
    fn list(&self) -> Vec<Rule> {
        // Output is captured rather than inherited so a failing ipfw can't
        // write over the raw-mode screen.
        match Command::new(&self.program).arg("list").output() {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let rules = parse_list_output(&stdout);
                debug!("`{} list` returned {} rules", self.program.display(), rules.len());
                rules
            }
            Ok(output) => {
                warn!(
                    "`{} list` exited with {}: {}",
                    self.program.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                Vec::new()
            }
            Err(e) => {
                warn!("failed to run {}: {}", self.program.display(), e);
                Vec::new()
            }
        }
    }

    fn run(&self, command: &str) -> bool {
        let args: Vec<&str> = command.split_whitespace().collect();
        debug!("running `{} {}`", self.program.display(), args.join(" "));
        match Command::new(&self.program).args(&args).output() {
            Ok(output) => {
                if !output.status.success() {
                    warn!(
                        "`{} {}` exited with {}: {}",
                        self.program.display(),
                        args.join(" "),
                        output.status,
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                }
                output.status.success()
            }
            Err(e) => {
                warn!("failed to run {}: {}", self.program.display(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These exercise the failure paths without needing ipfw installed:
    // a nonexistent binary must degrade exactly like a failing one.

    #[test]
    fn test_list_missing_binary_degrades_to_empty() {
        let backend = IpfwBackend::new(PathBuf::from("/nonexistent/ipfw"));
        assert!(backend.list().is_empty());
    }

    #[test]
    fn test_run_missing_binary_reports_failure() {
        let backend = IpfwBackend::new(PathBuf::from("/nonexistent/ipfw"));
        assert!(!backend.run("delete 100"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_maps_exit_status_to_bool() {
        assert!(IpfwBackend::new(PathBuf::from("/bin/sh")).run("-c exit"));
        assert!(!IpfwBackend::new(PathBuf::from("/bin/false")).run(""));
    }
}
