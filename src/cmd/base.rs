// ============================================================================
// src/cmd/base.rs – Allowlisted shell spawner for runbook commands
// ============================================================================

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{DockyardError, Result};

/// Shells a runbook line may be handed to. Pipes, `$(...)` and `$USER`
/// expansion in the steps need a POSIX shell.
const ALLOWED_SHELLS: &[&str] = &["/bin/sh", "/usr/bin/sh", "/bin/bash", "/usr/bin/bash"];

/// Spawns one command line through an allowlisted shell with the caller's
/// terminal attached, so `sudo` can ask for a password.
#[derive(Debug, Clone)]
pub struct Cmd {
    pub path: String,
}

impl Cmd {
    pub fn new_allowlisted<S: Into<String>>(path: S) -> Result<Self> {
        let path = path.into();
        if !ALLOWED_SHELLS.contains(&path.as_str()) {
            return Err(DockyardError::Disallowed(path));
        }
        Ok(Self { path })
    }

    /// First allowlisted shell present on this host.
    pub fn discover() -> Result<Self> {
        let found = ALLOWED_SHELLS
            .iter()
            .find(|candidate| Path::new(candidate).is_file())
            .ok_or(DockyardError::NoShell)?;
        Self::new_allowlisted(*found)
    }

    /// Run `line` to completion. No timeout: apt and sudo may legitimately
    /// wait on the user.
    pub fn run(&self, line: &str) -> Result<ExitStatus> {
        tracing::debug!(shell = %self.path, command = line, "spawning");
        Command::new(&self.path)
            .arg("-c")
            .arg(line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DockyardError::Spawn {
                command: line.to_string(),
                source,
            })
    }
}
