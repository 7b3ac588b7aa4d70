// ============================================================================
// src/cmd/shell.rs – Execution backends: the real host, or a dry run
// ============================================================================

use crate::cmd::base::Cmd;
use crate::error::{DockyardError, Result};
use crate::ui::UX;

/// Executes one runbook line. `Ok(())` only on exit status 0.
pub trait Shell {
    fn exec(&mut self, ui: &UX, line: &str) -> Result<()>;
}

pub struct SystemShell {
    cmd: Cmd,
}

impl SystemShell {
    pub fn new(cmd: Cmd) -> Self {
        Self { cmd }
    }

    pub fn discover() -> Result<Self> {
        Ok(Self::new(Cmd::discover()?))
    }
}

impl Shell for SystemShell {
    fn exec(&mut self, _ui: &UX, line: &str) -> Result<()> {
        let status = self.cmd.run(line)?;
        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(DockyardError::CommandFailed {
                command: line.to_string(),
                status: code,
            }),
            None => Err(DockyardError::Signalled {
                command: line.to_string(),
            }),
        }
    }
}

/// Prints what would run and reports success.
#[derive(Default)]
pub struct DryRunShell;

impl Shell for DryRunShell {
    fn exec(&mut self, ui: &UX, line: &str) -> Result<()> {
        ui.dry_run(line);
        Ok(())
    }
}
