// ============================================================================
// src/cmd/runner.rs – Step records and the single runner every flow uses
// ============================================================================

use crate::cmd::shell::Shell;
use crate::error::Result;
use crate::ui::UX;
use crate::util::audit::AuditLog;

/// What happens when a step's command fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnFailure {
    /// Stop the whole run.
    Abort,
    /// Print these lines (error first, then info) and keep going.
    Advise { error: String, info: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Announced as `[INFO]` before the command runs.
    pub announce: Option<String>,
    pub command: String,
    pub on_failure: OnFailure,
}

impl Step {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            announce: None,
            command: command.into(),
            on_failure: OnFailure::Abort,
        }
    }

    pub fn announce(mut self, msg: impl Into<String>) -> Self {
        self.announce = Some(msg.into());
        self
    }

    pub fn advisory(mut self, error: impl Into<String>, info: &[&str]) -> Self {
        self.on_failure = OnFailure::Advise {
            error: error.into(),
            info: info.iter().map(|s| s.to_string()).collect(),
        };
        self
    }
}

/// Everything a flow needs to issue commands.
pub struct Runner<'a> {
    pub ui: &'a UX,
    pub shell: &'a mut dyn Shell,
    pub audit: &'a AuditLog,
}

impl<'a> Runner<'a> {
    pub fn new(ui: &'a UX, shell: &'a mut dyn Shell, audit: &'a AuditLog) -> Self {
        Self { ui, shell, audit }
    }

    /// Run one step. `Ok(true)` when the command succeeded, `Ok(false)` when
    /// an advisory step failed; an aborting failure is returned as `Err`.
    pub fn run(&mut self, step: &Step) -> Result<bool> {
        if let Some(msg) = &step.announce {
            self.ui.info(msg);
        }
        match self.attempt(&step.command) {
            Ok(()) => Ok(true),
            Err(err) => match &step.on_failure {
                OnFailure::Abort => Err(err),
                OnFailure::Advise { error, info } => {
                    self.ui.error(error);
                    for line in info {
                        self.ui.info(line);
                    }
                    Ok(false)
                }
            },
        }
    }

    /// Run a command line with fatal semantics.
    pub fn sh(&mut self, command: &str) -> Result<()> {
        self.run(&Step::new(command)).map(|_| ())
    }

    /// Execute and report, without applying any failure policy.
    pub fn attempt(&mut self, command: &str) -> Result<()> {
        match self.shell.exec(self.ui, command) {
            Ok(()) => {
                self.ui.info(&format!("Command succeeded: {command}"));
                self.audit.record("CMD_OK", command);
                Ok(())
            }
            Err(err) => {
                self.ui
                    .error(&format!("Command failed: {command}\nError: {err}"));
                self.audit.record("CMD_FAIL", &format!("{command} ({err})"));
                tracing::debug!(command, error = %err, "step failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DockyardError;
    use crate::testutil::ScriptedShell;

    #[test]
    fn success_is_reported_per_command() {
        let ui = UX::capture();
        let audit = AuditLog::disabled();
        let mut shell = ScriptedShell::default();
        let mut runner = Runner::new(&ui, &mut shell, &audit);

        let ran = runner
            .run(&Step::new("sudo apt-get update").announce("Updating package list..."))
            .unwrap();

        assert!(ran);
        assert_eq!(
            ui.lines(),
            vec![
                "[INFO] Updating package list...",
                "[INFO] Command succeeded: sudo apt-get update",
            ]
        );
    }

    #[test]
    fn aborting_step_surfaces_the_failure() {
        let ui = UX::capture();
        let audit = AuditLog::disabled();
        let mut shell = ScriptedShell::failing(&["sudo apt-get update"]);
        let mut runner = Runner::new(&ui, &mut shell, &audit);

        let err = runner.sh("sudo apt-get update").unwrap_err();

        assert!(matches!(err, DockyardError::CommandFailed { status: 1, .. }));
        assert_eq!(
            ui.lines(),
            vec![
                "[ERROR] Command failed: sudo apt-get update\n\
                 Error: Command 'sudo apt-get update' returned non-zero exit status 1."
            ]
        );
    }

    #[test]
    fn advisory_step_prints_advice_and_continues() {
        let ui = UX::capture();
        let audit = AuditLog::disabled();
        let mut shell = ScriptedShell::failing(&["docker run hello-world"]);
        let mut runner = Runner::new(&ui, &mut shell, &audit);

        let step = Step::new("docker run hello-world").advisory("Reboot needed.", &["sudo reboot"]);
        let ran = runner.run(&step).unwrap();

        assert!(!ran);
        let lines = ui.lines();
        assert_eq!(lines[lines.len() - 2], "[ERROR] Reboot needed.");
        assert_eq!(lines[lines.len() - 1], "[INFO] sudo reboot");
    }
}
