// ============================================================================
// src/cmd/privilege.rs – sudo handshake (verify, or reset password and retry)
// ============================================================================

use anyhow::Result;

use crate::cmd::runner::Runner;
use crate::error::DockyardError;
use crate::prompt::{parse_choice, Prompter};

const VERIFY: &str = "sudo -v";
const RESET: &str = "sudo passwd $USER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Verify,
    ResetPassword,
}

impl Choice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Choice::Verify),
            2 => Some(Choice::ResetPassword),
            _ => None,
        }
    }
}

/// Loop until `sudo -v` succeeds. A wrong password or a password reset both
/// return to the menu; there is no attempt limit. Closed input aborts.
pub fn acquire(runner: &mut Runner<'_>, prompter: &mut dyn Prompter) -> Result<()> {
    loop {
        runner.ui.say("");
        runner.ui.info("Checking for sudo privileges...");
        runner.ui.say("1. Continue with the current password.");
        runner.ui.say("2. Set a new password for the current Linux user.");

        let Some(answer) = prompter.ask("Enter your choice (1 or 2)")? else {
            return Err(DockyardError::InputClosed.into());
        };
        let Some(number) = parse_choice(&answer) else {
            runner.ui.error("Please enter a valid number (1 or 2).");
            continue;
        };

        match Choice::from_number(number) {
            Some(Choice::Verify) => {
                runner
                    .ui
                    .info("Please enter your current password to verify access...");
                if runner.attempt(VERIFY).is_ok() {
                    tracing::debug!("sudo access verified");
                    return Ok(());
                }
                runner
                    .ui
                    .error("Incorrect password. Please use option 2 to reset the password.");
            }
            Some(Choice::ResetPassword) => {
                runner
                    .ui
                    .info("Setting a new password for your Linux user account...");
                runner.sh(RESET)?;
                runner
                    .ui
                    .info("Password updated successfully. Rechecking sudo access...");
            }
            None => runner.ui.error("Invalid choice. Please enter 1 or 2."),
        }
    }
}
