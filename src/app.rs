// ============================================================================
// src/app.rs – Session wiring: kernel gate, menu, then one runbook
// ============================================================================

use anyhow::Result;

use crate::cmd::install::{run_install, InstallPlan};
use crate::cmd::runner::Runner;
use crate::cmd::shell::Shell;
use crate::cmd::uninstall::{run_uninstall, UninstallPlan};
use crate::config::Config;
use crate::host::{self, HostInfo};
use crate::menu::{show_main_menu, MenuChoice};
use crate::prompt::Prompter;
use crate::ui::UX;
use crate::util::audit::AuditLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Uninstalled,
    /// The menu answer was not an option; nothing ran.
    NoChoice,
}

pub struct Session<'a> {
    pub ui: &'a UX,
    pub shell: &'a mut dyn Shell,
    pub prompter: &'a mut dyn Prompter,
    pub audit: &'a AuditLog,
    pub host: HostInfo,
    pub cfg: Config,
    /// Repository path segment (`ubuntu` / `debian`).
    pub distribution: String,
}

impl Session<'_> {
    /// `preset` skips the menu (subcommand given on the command line).
    pub fn run(self, preset: Option<MenuChoice>) -> Result<Outcome> {
        host::check_kernel(self.ui, &self.host, self.cfg.min_kernel()?)?;

        let choice = match preset {
            Some(choice) => choice,
            None => match show_main_menu(self.ui, &mut *self.prompter)? {
                Some(choice) => choice,
                None => {
                    self.ui.error("Invalid choice. Exiting...");
                    return Ok(Outcome::NoChoice);
                }
            },
        };
        tracing::info!(?choice, distribution = %self.distribution, "starting runbook");

        let mut runner = Runner::new(self.ui, &mut *self.shell, self.audit);
        match choice {
            MenuChoice::Install => {
                let plan = InstallPlan::new(&self.cfg, &self.distribution);
                run_install(&mut runner, &mut *self.prompter, &self.host, &plan)?;
                Ok(Outcome::Installed)
            }
            MenuChoice::Uninstall => {
                run_uninstall(&mut runner, &UninstallPlan::new(&self.cfg))?;
                Ok(Outcome::Uninstalled)
            }
        }
    }
}
