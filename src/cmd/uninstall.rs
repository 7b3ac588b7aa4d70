// ============================================================================
// src/cmd/uninstall.rs – Purge Docker packages, state and leftovers
// ============================================================================

use anyhow::Result;

use crate::cmd::runner::Runner;
use crate::config::Config;

/// Removal lines. `rm -rf` tolerates missing targets, so the plan is the
/// same whether or not Docker was ever installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallPlan {
    pub purge: String,
    pub removals: Vec<String>,
    pub cleanup: Vec<String>,
}

impl UninstallPlan {
    pub fn new(cfg: &Config) -> Self {
        let removals = cfg
            .paths
            .data_dirs
            .iter()
            .chain([&cfg.paths.socket, &cfg.paths.compose_binary])
            .map(|target| format!("sudo rm -rf {target}"))
            .collect();
        Self {
            purge: format!("sudo apt-get purge -y {}", cfg.packages.engine.join(" ")),
            removals,
            cleanup: vec![
                "sudo apt-get autoremove -y".to_string(),
                "sudo apt-get autoclean".to_string(),
            ],
        }
    }
}

pub fn run_uninstall(runner: &mut Runner<'_>, plan: &UninstallPlan) -> Result<()> {
    runner.ui.info("Starting Docker uninstallation process...");
    runner.audit.record("FLOW_START", "uninstall");

    runner.ui.info("Removing Docker packages...");
    runner.sh(&plan.purge)?;

    runner
        .ui
        .info("Removing Docker related files and directories...");
    for line in &plan.removals {
        runner.sh(line)?;
    }

    runner.ui.info("Cleaning up unused packages...");
    for line in &plan.cleanup {
        runner.sh(line)?;
    }

    runner.ui.info(
        "Docker has been successfully uninstalled and all related files have been removed.",
    );
    runner.audit.record("FLOW_DONE", "uninstall");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DockyardError;
    use crate::testutil::ScriptedShell;
    use crate::ui::UX;
    use crate::util::audit::AuditLog;

    const EXPECTED: &[&str] = &[
        "sudo apt-get purge -y docker-ce docker-ce-cli containerd.io",
        "sudo rm -rf /var/lib/docker",
        "sudo rm -rf /etc/docker",
        "sudo rm -rf /var/run/docker.sock",
        "sudo rm -rf /usr/local/bin/docker-compose",
        "sudo apt-get autoremove -y",
        "sudo apt-get autoclean",
    ];

    fn uninstall(shell: &mut ScriptedShell) -> (Result<()>, UX) {
        let ui = UX::capture();
        let audit = AuditLog::disabled();
        let result = {
            let mut runner = Runner::new(&ui, shell, &audit);
            run_uninstall(&mut runner, &UninstallPlan::new(&Config::default()))
        };
        (result, ui)
    }

    #[test]
    fn removes_everything_in_order() {
        let mut shell = ScriptedShell::default();
        let (result, ui) = uninstall(&mut shell);
        result.unwrap();
        assert_eq!(shell.issued, EXPECTED);
        assert_eq!(
            ui.lines().last().map(String::as_str),
            Some("[INFO] Docker has been successfully uninstalled and all related files have been removed.")
        );
    }

    #[test]
    fn running_twice_issues_the_same_removals() {
        let mut shell = ScriptedShell::default();
        uninstall(&mut shell).0.unwrap();
        uninstall(&mut shell).0.unwrap();
        assert_eq!(shell.issued.len(), EXPECTED.len() * 2);
        assert_eq!(&shell.issued[EXPECTED.len()..], EXPECTED);
    }

    #[test]
    fn failure_stops_before_later_removals() {
        let mut shell = ScriptedShell::failing(&["sudo rm -rf /etc/docker"]);
        let (result, _) = uninstall(&mut shell);

        assert!(matches!(
            result.unwrap_err().downcast_ref::<DockyardError>(),
            Some(DockyardError::CommandFailed { .. })
        ));
        assert_eq!(shell.issued, &EXPECTED[..3]);
    }

    #[test]
    fn configured_paths_are_removed() {
        let mut cfg = Config::default();
        cfg.paths.data_dirs = vec!["/srv/docker".into()];
        cfg.paths.compose_binary = "/opt/bin/docker-compose".into();
        let plan = UninstallPlan::new(&cfg);
        assert_eq!(
            plan.removals,
            vec![
                "sudo rm -rf /srv/docker",
                "sudo rm -rf /var/run/docker.sock",
                "sudo rm -rf /opt/bin/docker-compose",
            ]
        );
    }
}
