// ============================================================================
// src/cmd/install.rs – Docker engine install runbook
// (apt repository + signing key, engine packages, group membership, smoke test)
// ============================================================================

use anyhow::Result;

use crate::cmd::privilege;
use crate::cmd::runner::{Runner, Step};
use crate::config::Config;
use crate::error::DockyardError;
use crate::host::HostInfo;
use crate::prompt::Prompter;

/// Concrete command lines for one install, resolved from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub refresh: String,
    pub prerequisites: String,
    pub signing_key: String,
    pub repository: String,
    pub engine: String,
    pub version: String,
    pub group: String,
    pub socket: String,
    pub smoke_test: String,
}

impl InstallPlan {
    pub fn new(cfg: &Config, distribution: &str) -> Self {
        let repo_url = cfg.repo.url(distribution);
        let keyring = &cfg.repo.keyring;
        Self {
            refresh: "sudo apt-get update".to_string(),
            prerequisites: format!(
                "sudo apt-get install -y {}",
                cfg.packages.prerequisites.join(" ")
            ),
            signing_key: format!(
                "curl -fsSL {repo_url}/gpg | sudo gpg --batch --yes --dearmor -o {keyring}"
            ),
            repository: format!(
                "echo \"deb [arch=$(dpkg --print-architecture) signed-by={keyring}] \
                 {repo_url} $(lsb_release -cs) {channel}\" | sudo tee {list} > /dev/null",
                channel = cfg.repo.channel,
                list = cfg.repo.list_file,
            ),
            engine: format!("sudo apt-get install -y {}", cfg.packages.engine.join(" ")),
            version: "docker --version".to_string(),
            group: "sudo usermod -aG docker \"$USER\"".to_string(),
            socket: format!("sudo chown $USER {}", cfg.paths.socket),
            smoke_test: format!("docker run {}", cfg.smoke.image),
        }
    }

    /// Command lines in execution order (excluding the sudo handshake).
    #[cfg(test)]
    pub fn commands(&self) -> Vec<&str> {
        [
            &self.refresh,
            &self.prerequisites,
            &self.signing_key,
            &self.repository,
            &self.refresh,
            &self.engine,
            &self.version,
            &self.group,
            &self.socket,
            &self.smoke_test,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }
}

pub fn run_install(
    runner: &mut Runner<'_>,
    prompter: &mut dyn Prompter,
    host: &HostInfo,
    plan: &InstallPlan,
) -> Result<()> {
    runner.ui.info("Starting Docker installation process...");
    runner.audit.record("FLOW_START", "install");

    if !host.is_linux() {
        runner
            .ui
            .error("This tool is only supported on Linux systems.");
        return Err(DockyardError::UnsupportedPlatform(host.sysname.clone()).into());
    }

    privilege::acquire(runner, prompter)?;

    runner.run(&Step::new(&plan.refresh).announce("Updating package list..."))?;
    runner.run(&Step::new(&plan.prerequisites).announce("Installing prerequisite packages..."))?;
    runner.run(&Step::new(&plan.signing_key).announce("Adding Docker's GPG key..."))?;
    runner.run(&Step::new(&plan.repository).announce("Adding Docker repository..."))?;
    runner.run(
        &Step::new(&plan.refresh)
            .announce("Updating package list after adding Docker repository..."),
    )?;
    runner.run(&Step::new(&plan.engine).announce("Installing Docker Engine..."))?;
    runner.run(&Step::new(&plan.version).announce("Verifying Docker installation..."))?;
    runner.ui.info("Docker installed successfully!");

    runner.run(
        &Step::new(&plan.group).announce("Adding the current user to the Docker group..."),
    )?;

    runner
        .ui
        .info("To apply group changes, you must log out and log back in or reboot the system.");
    runner
        .ui
        .info("Alternatively, reboot your system using: sudo reboot");
    runner
        .ui
        .info("After rebooting, test Docker using the following command:");
    runner.ui.hint(&plan.smoke_test);

    runner.ui.info("Fixing permission issue for Docker socket...");
    runner.run(&Step::new(&plan.socket).announce("Please enter your password when prompted."))?;

    let smoke = Step::new(&plan.smoke_test)
        .announce("Running Docker test (hello-world container)...")
        .advisory(
            "You may still need to log out and back in, or reboot your system to resolve permissions.",
            &["Reboot now using: sudo reboot"],
        );
    if runner.run(&smoke)? {
        runner.ui.info("Docker test completed successfully!");
    }
    runner.audit.record("FLOW_DONE", "install");
    Ok(())
}
