// ============================================================================
// src/host.rs – Platform probe (uname, os-release) and the kernel gate
// ============================================================================

use std::fs;

use anyhow::{Context, Result};

use crate::error::DockyardError;
use crate::ui::UX;
use crate::util::version::Version;

const OS_RELEASE: &str = "/etc/os-release";

/// Distributions Docker publishes apt repositories for.
const SUPPORTED_DISTRIBUTIONS: &[&str] = &["ubuntu", "debian"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub sysname: String,
    pub release: String,
}

impl HostInfo {
    pub fn probe() -> Result<Self> {
        let uts = nix::sys::utsname::uname().context("uname")?;
        Ok(Self {
            sysname: uts.sysname().to_string_lossy().into_owned(),
            release: uts.release().to_string_lossy().into_owned(),
        })
    }

    pub fn is_linux(&self) -> bool {
        self.sysname == "Linux"
    }
}

/// Abort before any work when the kernel is older than `min`.
/// Non-Linux hosts pass; the install flow rejects them itself.
pub fn check_kernel(ui: &UX, host: &HostInfo, min: Version) -> Result<(), DockyardError> {
    if !host.is_linux() {
        tracing::debug!(sysname = %host.sysname, "kernel gate skipped");
        return Ok(());
    }
    let sufficient = match Version::from_release(&host.release) {
        Ok(found) => found >= min,
        Err(err) => {
            tracing::debug!(release = %host.release, error = %err, "unparseable kernel release");
            false
        }
    };
    if !sufficient {
        ui.warn(&format!("Your kernel version {} is outdated.", host.release));
        ui.info(&format!("This tool requires Linux {min} or later."));
        return Err(DockyardError::OutdatedKernel {
            found: host.release.clone(),
            required: min.to_string(),
        });
    }
    ui.info(&format!("Kernel version {} is sufficient.", host.release));
    Ok(())
}

/// `ID` from an os-release document, unquoted and lowercased.
pub fn os_release_id(text: &str) -> Option<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix("ID="))
        .map(|v| v.trim().trim_matches(|c| c == '"' || c == '\'').to_ascii_lowercase())
        .find(|v| !v.is_empty())
}

/// Map the configured distribution to a repository path segment.
/// `auto` reads the host's os-release; unknown IDs fall back to ubuntu.
pub fn resolve_distribution(configured: &str, os_release: Option<&str>) -> String {
    let wanted = if configured.eq_ignore_ascii_case("auto") {
        os_release.and_then(os_release_id).unwrap_or_default()
    } else {
        configured.to_ascii_lowercase()
    };
    if SUPPORTED_DISTRIBUTIONS.contains(&wanted.as_str()) {
        wanted
    } else {
        "ubuntu".to_string()
    }
}

pub fn read_os_release() -> Option<String> {
    fs::read_to_string(OS_RELEASE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux(release: &str) -> HostInfo {
        HostInfo {
            sysname: "Linux".into(),
            release: release.into(),
        }
    }

    #[test]
    fn kernel_at_minimum_passes() {
        let ui = UX::capture();
        check_kernel(&ui, &linux("3.10.0-1160.el7.x86_64"), Version::new(3, 10, 0)).unwrap();
        assert_eq!(
            ui.lines(),
            vec!["[INFO] Kernel version 3.10.0-1160.el7.x86_64 is sufficient."]
        );
    }

    #[test]
    fn kernel_below_minimum_is_rejected_with_warning() {
        let ui = UX::capture();
        let err = check_kernel(&ui, &linux("3.2.0-4-amd64"), Version::new(3, 10, 0)).unwrap_err();
        assert!(matches!(err, DockyardError::OutdatedKernel { .. }));
        assert_eq!(
            ui.lines(),
            vec![
                "[WARNING] Your kernel version 3.2.0-4-amd64 is outdated.",
                "[INFO] This tool requires Linux 3.10 or later.",
            ]
        );
    }

    #[test]
    fn garbage_release_counts_as_outdated() {
        let ui = UX::capture();
        assert!(check_kernel(&ui, &linux("unknown"), Version::new(3, 10, 0)).is_err());
    }

    #[test]
    fn non_linux_hosts_skip_the_gate() {
        let ui = UX::capture();
        let mac = HostInfo {
            sysname: "Darwin".into(),
            release: "1.0".into(),
        };
        check_kernel(&ui, &mac, Version::new(3, 10, 0)).unwrap();
        assert!(ui.lines().is_empty());
    }

    #[test]
    fn reads_quoted_and_bare_ids() {
        let debian = "PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\nID=debian\nVERSION_ID=\"12\"\n";
        let ubuntu = "NAME=\"Ubuntu\"\nID=\"ubuntu\"\nID_LIKE=debian\n";
        assert_eq!(os_release_id(debian).as_deref(), Some("debian"));
        assert_eq!(os_release_id(ubuntu).as_deref(), Some("ubuntu"));
        assert_eq!(os_release_id("NAME=x\n"), None);
    }

    #[test]
    fn distribution_resolution() {
        assert_eq!(resolve_distribution("ubuntu", None), "ubuntu");
        assert_eq!(resolve_distribution("Debian", None), "debian");
        assert_eq!(resolve_distribution("auto", Some("ID=debian\n")), "debian");
        assert_eq!(resolve_distribution("auto", Some("ID=linuxmint\n")), "ubuntu");
        assert_eq!(resolve_distribution("auto", None), "ubuntu");
        assert_eq!(resolve_distribution("fedora", None), "ubuntu");
    }

    #[test]
    fn probe_reports_a_sysname() {
        let host = HostInfo::probe().unwrap();
        assert!(!host.sysname.is_empty());
    }
}
