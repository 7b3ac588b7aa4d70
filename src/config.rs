// ============================================================================
// src/config.rs – runbook configuration (defaults mirror the stock Docker
// apt instructions; every field may be overridden from TOML or YAML)
// ============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::util::version::Version;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/dockyard.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repo {
    /// Base URL of the apt repository, without the distribution suffix.
    #[serde(default = "default_repo_base")]
    pub base_url: String,
    /// `ubuntu`, `debian`, or `auto` (read `ID` from /etc/os-release).
    #[serde(default = "default_distribution")]
    pub distribution: String,
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default = "default_keyring")]
    pub keyring: String,
    #[serde(default = "default_list_file")]
    pub list_file: String,
}

fn default_repo_base() -> String {
    "https://download.docker.com/linux".to_string()
}

fn default_distribution() -> String {
    "ubuntu".to_string()
}

fn default_channel() -> String {
    "stable".to_string()
}

fn default_keyring() -> String {
    "/usr/share/keyrings/docker-archive-keyring.gpg".to_string()
}

fn default_list_file() -> String {
    "/etc/apt/sources.list.d/docker.list".to_string()
}

impl Default for Repo {
    fn default() -> Self {
        Self {
            base_url: default_repo_base(),
            distribution: default_distribution(),
            channel: default_channel(),
            keyring: default_keyring(),
            list_file: default_list_file(),
        }
    }
}

impl Repo {
    /// Full repository URL for the resolved distribution.
    pub fn url(&self, distribution: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), distribution)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Packages {
    #[serde(default = "default_prerequisites")]
    pub prerequisites: Vec<String>,
    #[serde(default = "default_engine")]
    pub engine: Vec<String>,
}

fn default_prerequisites() -> Vec<String> {
    [
        "apt-transport-https",
        "ca-certificates",
        "curl",
        "software-properties-common",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_engine() -> Vec<String> {
    ["docker-ce", "docker-ce-cli", "containerd.io"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Packages {
    fn default() -> Self {
        Self {
            prerequisites: default_prerequisites(),
            engine: default_engine(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paths {
    /// Removed in this order during uninstall.
    #[serde(default = "default_data_dirs")]
    pub data_dirs: Vec<String>,
    #[serde(default = "default_socket")]
    pub socket: String,
    #[serde(default = "default_compose_binary")]
    pub compose_binary: String,
}

fn default_data_dirs() -> Vec<String> {
    vec!["/var/lib/docker".to_string(), "/etc/docker".to_string()]
}

fn default_socket() -> String {
    "/var/run/docker.sock".to_string()
}

fn default_compose_binary() -> String {
    "/usr/local/bin/docker-compose".to_string()
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            data_dirs: default_data_dirs(),
            socket: default_socket(),
            compose_binary: default_compose_binary(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gate {
    #[serde(default = "default_min_kernel")]
    pub min_kernel: String,
}

fn default_min_kernel() -> String {
    "3.10".to_string()
}

impl Default for Gate {
    fn default() -> Self {
        Self {
            min_kernel: default_min_kernel(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Smoke {
    #[serde(default = "default_smoke_image")]
    pub image: String,
}

fn default_smoke_image() -> String {
    "hello-world".to_string()
}

impl Default for Smoke {
    fn default() -> Self {
        Self {
            image: default_smoke_image(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Audit {
    /// Append-only event log; `enabled = false` turns it off.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    #[serde(default = "default_audit_path")]
    pub path: String,
}

fn default_audit_enabled() -> bool {
    true
}

fn default_audit_path() -> String {
    "/var/log/dockyard.log".to_string()
}

impl Default for Audit {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            path: default_audit_path(),
        }
    }
}

impl Audit {
    /// Log file to append to, if auditing is on.
    pub fn target(&self) -> Option<&str> {
        if self.enabled && !self.path.trim().is_empty() {
            Some(self.path.as_str())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub repo: Repo,
    #[serde(default)]
    pub packages: Packages,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub gate: Gate,
    #[serde(default)]
    pub smoke: Smoke,
    #[serde(default)]
    pub audit: Audit,
}

impl Config {
    pub fn load<P: AsRef<Path>>(p: P) -> Result<Self> {
        let s = fs::read_to_string(&p)
            .with_context(|| format!("read config: {}", p.as_ref().display()))?;
        let cfg: Self = if p.as_ref().extension().and_then(|e| e.to_str()) == Some("toml") {
            toml::from_str(&s).context("toml parse")?
        } else {
            serde_yaml::from_str(&s).context("yaml parse")?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Explicit path wins; otherwise the system file if present, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let system = PathBuf::from(DEFAULT_CONFIG_PATH);
                if system.is_file() {
                    Self::load(system)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn min_kernel(&self) -> Result<Version> {
        self.gate
            .min_kernel
            .parse()
            .with_context(|| format!("gate.min_kernel = {:?}", self.gate.min_kernel))
    }

    fn validate(&self) -> Result<()> {
        self.min_kernel()?;
        if self.packages.engine.is_empty() {
            anyhow::bail!("packages.engine must list at least one package");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Serialize TOML failed")
    }
}
