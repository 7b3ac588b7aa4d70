// ============================================================================
// src/util/version.rs – Dotted version parsing for the kernel gate
// ============================================================================

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};

/// `major.minor.patch`; missing components read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the numeric prefix of a kernel release such as
    /// `6.8.0-45-generic` or `5.15.153.1-microsoft-standard-WSL2`.
    pub fn from_release(release: &str) -> Result<Self> {
        let head: String = release
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        head.trim_end_matches('.').parse()
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow!("empty version string"));
        }
        let mut parts = [0u32; 3];
        for (idx, piece) in s.split('.').enumerate() {
            // Extra components (e.g. WSL's fourth field) do not affect ordering.
            if idx >= parts.len() {
                break;
            }
            parts[idx] = piece
                .parse()
                .map_err(|_| anyhow!("invalid version component '{piece}' in '{s}'"))?;
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}
