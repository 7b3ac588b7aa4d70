// ============================================================================
// src/error.rs – Failure taxonomy for the install/uninstall runbooks
// ============================================================================

use thiserror::Error;

/// Errors that end a run with exit code 1.
#[derive(Debug, Error)]
pub enum DockyardError {
    #[error("Command '{command}' returned non-zero exit status {status}.")]
    CommandFailed { command: String, status: i32 },

    #[error("Command '{command}' was terminated by a signal.")]
    Signalled { command: String },

    #[error("could not spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shell '{0}' not in allowlist")]
    Disallowed(String),

    #[error("no allowlisted shell found on this host")]
    NoShell,

    #[error("This tool is only supported on Linux systems (found {0}).")]
    UnsupportedPlatform(String),

    #[error("Kernel version {found} is outdated; Linux {required} or later is required.")]
    OutdatedKernel { found: String, required: String },

    #[error("input closed before a choice was made")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, DockyardError>;
