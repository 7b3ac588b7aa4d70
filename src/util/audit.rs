// ============================================================================
// src/util/audit.rs – Minimal append-only audit trail
// ============================================================================

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;

/// Append-only event sink. A `None` path disables auditing.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    path: Option<PathBuf>,
}

impl AuditLog {
    pub fn new<P: Into<PathBuf>>(path: Option<P>) -> Self {
        Self {
            path: path.map(Into::into),
        }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Append a timestamped event (0600 permissions on first create).
    /// Silent failure if the log is unwritable; an unprivileged run usually
    /// cannot reach /var/log and must not stop because of it.
    pub fn record(&self, event: &str, detail: &str) {
        let Some(path) = &self.path else {
            return;
        };
        match OpenOptions::new()
            .create(true)
            .append(true)
            .mode(0o600)
            .open(path)
        {
            Ok(mut file) => {
                let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "[{ts}] {event}: {detail}");
            }
            Err(err) => {
                tracing::trace!(path = %path.display(), error = %err, "audit log unavailable");
            }
        }
    }
}
