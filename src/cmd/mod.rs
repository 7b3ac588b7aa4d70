// ============================================================================
// src/cmd/mod.rs – command subsystem root
// ============================================================================
pub mod base; // allowlisted shell spawner (Cmd)
pub mod install; // dockyard install
pub mod privilege; // sudo handshake
pub mod runner; // Step + Runner
pub mod shell; // system / dry-run backends
pub mod uninstall; // dockyard uninstall

// Re-export common types for convenience:
pub use shell::{DryRunShell, Shell, SystemShell};
