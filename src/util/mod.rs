// ============================================================================
// src/util/mod.rs – re-exports for utility modules
// ============================================================================

pub mod audit;
pub mod version;
