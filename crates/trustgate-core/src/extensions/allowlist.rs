//! Gate for extensions the host force-loads from configuration.
//!
//! Configuration may request any IDs, but only builtin extensions are ever
//! passed on to the loader.

use serde::Serialize;

use super::registry::builtin_extension;

/// Result of filtering a configured force-load list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForceLoadDecision {
    /// Builtin IDs to load, in first-request order, without duplicates.
    pub allowed: Vec<&'static str>,
    /// Requested IDs that are not builtin, in first-request order, without duplicates.
    pub rejected: Vec<String>,
}

/// Allowlist backed by the compiled-in builtin table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceLoadAllowlist;

impl ForceLoadAllowlist {
    pub fn new() -> Self {
        Self
    }

    pub fn permits(&self, id: &str) -> bool {
        builtin_extension(id).is_some()
    }

    pub fn filter<I, S>(&self, requested: I) -> ForceLoadDecision
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut decision = ForceLoadDecision::default();
        for id in requested {
            let id = id.as_ref();
            match builtin_extension(id) {
                Some(entry) => {
                    if !decision.allowed.contains(&entry.id) {
                        decision.allowed.push(entry.id);
                    }
                }
                None => {
                    if !decision.rejected.iter().any(|r| r == id) {
                        tracing::warn!(extension_id = %id, "refusing to force-load non-builtin extension");
                        decision.rejected.push(id.to_string());
                    }
                }
            }
        }
        decision
    }
}
