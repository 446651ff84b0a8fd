//! Builtin (first-party) extension registry.
//!
//! The table is compiled in and immutable for the life of the process: user or
//! remote configuration can request force-loads through [`ForceLoadAllowlist`]
//! but can never add to the set of protected IDs.

mod allowlist;
mod id;
mod registry;

pub use allowlist::{ForceLoadAllowlist, ForceLoadDecision};
pub use id::{is_well_formed_extension_id, EXTENSION_ID_LEN};
pub use registry::{
    builtin_extension, builtin_extension_ids, can_uninstall, display_name, is_builtin_extension,
    BuiltinExtension, AI_SIDE_PANEL_EXTENSION_ID, BUG_REPORTER_EXTENSION_ID, BUILTIN_EXTENSIONS,
};
