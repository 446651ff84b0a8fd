//! Compiled-in table of first-party extensions.

/// AI agent side panel extension.
pub const AI_SIDE_PANEL_EXTENSION_ID: &str = "djhdjhlnljbjgejbndockeedocneiaei";

/// Bug reporter extension.
pub const BUG_REPORTER_EXTENSION_ID: &str = "adlpneommgkgeanpaekgoaolcpncohkf";

/// A first-party extension and the label shown for it in the omnibox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinExtension {
    pub id: &'static str,
    pub display_name: &'static str,
}

/// Declaration order is the order reported by [`builtin_extension_ids`].
pub const BUILTIN_EXTENSIONS: &[BuiltinExtension] = &[
    BuiltinExtension {
        id: AI_SIDE_PANEL_EXTENSION_ID,
        display_name: "BrowserOS/settings",
    },
    BuiltinExtension {
        id: BUG_REPORTER_EXTENSION_ID,
        display_name: "BrowserOS/bug-reporter",
    },
];

/// Look up the builtin entry for `id`.
pub fn builtin_extension(id: &str) -> Option<&'static BuiltinExtension> {
    BUILTIN_EXTENSIONS.iter().find(|e| e.id == id)
}

pub fn is_builtin_extension(id: &str) -> bool {
    builtin_extension(id).is_some()
}

/// Builtin extensions can never be uninstalled by the user; everything else can.
pub fn can_uninstall(id: &str) -> bool {
    !is_builtin_extension(id)
}

pub fn builtin_extension_ids() -> Vec<&'static str> {
    BUILTIN_EXTENSIONS.iter().map(|e| e.id).collect()
}

/// Omnibox label for a builtin extension; `None` for anything else.
pub fn display_name(id: &str) -> Option<&'static str> {
    builtin_extension(id).map(|e| e.display_name)
}
