//! Extension ID format.

/// Length of a standard extension ID.
pub const EXTENSION_ID_LEN: usize = 32;

/// True for the host's standard ID form: 32 characters from `a` to `p`
/// (a hex digest with the digits remapped).
///
/// Informational only. Registry queries never require a well-formed ID.
pub fn is_well_formed_extension_id(id: &str) -> bool {
    id.len() == EXTENSION_ID_LEN && id.bytes().all(|b| (b'a'..=b'p').contains(&b))
}
