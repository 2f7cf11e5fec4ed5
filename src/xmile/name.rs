#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Canonical comparison keys for variable names.

/// Returns the comparison key for a display name.
///
/// Stella shows `GPP Base` in the diagram while equations refer to
/// `GPP_Base`; both, along with `gpp-base`, map to `gpp_base`.
pub fn normalize(raw_name: &str) -> String {
    raw_name.trim().to_lowercase().replace([' ', '-'], "_")
}
