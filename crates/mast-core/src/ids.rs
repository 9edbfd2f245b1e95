//! ID prefix constants and formatting helpers.
//!
//! Every entity ID is `<prefix>-<8 hex digits>`, e.g. `"ath-0000002a"`.
//! IDs are the identity of an entity: two authors sharing a name are still
//! different authors because their IDs differ.

pub const PREFIX_AUTHOR: &str = "ath";
pub const PREFIX_MAGAZINE: &str = "mag";
pub const PREFIX_ARTICLE: &str = "art";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_AUTHOR, PREFIX_MAGAZINE, PREFIX_ARTICLE];

/// Format a prefixed ID from a sequence number.
#[must_use]
pub fn format_id(prefix: &str, seq: u32) -> String {
    format!("{prefix}-{seq:08x}")
}
