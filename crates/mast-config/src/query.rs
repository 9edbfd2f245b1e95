//! Query configuration.

use serde::{Deserialize, Serialize};

/// Default article count an author must exceed in one magazine to count as
/// a contributing author there.
const fn default_prolific_threshold() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Authors with strictly more articles than this in a magazine are
    /// reported by `contributing_authors`.
    #[serde(default = "default_prolific_threshold")]
    pub prolific_threshold: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            prolific_threshold: default_prolific_threshold(),
        }
    }
}
