//! Entity type enum for Masthead.
//!
//! Uses `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{PREFIX_ARTICLE, PREFIX_AUTHOR, PREFIX_MAGAZINE};

/// The three entity kinds of the author/magazine relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Author,
    Magazine,
    Article,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Magazine => "magazine",
            Self::Article => "article",
        }
    }

    /// ID prefix used for entities of this type.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Author => PREFIX_AUTHOR,
            Self::Magazine => PREFIX_MAGAZINE,
            Self::Article => PREFIX_ARTICLE,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
