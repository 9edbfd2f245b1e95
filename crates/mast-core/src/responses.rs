//! Serializable snapshots of derived query results.
//!
//! Fields typed `Option<Vec<_>>` carry the "no data" contract: `None`
//! serializes to `null` and means the query does not apply, while
//! `Some(vec![])` would be a found-nothing result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Article, Author, Magazine};

/// Everything derivable about one author.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthorProfile {
    pub author: Author,
    pub articles: Vec<Article>,
    pub magazines: Vec<Magazine>,
    pub topic_areas: Option<Vec<String>>,
}

/// Everything derivable about one magazine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MagazineReport {
    pub magazine: Magazine,
    pub article_count: usize,
    pub article_titles: Option<Vec<String>>,
    pub contributors: Vec<Author>,
    pub contributing_authors: Option<Vec<Author>>,
}
