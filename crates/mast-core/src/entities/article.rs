use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validation::validate_article_title;

/// The join record: one title linking exactly one author to one magazine.
///
/// Author and magazine references are fixed for the article's lifetime and
/// the title cannot change after construction. Deserialized articles go
/// through the same title check as [`Article::new`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: String,
    title: String,
    author_id: String,
    magazine_id: String,
    created_at: DateTime<Utc>,
}

/// Wire shape of an [`Article`] before validation.
#[derive(Deserialize, JsonSchema)]
struct ArticleRecord {
    id: String,
    title: String,
    author_id: String,
    magazine_id: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = CoreError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        validate_article_title(&record.title)?;
        Ok(Self {
            id: record.id,
            title: record.title,
            author_id: record.author_id,
            magazine_id: record.magazine_id,
            created_at: record.created_at,
        })
    }
}

impl Article {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `title` is not 5-50 characters.
    pub fn new(
        id: impl Into<String>,
        author_id: impl Into<String>,
        magazine_id: impl Into<String>,
        title: &str,
    ) -> Result<Self, CoreError> {
        validate_article_title(title)?;
        Ok(Self {
            id: id.into(),
            title: title.to_string(),
            author_id: author_id.into(),
            magazine_id: magazine_id.into(),
            created_at: Utc::now(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    #[must_use]
    pub fn magazine_id(&self) -> &str {
        &self.magazine_id
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Titles are fixed at construction; the value is ignored.
    pub const fn set_title(&mut self, _title: &str) {}
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article {:?}", self.title)
    }
}
