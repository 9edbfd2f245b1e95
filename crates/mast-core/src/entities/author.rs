use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validation::validate_author_name;

/// A writer. Owns no collection: its articles are derived from the registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize, JsonSchema)]
struct AuthorRecord {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = CoreError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        validate_author_name(&record.name)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        })
    }
}

impl Author {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is empty.
    pub fn new(id: impl Into<String>, name: &str) -> Result<Self, CoreError> {
        validate_author_name(name)?;
        Ok(Self {
            id: id.into(),
            name: name.to_string(),
            created_at: Utc::now(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Names are fixed once the author exists; the value is ignored.
    pub const fn set_name(&mut self, _name: &str) {}
}
