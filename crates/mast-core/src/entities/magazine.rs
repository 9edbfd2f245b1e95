use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validation::{
    is_valid_category, is_valid_magazine_name, validate_category, validate_magazine_name,
};

/// A publication with a 2-16 character name and a non-empty category.
///
/// The constructor rejects invalid input with an error. The setters never
/// fail: an invalid value leaves the magazine unchanged. Deserialization
/// applies the constructor's checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: String,
    name: String,
    category: String,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize, JsonSchema)]
struct MagazineRecord {
    id: String,
    name: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = CoreError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        validate_magazine_name(&record.name)?;
        validate_category(&record.category)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            category: record.category,
            created_at: record.created_at,
        })
    }
}

impl Magazine {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is not 2-16 characters or
    /// `category` is empty.
    pub fn new(id: impl Into<String>, name: &str, category: &str) -> Result<Self, CoreError> {
        validate_magazine_name(name)?;
        validate_category(category)?;
        Ok(Self {
            id: id.into(),
            name: name.to_string(),
            category: category.to_string(),
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
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the new name was applied.
    pub fn set_name(&mut self, name: &str) -> bool {
        if !is_valid_magazine_name(name) {
            return false;
        }
        name.clone_into(&mut self.name);
        true
    }

    /// Returns whether the new category was applied.
    pub fn set_category(&mut self, category: &str) -> bool {
        if !is_valid_category(category) {
            return false;
        }
        category.clone_into(&mut self.category);
        true
    }
}
