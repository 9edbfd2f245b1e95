//! Construction-time validation rules.
//!
//! Constructors call the `validate_*` functions and fail with
//! [`CoreError::Validation`]. Setters on already-constructed entities use the
//! `is_valid_*` predicates instead and drop invalid values without an error.
//!
//! Lengths are counted in characters, not bytes.

use std::ops::RangeInclusive;

use crate::errors::CoreError;

/// Allowed magazine name length, in characters.
pub const MAGAZINE_NAME_LEN: RangeInclusive<usize> = 2..=16;

/// Allowed article title length, in characters.
pub const ARTICLE_TITLE_LEN: RangeInclusive<usize> = 5..=50;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[must_use]
pub fn is_valid_author_name(name: &str) -> bool {
    !name.is_empty()
}

#[must_use]
pub fn is_valid_magazine_name(name: &str) -> bool {
    MAGAZINE_NAME_LEN.contains(&char_len(name))
}

#[must_use]
pub fn is_valid_category(category: &str) -> bool {
    !category.is_empty()
}

#[must_use]
pub fn is_valid_article_title(title: &str) -> bool {
    ARTICLE_TITLE_LEN.contains(&char_len(title))
}

/// # Errors
///
/// Returns `CoreError::Validation` if `name` is empty.
pub fn validate_author_name(name: &str) -> Result<(), CoreError> {
    if is_valid_author_name(name) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Author name must be a non-empty string".into(),
        ))
    }
}

/// # Errors
///
/// Returns `CoreError::Validation` if `name` is not 2-16 characters long.
pub fn validate_magazine_name(name: &str) -> Result<(), CoreError> {
    if is_valid_magazine_name(name) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Magazine name must be {}-{} characters, got {}",
            MAGAZINE_NAME_LEN.start(),
            MAGAZINE_NAME_LEN.end(),
            char_len(name)
        )))
    }
}

/// # Errors
///
/// Returns `CoreError::Validation` if `category` is empty.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if is_valid_category(category) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Magazine category must be a non-empty string".into(),
        ))
    }
}

/// # Errors
///
/// Returns `CoreError::Validation` if `title` is not 5-50 characters long.
pub fn validate_article_title(title: &str) -> Result<(), CoreError> {
    if is_valid_article_title(title) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Article title must be {}-{} characters, got {}",
            ARTICLE_TITLE_LEN.start(),
            ARTICLE_TITLE_LEN.end(),
            char_len(title)
        )))
    }
}
