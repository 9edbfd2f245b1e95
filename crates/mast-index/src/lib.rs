//! # mast-index
//!
//! In-memory relationship registry for authors, magazines, and articles.
//!
//! The article list is the single source of truth: every author/magazine
//! association is recomputed by scanning it, so derived results can never
//! drift from the registry. Registries are append-only for the lifetime of
//! the store.
//!
//! Appends take `&mut self` and queries take `&self`, so a scan can never
//! observe a concurrent append. Callers sharing a service across threads
//! wrap it in their own lock.

pub mod error;
pub mod repos;
pub mod service;
pub mod telemetry;

#[cfg(test)]
mod test_support;

use std::collections::HashMap;

use mast_core::entities::{Article, Author, Magazine};
use mast_core::ids::format_id;

use error::IndexError;

/// Ordered, append-only storage for all three entity kinds.
///
/// Vectors keep registration order; the position maps only accelerate
/// lookup by ID and never change what a scan returns.
#[derive(Debug, Default)]
pub struct MastStore {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
    author_pos: HashMap<String, usize>,
    magazine_pos: HashMap<String, usize>,
    article_pos: HashMap<String, usize>,
    next_seq: u32,
}

impl MastStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a prefixed ID unique within this store, e.g. `"art-0000000c"`.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::IdsExhausted` once the 32-bit sequence runs out.
    pub fn generate_id(&mut self, prefix: &'static str) -> Result<String, IndexError> {
        let seq = self.next_seq;
        self.next_seq = seq
            .checked_add(1)
            .ok_or(IndexError::IdsExhausted(prefix))?;
        Ok(format_id(prefix, seq))
    }

    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    #[must_use]
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn author(&self, id: &str) -> Option<&Author> {
        self.author_pos.get(id).map(|&i| &self.authors[i])
    }

    #[must_use]
    pub fn magazine(&self, id: &str) -> Option<&Magazine> {
        self.magazine_pos.get(id).map(|&i| &self.magazines[i])
    }

    #[must_use]
    pub fn article(&self, id: &str) -> Option<&Article> {
        self.article_pos.get(id).map(|&i| &self.articles[i])
    }

    pub(crate) fn magazine_mut(&mut self, id: &str) -> Option<&mut Magazine> {
        let i = *self.magazine_pos.get(id)?;
        self.magazines.get_mut(i)
    }

    pub(crate) fn article_mut(&mut self, id: &str) -> Option<&mut Article> {
        let i = *self.article_pos.get(id)?;
        self.articles.get_mut(i)
    }

    pub(crate) fn push_author(&mut self, author: Author) {
        self.author_pos
            .insert(author.id().to_string(), self.authors.len());
        self.authors.push(author);
    }

    pub(crate) fn push_magazine(&mut self, magazine: Magazine) {
        self.magazine_pos
            .insert(magazine.id().to_string(), self.magazines.len());
        self.magazines.push(magazine);
    }

    pub(crate) fn push_article(&mut self, article: Article) {
        self.article_pos
            .insert(article.id().to_string(), self.articles.len());
        self.articles.push(article);
    }
}
