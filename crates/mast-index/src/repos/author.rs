//! Author repository: registration and author-side relationship queries.

use indexmap::IndexSet;

use mast_core::entities::{Article, Author, Magazine};
use mast_core::enums::EntityType;
use mast_core::responses::AuthorProfile;
use mast_core::validation::validate_author_name;

use crate::error::IndexError;
use crate::service::MastService;

impl MastService {
    /// # Errors
    ///
    /// Returns `IndexError::Core` if `name` is empty.
    pub fn create_author(&mut self, name: &str) -> Result<Author, IndexError> {
        validate_author_name(name)?;
        let id = self.store_mut().generate_id(EntityType::Author.id_prefix())?;
        let author = Author::new(id, name)?;

        tracing::debug!(id = author.id(), name, "registered author");
        self.store_mut().push_author(author.clone());
        Ok(author)
    }

    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no author has this ID.
    pub fn get_author(&self, id: &str) -> Result<&Author, IndexError> {
        self.store()
            .author(id)
            .ok_or_else(|| IndexError::not_found(EntityType::Author, id))
    }

    #[must_use]
    pub fn authors(&self) -> &[Author] {
        self.store().authors()
    }

    /// Articles written by this author, in registry order.
    #[must_use]
    pub fn articles_by_author(&self, author_id: &str) -> Vec<&Article> {
        self.store()
            .articles()
            .iter()
            .filter(|article| article.author_id() == author_id)
            .collect()
    }

    /// Distinct magazines this author has written for, first occurrence first.
    #[must_use]
    pub fn magazines_for_author(&self, author_id: &str) -> Vec<&Magazine> {
        let ids: IndexSet<&str> = self
            .articles_by_author(author_id)
            .into_iter()
            .map(|article| article.magazine_id())
            .collect();
        ids.into_iter()
            .filter_map(|id| self.store().magazine(id))
            .collect()
    }

    /// Register a new article by this author. Same contract as
    /// [`MastService::create_article`].
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Core` for an invalid title, or
    /// `IndexError::NotFound` for an unregistered author or magazine.
    pub fn add_article(
        &mut self,
        author_id: &str,
        magazine_id: &str,
        title: &str,
    ) -> Result<Article, IndexError> {
        self.create_article(author_id, magazine_id, title)
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// `None` when the author has written for no magazine at all.
    #[must_use]
    pub fn topic_areas(&self, author_id: &str) -> Option<Vec<&str>> {
        let magazines = self.magazines_for_author(author_id);
        if magazines.is_empty() {
            return None;
        }
        let categories: IndexSet<&str> = magazines.into_iter().map(|m| m.category()).collect();
        Some(categories.into_iter().collect())
    }

    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no author has this ID.
    pub fn author_profile(&self, author_id: &str) -> Result<AuthorProfile, IndexError> {
        let author = self.get_author(author_id)?;
        Ok(AuthorProfile {
            author: author.clone(),
            articles: self
                .articles_by_author(author_id)
                .into_iter()
                .cloned()
                .collect(),
            magazines: self
                .magazines_for_author(author_id)
                .into_iter()
                .cloned()
                .collect(),
            topic_areas: self
                .topic_areas(author_id)
                .map(|areas| areas.into_iter().map(String::from).collect()),
        })
    }
}
