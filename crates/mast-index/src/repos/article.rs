//! Article repository: the only way to create an author/magazine relationship.

use mast_core::entities::{Article, Author, Magazine};
use mast_core::enums::EntityType;
use mast_core::validation::validate_article_title;

use crate::error::IndexError;
use crate::service::MastService;

impl MastService {
    /// Register a new article linking `author_id` to `magazine_id`.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Core` if the title is not 5-50 characters, or
    /// `IndexError::NotFound` if either reference is not registered. The
    /// registry is unchanged on error.
    pub fn create_article(
        &mut self,
        author_id: &str,
        magazine_id: &str,
        title: &str,
    ) -> Result<Article, IndexError> {
        validate_article_title(title)?;
        if self.store().author(author_id).is_none() {
            return Err(IndexError::not_found(EntityType::Author, author_id));
        }
        if self.store().magazine(magazine_id).is_none() {
            return Err(IndexError::not_found(EntityType::Magazine, magazine_id));
        }

        let id = self.store_mut().generate_id(EntityType::Article.id_prefix())?;
        let article = Article::new(id, author_id, magazine_id, title)?;

        tracing::debug!(
            id = article.id(),
            author_id,
            magazine_id,
            "registered article"
        );
        self.store_mut().push_article(article.clone());
        Ok(article)
    }

    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no article has this ID.
    pub fn get_article(&self, id: &str) -> Result<&Article, IndexError> {
        self.store()
            .article(id)
            .ok_or_else(|| IndexError::not_found(EntityType::Article, id))
    }

    /// Every article ever registered, in registration order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        self.store().articles()
    }

    /// Titles are fixed at construction: the new value is always dropped.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no article has this ID.
    pub fn set_article_title(&mut self, id: &str, title: &str) -> Result<(), IndexError> {
        let article = self
            .store_mut()
            .article_mut(id)
            .ok_or_else(|| IndexError::not_found(EntityType::Article, id))?;
        article.set_title(title);
        tracing::debug!(id, title, "ignored article title change");
        Ok(())
    }

    #[must_use]
    pub fn article_author(&self, article: &Article) -> Option<&Author> {
        self.store().author(article.author_id())
    }

    #[must_use]
    pub fn article_magazine(&self, article: &Article) -> Option<&Magazine> {
        self.store().magazine(article.magazine_id())
    }
}
