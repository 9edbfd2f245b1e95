//! Magazine repository: registration, silent setters, and magazine-side
//! relationship queries including the cross-magazine `top_publisher`.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use mast_core::entities::{Article, Author, Magazine};
use mast_core::enums::EntityType;
use mast_core::responses::MagazineReport;
use mast_core::validation::{validate_category, validate_magazine_name};

use crate::error::IndexError;
use crate::service::MastService;

impl MastService {
    /// # Errors
    ///
    /// Returns `IndexError::Core` if `name` is not 2-16 characters or
    /// `category` is empty. Nothing is registered on error.
    pub fn create_magazine(&mut self, name: &str, category: &str) -> Result<Magazine, IndexError> {
        validate_magazine_name(name)?;
        validate_category(category)?;
        let id = self.store_mut().generate_id(EntityType::Magazine.id_prefix())?;
        let magazine = Magazine::new(id, name, category)?;

        tracing::debug!(id = magazine.id(), name, category, "registered magazine");
        self.store_mut().push_magazine(magazine.clone());
        Ok(magazine)
    }

    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no magazine has this ID.
    pub fn get_magazine(&self, id: &str) -> Result<&Magazine, IndexError> {
        self.store()
            .magazine(id)
            .ok_or_else(|| IndexError::not_found(EntityType::Magazine, id))
    }

    /// Every magazine ever registered, in registration order.
    #[must_use]
    pub fn magazines(&self) -> &[Magazine] {
        self.store().magazines()
    }

    /// Rename a magazine. An invalid name is dropped without an error.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no magazine has this ID.
    pub fn set_magazine_name(&mut self, id: &str, name: &str) -> Result<(), IndexError> {
        let magazine = self
            .store_mut()
            .magazine_mut(id)
            .ok_or_else(|| IndexError::not_found(EntityType::Magazine, id))?;
        if !magazine.set_name(name) {
            tracing::debug!(id, name, "ignored invalid magazine name");
        }
        Ok(())
    }

    /// Recategorize a magazine. An empty category is dropped without an error.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no magazine has this ID.
    pub fn set_magazine_category(&mut self, id: &str, category: &str) -> Result<(), IndexError> {
        let magazine = self
            .store_mut()
            .magazine_mut(id)
            .ok_or_else(|| IndexError::not_found(EntityType::Magazine, id))?;
        if !magazine.set_category(category) {
            tracing::debug!(id, category, "ignored invalid magazine category");
        }
        Ok(())
    }

    /// Articles published in this magazine, in registry order.
    #[must_use]
    pub fn articles_in_magazine(&self, magazine_id: &str) -> Vec<&Article> {
        self.store()
            .articles()
            .iter()
            .filter(|article| article.magazine_id() == magazine_id)
            .collect()
    }

    /// Distinct authors with at least one article here, first occurrence first.
    #[must_use]
    pub fn contributors(&self, magazine_id: &str) -> Vec<&Author> {
        let ids: IndexSet<&str> = self
            .articles_in_magazine(magazine_id)
            .into_iter()
            .map(|article| article.author_id())
            .collect();
        ids.into_iter()
            .filter_map(|id| self.store().author(id))
            .collect()
    }

    /// Titles of this magazine's articles; `None` when it has none.
    #[must_use]
    pub fn article_titles(&self, magazine_id: &str) -> Option<Vec<&str>> {
        let titles: Vec<&str> = self
            .articles_in_magazine(magazine_id)
            .into_iter()
            .map(|article| article.title())
            .collect();
        (!titles.is_empty()).then_some(titles)
    }

    /// Contributors with more than `prolific_threshold` articles in this
    /// magazine, in contributor order; `None` when no one qualifies.
    #[must_use]
    pub fn contributing_authors(&self, magazine_id: &str) -> Option<Vec<&Author>> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for article in self.articles_in_magazine(magazine_id) {
            *counts.entry(article.author_id()).or_default() += 1;
        }

        let threshold = self.query_config().prolific_threshold;
        let prolific: Vec<&Author> = counts
            .into_iter()
            .filter(|&(_, count)| count > threshold)
            .filter_map(|(id, _)| self.store().author(id))
            .collect();
        (!prolific.is_empty()).then_some(prolific)
    }

    /// The magazine with the most articles across the whole registry.
    ///
    /// Ties go to the magazine registered first. `None` when either the
    /// magazine or the article registry is empty.
    #[must_use]
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let store = self.store();
        if store.magazines().is_empty() || store.articles().is_empty() {
            return None;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for article in store.articles() {
            *counts.entry(article.magazine_id()).or_default() += 1;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in store.magazines() {
            let count = counts.get(magazine.id()).copied().unwrap_or(0);
            // Strictly greater keeps the earliest magazine on ties.
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }

    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no magazine has this ID.
    pub fn magazine_report(&self, magazine_id: &str) -> Result<MagazineReport, IndexError> {
        let magazine = self.get_magazine(magazine_id)?;
        let to_owned =
            |authors: Vec<&Author>| -> Vec<Author> { authors.into_iter().cloned().collect() };
        Ok(MagazineReport {
            magazine: magazine.clone(),
            article_count: self.articles_in_magazine(magazine_id).len(),
            article_titles: self
                .article_titles(magazine_id)
                .map(|titles| titles.into_iter().map(String::from).collect()),
            contributors: to_owned(self.contributors(magazine_id)),
            contributing_authors: self.contributing_authors(magazine_id).map(to_owned),
        })
    }
}
