//! Shared test utilities for mast-index unit tests.

pub(crate) mod helpers {
    use mast_core::entities::{Author, Magazine};

    use crate::service::MastService;

    /// Create an empty service with default query settings.
    pub fn test_service() -> MastService {
        MastService::new()
    }

    /// Register an author, panicking on invalid input.
    pub fn author(svc: &mut MastService, name: &str) -> Author {
        svc.create_author(name).unwrap()
    }

    /// Register a magazine, panicking on invalid input.
    pub fn magazine(svc: &mut MastService, name: &str, category: &str) -> Magazine {
        svc.create_magazine(name, category).unwrap()
    }

    /// Write `count` articles with distinct valid titles.
    pub fn write_articles(svc: &mut MastService, author: &Author, magazine: &Magazine, count: usize) {
        for i in 0..count {
            svc.add_article(author.id(), magazine.id(), &format!("{} piece #{i}", author.name()))
                .unwrap();
        }
    }
}
