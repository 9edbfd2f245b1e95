//! Entity structs for the author/magazine relationship.
//!
//! `Author` and `Magazine` hold identity only. `Article` is the join record
//! referencing exactly one of each by ID; every relationship is derived from
//! the ordered article list held by the registry in `mast-index`.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod article;
mod author;
mod magazine;

pub use article::Article;
pub use author::Author;
pub use magazine::Magazine;
