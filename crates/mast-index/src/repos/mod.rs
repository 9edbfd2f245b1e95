//! Repository modules implementing registration and relationship queries.
//!
//! Each module adds methods to `MastService` via `impl MastService` blocks.

pub mod article;
pub mod author;
pub mod magazine;
