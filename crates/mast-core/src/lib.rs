//! # mast-core
//!
//! Core types, validation rules, and error types for Masthead.
//!
//! This crate provides the foundational types shared across all Masthead crates:
//! - Entity structs for authors, magazines, and the articles joining them
//! - Construction-time validation rules and the silent setter predicates
//! - ID prefix constants and formatting helpers
//! - Cross-cutting error types
//! - Serializable query response snapshots

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod validation;
