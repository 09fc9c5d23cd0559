//! Localization Module
//!
//! Narrow translation surface the prompt machinery calls through. A
//! translator maps display text to localized text; it is pure, so results
//! for identical input can be cached for the life of the process.
//!
//! ## Module Structure
//!
//! - `translator` - The `Translate` trait, identity and catalog
//!   implementations, and the process-wide memoizing wrapper

pub mod translator;

// Re-export main types for convenience
pub use translator::{translate_cached, CatalogTranslator, NullTranslator, Translate};
