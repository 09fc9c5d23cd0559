//! Prompt Module
//!
//! The question-asking machinery: typed answers, option normalization,
//! single-character alias shortcuts, prompt decoration, and the
//! auto-complete input loop.
//!
//! ## Module Structure
//!
//! - `answer` - Target kinds, the tagged answer value, and coercion
//! - `options` - Raw option specs normalized to labels plus a value lookup
//! - `alias` - Deterministic single-character shortcut derivation
//! - `render` - Prompt suffix decoration
//! - `autocomplete` - Incremental keystroke-driven filtering loop
//! - `question` - The `Question` builder and `Prompt::ask` orchestration
//! - `config` - Rendering and input-loop settings
//! - `error` - Error taxonomy

pub mod alias;
pub mod answer;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod options;
pub mod question;
pub mod render;

// Re-export main types for convenience
pub use alias::AliasTable;
pub use answer::{coerce, Answer, AnswerKind};
pub use autocomplete::FilterState;
pub use config::PromptConfig;
pub use error::PromptError;
pub use options::{OptionSet, OptionSource};
pub use question::{Prompt, Question};
