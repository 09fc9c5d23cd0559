//! quest - Interactive terminal question prompts
//!
//! This library renders a question to a terminal, collects a response via
//! line input, single-keystroke shortcuts, or an incremental auto-complete
//! picker, and coerces the response to a typed answer.
//!
//! # Features
//!
//! - **Typed Answers**: text, integer, float, boolean, and date answers
//!   with coercion selected by a closed enum
//! - **Defaults**: empty responses fall back to a configured default
//! - **Option Shortcuts**: every option gets a unique single-character
//!   alias, derived deterministically and rendered underlined
//! - **Auto-Complete**: keystroke-driven candidate filtering with digit
//!   selection and guaranteed screen cleanup
//! - **Localization**: question text and option labels flow through a
//!   pluggable, cacheable translation port
//! - **Testable Terminals**: the terminal is a trait; a scripted
//!   implementation drives prompts in tests without a console
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # fn main() -> Result<(), quest::PromptError> {
//! use quest::{AnswerKind, ConsoleTerminal, Question};
//!
//! let mut terminal = ConsoleTerminal::new();
//!
//! let proceed = Question::new("Apply changes?")
//!     .with_kind(AnswerKind::Boolean)
//!     .with_default(true)
//!     .build()?
//!     .ask(&mut terminal)?;
//!
//! if let Some(answer) = proceed {
//!     println!("answered: {}", answer);
//! }
//! # Ok(())
//! # }
//! ```

pub mod i18n;
pub mod prompt;
pub mod terminal;

// Re-export commonly used types for convenience
pub use i18n::{translate_cached, CatalogTranslator, NullTranslator, Translate};
pub use prompt::{Answer, AnswerKind, Prompt, PromptConfig, PromptError, Question};
pub use terminal::{ConsoleTerminal, Keystroke, ScriptedTerminal, Terminal};
