//! Prompt Error Module
//!
//! Error taxonomy for building and asking questions. Configuration
//! problems (alias derivation, duplicate labels) surface at build time;
//! parse and selection failures surface from `ask()`.

use std::io;

use thiserror::Error;

use super::answer::AnswerKind;

/// Errors surfaced while building or asking a question.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Every character of the label already aliases an earlier option.
    #[error("cannot determine an alias for option '{label}'")]
    AliasExhausted { label: String },

    /// An explicit alias character is already assigned.
    #[error("alias '{alias}' is already assigned to another option")]
    AliasConflict { alias: char },

    /// An explicit alias references a label that is not an option.
    #[error("alias target '{label}' does not match any option label")]
    UnknownAliasLabel { label: String },

    /// Two options normalized to the same display label.
    #[error("duplicate option label '{0}'")]
    DuplicateLabel(String),

    /// The response could not be coerced to the target kind.
    #[error("cannot parse '{value}' as {kind}")]
    Parse { kind: AnswerKind, value: String },

    /// A selection referenced a candidate that does not exist.
    #[error("selection {index} is out of range ({len} candidates)")]
    SelectionOutOfRange { index: usize, len: usize },

    /// Terminal I/O failure.
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = PromptError::AliasExhausted {
            label: "abc".to_string(),
        };
        assert!(err.to_string().contains("abc"));

        let err = PromptError::Parse {
            kind: AnswerKind::Integer,
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("integer"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_io_error_wraps() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "gone");
        let err = PromptError::from(io_err);
        assert!(matches!(err, PromptError::Io(_)));
    }
}
