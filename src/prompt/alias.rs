//! Alias Deriver Module
//!
//! Assigns each option label a unique single-character shortcut. Labels
//! are processed in option order and each claims the first of its own
//! characters not already taken; the assignment therefore depends on the
//! input order, which is accepted behavior.

use super::error::PromptError;

/// Single-character shortcuts for option labels, in assignment order.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<(char, String)>,
}

impl AliasTable {
    /// Install caller-supplied aliases without deriving any further ones.
    ///
    /// Each pair must reference a known label and use a free character.
    pub fn seeded(labels: &[String], seed: &[(char, String)]) -> Result<Self, PromptError> {
        let mut table = AliasTable::default();
        for (alias, label) in seed {
            if !labels.iter().any(|l| l == label) {
                return Err(PromptError::UnknownAliasLabel {
                    label: label.clone(),
                });
            }
            if table.contains(*alias) {
                return Err(PromptError::AliasConflict { alias: *alias });
            }
            table.entries.push((*alias, label.clone()));
        }
        Ok(table)
    }

    /// Derive a shortcut for every multi-character label, honoring seeds.
    ///
    /// Skipped entirely when no label is longer than one character: a
    /// single-character label already behaves as the full token. Fails
    /// eagerly when a label's characters are exhausted before a free one
    /// is found.
    pub fn derive(labels: &[String], seed: &[(char, String)]) -> Result<Self, PromptError> {
        let mut table = Self::seeded(labels, seed)?;

        let max_len = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if max_len <= 1 {
            return Ok(table);
        }

        for label in labels {
            if label.chars().count() <= 1 || table.alias_for(label).is_some() {
                continue;
            }
            let free = label.chars().find(|c| !table.contains(*c));
            match free {
                Some(alias) => table.entries.push((alias, label.clone())),
                None => {
                    return Err(PromptError::AliasExhausted {
                        label: label.clone(),
                    })
                }
            }
        }

        Ok(table)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the character already aliases some label.
    pub fn contains(&self, alias: char) -> bool {
        self.entries.iter().any(|(c, _)| *c == alias)
    }

    /// The shortcut assigned to a label, if any.
    pub fn alias_for(&self, label: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|(_, l)| l == label)
            .map(|(c, _)| *c)
    }

    /// Resolve a single-character input to its full label.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let mut chars = input.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        self.entries
            .iter()
            .find(|(c, _)| *c == first)
            .map(|(_, label)| label.as_str())
    }

    /// Resolve case-insensitively: exact, then uppercase, then lowercase.
    pub fn resolve_fold(&self, input: &str) -> Option<&str> {
        self.resolve(input)
            .or_else(|| self.resolve(&input.to_uppercase()))
            .or_else(|| self.resolve(&input.to_lowercase()))
    }
}
