//! Auto-Complete Loop Module
//!
//! Incremental keystroke-driven filtering over an option list. Each
//! iteration renders the prompt plus the visible candidates, reads one
//! decoded keystroke, and unconditionally restores the cursor and clears
//! the rendered block before acting on the key.

use regex::Regex;
use tracing::trace;

use crate::terminal::{Keystroke, Terminal};

use super::config::PromptConfig;
use super::error::PromptError;

/// Transient filtering state for one auto-complete session.
///
/// Candidates are recomputed from the full original list on every filter
/// change, never narrowed cumulatively.
#[derive(Debug, Clone)]
pub struct FilterState {
    filter: String,
    candidates: Vec<String>,
}

impl FilterState {
    pub fn new(labels: &[String]) -> Self {
        Self {
            filter: String::new(),
            candidates: labels.to_vec(),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Append a character to the filter and recompute candidates.
    pub fn push(&mut self, c: char, labels: &[String]) {
        self.filter.push(c);
        self.refilter(labels);
    }

    /// Drop the last filter character; no-op when already empty.
    pub fn pop(&mut self, labels: &[String]) {
        self.filter.pop();
        self.refilter(labels);
    }

    fn refilter(&mut self, labels: &[String]) {
        let pattern = format!("(?i){}", regex::escape(&self.filter));
        match Regex::new(&pattern) {
            Ok(matcher) => {
                self.candidates = labels
                    .iter()
                    .filter(|label| matcher.is_match(label))
                    .cloned()
                    .collect();
            }
            Err(_) => {
                let needle = self.filter.to_lowercase();
                self.candidates = labels
                    .iter()
                    .filter(|label| label.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
            }
        }
    }
}

/// Run the filtering loop until a candidate is chosen.
///
/// ENTER picks the first candidate of the filtered list; a digit picks by
/// index from the full option list regardless of the current filter. The
/// resolved label is echoed after the prompt as the loop's final output.
pub fn run_loop<T: Terminal + ?Sized>(
    prompt: &str,
    labels: &[String],
    config: &PromptConfig,
    terminal: &mut T,
) -> Result<String, PromptError> {
    let mut state = FilterState::new(labels);

    let resolved = loop {
        terminal.print_line(&format!("{}{}", prompt, state.filter()))?;
        let mut shown = 0;
        for (index, label) in state
            .candidates()
            .iter()
            .take(config.max_visible_candidates)
            .enumerate()
        {
            terminal.print_line(&format!("{} -> {}", index, label))?;
            shown += 1;
        }
        terminal.move_up(shown + 1)?;

        let width = prompt.chars().count() + state.filter().chars().count();
        terminal.move_right(width)?;

        // The rendered block is cleared no matter how the read went
        let key = terminal.read_key(true);
        terminal.move_left(width)?;
        terminal.clear_to_end_of_screen()?;
        let key = key?;

        match key {
            Keystroke::Enter => match state.candidates().first() {
                Some(label) => break label.clone(),
                None => {
                    return Err(PromptError::SelectionOutOfRange { index: 0, len: 0 });
                }
            },
            Keystroke::Char(c) if c.is_ascii_digit() => {
                let index = (c as usize) - ('0' as usize);
                match labels.get(index) {
                    Some(label) => break label.clone(),
                    None => {
                        return Err(PromptError::SelectionOutOfRange {
                            index,
                            len: labels.len(),
                        });
                    }
                }
            }
            Keystroke::Backspace => state.pop(labels),
            Keystroke::Char(c) => state.push(c, labels),
        }

        trace!(
            filter = state.filter(),
            candidates = state.candidates().len(),
            "auto-complete filter updated"
        );
    };

    terminal.print_line(&format!("{}{}", prompt, resolved))?;
    Ok(resolved)
}
