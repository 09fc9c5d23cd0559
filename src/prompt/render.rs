//! Prompt Renderer Module
//!
//! Builds the decoration appended to the question text: the option list
//! with alias characters emphasized and the default token uppercased, or
//! the bare default when there are no options.

use crate::terminal::Terminal;

use super::alias::AliasTable;
use super::answer::Answer;
use super::config::PromptConfig;
use super::options::OptionSet;

/// Build the prompt suffix for a question.
///
/// With aliases each option is rendered with its shortcut underlined;
/// with options but no aliases the plain joined list is used; with only a
/// default the `(default)` form is used; otherwise the suffix is empty.
pub fn prompt_suffix<T: Terminal + ?Sized>(
    options: &OptionSet,
    aliases: &AliasTable,
    default: Option<&Answer>,
    config: &PromptConfig,
    terminal: &T,
) -> String {
    let default_label = default.map(|value| value.to_string());
    let default_label = default_label.as_deref();

    if !aliases.is_empty() {
        let tokens: Vec<String> = options
            .labels()
            .iter()
            .map(|label| {
                decorate(
                    label,
                    aliases.alias_for(label),
                    default_label == Some(label.as_str()),
                    config,
                    terminal,
                )
            })
            .collect();
        return format!("[{}]", tokens.join("/"));
    }

    if !options.is_empty() {
        let tokens: Vec<String> = options
            .labels()
            .iter()
            .map(|label| {
                if default_label == Some(label.as_str()) && config.uppercase_default {
                    label.to_uppercase()
                } else {
                    label.clone()
                }
            })
            .collect();
        return format!("[{}]", tokens.join("/"));
    }

    match default_label {
        Some(label) => format!("({})", label),
        None => String::new(),
    }
}

fn decorate<T: Terminal + ?Sized>(
    label: &str,
    alias: Option<char>,
    is_default: bool,
    config: &PromptConfig,
    terminal: &T,
) -> String {
    let uppercase = is_default && config.uppercase_default;
    let shown = if uppercase {
        label.to_uppercase()
    } else {
        label.to_string()
    };

    match alias {
        Some(alias) => {
            let needle: String = if uppercase {
                alias.to_uppercase().collect()
            } else {
                alias.to_string()
            };
            if shown.contains(&needle) {
                shown.replacen(&needle, &terminal.underline(&needle), 1)
            } else {
                shown
            }
        }
        None => shown,
    }
}
