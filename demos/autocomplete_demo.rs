//! Auto-Complete Demo
//!
//! This example demonstrates the incremental auto-complete picker and a
//! translation catalog applied to question text and option labels. Type
//! to narrow the candidate list, press a digit to pick by index from the
//! full list, or press Enter to take the first match.

use quest::{translate_cached, CatalogTranslator, ConsoleTerminal, PromptError, Question};

fn main() -> Result<(), PromptError> {
    let mut terminal = ConsoleTerminal::new();

    println!("Starting quest auto-complete demo");
    println!("=================================");
    println!();

    let branch = Question::new("Switch to branch")
        .with_options(["main", "develop", "release/1.4", "feature/prompts"])
        .with_auto_complete(true)
        .build()?
        .ask(&mut terminal)?;
    println!("  branch: {:?}", branch);

    let catalog = CatalogTranslator::new()
        .with_phrase("Pick a fruit", "Choisissez un fruit")
        .with_phrase("apple", "pomme")
        .with_phrase("cherry", "cerise");
    println!(
        "  (catalog translates \"apple\" to \"{}\")",
        translate_cached(&catalog, "apple")
    );

    let fruit = Question::new("Pick a fruit")
        .with_options(["apple", "apricot", "banana", "cherry"])
        .with_translator(catalog)
        .with_auto_complete(true)
        .build()?
        .ask(&mut terminal)?;
    println!("  fruit: {:?}", fruit);

    Ok(())
}
