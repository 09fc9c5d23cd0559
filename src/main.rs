//! quest - Main Entry Point
//!
//! Interactive showcase of the question kinds the library supports:
//! typed line input, defaults, single-keystroke option shortcuts, and the
//! auto-complete picker.

use std::process;

use quest::{Answer, AnswerKind, ConsoleTerminal, PromptError, Question};

fn main() {
    tracing_subscriber::fmt::init();

    print_banner();

    match run() {
        Ok(_) => {
            println!("\nThanks for trying quest! Goodbye!");
        }
        Err(e) => {
            eprintln!("\nERROR: {}", e);
            eprintln!("Please check your terminal compatibility and try again.");
            process::exit(1);
        }
    }
}

fn print_banner() {
    println!("╭─────────────────────────────────────────────────╮");
    println!("│  quest - Interactive terminal question prompts  │");
    println!("╰─────────────────────────────────────────────────╯");
    println!();
}

fn run() -> Result<(), PromptError> {
    let mut terminal = ConsoleTerminal::new();

    let name = Question::new("What is your name")
        .with_default("anonymous")
        .build()?
        .ask(&mut terminal)?;
    report("name", &name);

    let proceed = Question::new("Run the remaining prompts?")
        .with_kind(AnswerKind::Boolean)
        .with_default(true)
        .build()?
        .ask(&mut terminal)?;
    report("proceed", &proceed);

    if !matches!(proceed, Some(Answer::Boolean(true))) {
        return Ok(());
    }

    let count = Question::new("How many items")
        .with_kind(AnswerKind::Integer)
        .with_default(3)
        .build()?
        .ask(&mut terminal)?;
    report("count", &count);

    let flavor = Question::new("Pick a flavor")
        .with_options(["vanilla", "chocolate", "strawberry"])
        .build()?
        .ask(&mut terminal)?;
    report("flavor", &flavor);

    let fruit = Question::new("Pick a fruit")
        .with_options(["apple", "apricot", "banana", "cherry"])
        .with_auto_complete(true)
        .build()?
        .ask(&mut terminal)?;
    report("fruit", &fruit);

    Ok(())
}

fn report(label: &str, answer: &Option<Answer>) {
    match answer {
        Some(value) => println!("  {} = {}", label, value),
        None => println!("  {} = (no answer)", label),
    }
}
