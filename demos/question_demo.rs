//! Question Demo
//!
//! This example walks through the basic question kinds: free text with a
//! default, booleans with keystroke shortcuts, numeric coercion, and an
//! option map resolving to non-string values.

use quest::{AnswerKind, ConsoleTerminal, PromptError, Question};

fn main() -> Result<(), PromptError> {
    let mut terminal = ConsoleTerminal::new();

    println!("Starting quest question demo");
    println!("============================");
    println!();

    let city = Question::new("Which city are you in")
        .with_default("nowhere")
        .build()?
        .ask(&mut terminal)?;
    println!("  city: {:?}", city);

    let deploy = Question::new("Deploy now?")
        .with_kind(AnswerKind::Boolean)
        .with_default(false)
        .build()?
        .ask(&mut terminal)?;
    println!("  deploy: {:?}", deploy);

    let retries = Question::new("Retry limit")
        .with_kind(AnswerKind::Integer)
        .with_default(5)
        .build()?
        .ask(&mut terminal)?;
    println!("  retries: {:?}", retries);

    let size = Question::new("Instance size")
        .with_kind(AnswerKind::Integer)
        .with_option_map([("small", 1), ("medium", 2), ("large", 4)])
        .build()?
        .ask(&mut terminal)?;
    println!("  size: {:?}", size);

    Ok(())
}
