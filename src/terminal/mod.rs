//! Terminal Capability Module
//!
//! This module isolates everything the prompt machinery needs from a
//! terminal behind a narrow trait, so the core can be driven by a real
//! console or by a scripted double in tests.
//!
//! ## Module Structure
//!
//! - `terminal` - The `Terminal` trait and decoded `Keystroke` events
//! - `console` - Crossterm/ANSI implementation for a real console
//! - `script` - Scripted in-memory implementation for tests and demos

pub mod console;
pub mod script;
pub mod terminal;

// Re-export main types for convenience
pub use console::ConsoleTerminal;
pub use script::ScriptedTerminal;
pub use terminal::{Keystroke, Terminal};
