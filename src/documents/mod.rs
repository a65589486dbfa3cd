//! Pre-rendered presentation decks and the reader that serves them.

pub mod deck;
pub mod reader;

pub use deck::{Deck, DeckId, Slide};
pub use reader::{DeckReport, DocumentReader, DocumentStatus};
