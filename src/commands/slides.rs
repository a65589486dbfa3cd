//! Slides command implementation.
//!
//! Lists a deck with document availability, or prints the markup of one
//! slide. Missing documents are reported and never abort the command.

use super::models::SlidesArgs;
use crate::documents::{Deck, DeckReport, DocumentReader, DocumentStatus};
use anyhow::Result;
use log::{info, warn};

/// Execute the slides command
///
/// **Public** - main entry point called from main.rs
pub fn execute_slides(args: &SlidesArgs) -> Result<DeckReport> {
    let deck = Deck::get(args.deck);
    let reader = DocumentReader::new(&args.documents_root);

    info!(
        "Deck '{}' ({} slides) from {}",
        deck.title,
        deck.len(),
        reader.root().display()
    );

    match args.slide {
        Some(number) => print_slide(deck, &reader, number),
        None => Ok(list_deck(deck, &reader)),
    }
}

/// Validate slides arguments
pub fn validate_slides_args(args: &SlidesArgs) -> Result<()> {
    let deck = Deck::get(args.deck);

    if let Some(number) = args.slide {
        if number == 0 || number > deck.len() {
            anyhow::bail!(
                "Slide {} is out of range (deck '{}' has {} slides)",
                number,
                deck.title,
                deck.len()
            );
        }
    }

    Ok(())
}

fn list_deck(deck: &Deck, reader: &DocumentReader) -> DeckReport {
    let report = reader.check_deck(deck);

    println!("{}", deck.title);
    for (index, slide) in deck.slides.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, slide.title);
        for status in report.documents.iter().filter(|d| d.slide == index) {
            let mark = if status.available { "✓" } else { "✗" };
            println!("        {} {}", mark, status.name);
        }
    }

    println!();
    println!(
        "{} of {} documents available",
        report.available_count(),
        report.documents.len()
    );

    report
}

fn print_slide(deck: &Deck, reader: &DocumentReader, number: usize) -> Result<DeckReport> {
    let index = number.saturating_sub(1);
    let Some(slide) = deck.slide(index) else {
        anyhow::bail!("Slide {} is out of range ({} slides)", number, deck.len());
    };

    println!("{}", slide.position_label(index, deck.len()));
    if let Some(note) = slide.note {
        println!("\n{}", note);
    }

    let mut documents = Vec::with_capacity(slide.documents.len());
    for name in slide.documents.iter().copied() {
        let available = match reader.read(name) {
            Ok(markup) => {
                println!("\n{}", markup);
                true
            }
            Err(e) => {
                warn!("{}", e);
                eprintln!("File not found: {}", name);
                false
            }
        };

        documents.push(DocumentStatus {
            slide: index,
            name,
            available,
        });
    }

    Ok(DeckReport { documents })
}
