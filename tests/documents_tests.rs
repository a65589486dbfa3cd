use injury_insights::commands::{execute_slides, validate_slides_args, SlidesArgs};
use injury_insights::documents::{Deck, DeckId, DocumentReader};
use std::path::Path;

fn write_document(root: &Path, name: &str, markup: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, markup).unwrap();
}

#[test]
fn test_deck_sizes() {
    assert_eq!(Deck::get(DeckId::Population).len(), 13);
    assert_eq!(Deck::get(DeckId::Expenditure).len(), 14);
}

#[test]
fn test_every_deck_document_is_relative_html() {
    for id in [DeckId::Population, DeckId::Expenditure] {
        for name in Deck::get(id).documents() {
            assert!(name.ends_with(".html"), "{}", name);
            assert!(!Path::new(name).is_absolute(), "{}", name);
        }
    }
}

#[test]
fn test_complete_deck_reports_complete() {
    let dir = tempfile::tempdir().unwrap();
    let deck = Deck::get(DeckId::Expenditure);
    for name in deck.documents() {
        write_document(dir.path(), name, "<div></div>");
    }

    let report = DocumentReader::new(dir.path()).check_deck(deck);
    assert!(report.is_complete());
    assert_eq!(report.available_count(), deck.documents().count());
}

#[test]
fn test_missing_document_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let deck = Deck::get(DeckId::Population);
    for name in deck.documents().skip(1) {
        write_document(dir.path(), name, "<div></div>");
    }

    let report = DocumentReader::new(dir.path()).check_deck(deck);
    let missing: Vec<&str> = report.missing().map(|d| d.name).collect();
    assert_eq!(missing, vec!["html/injures_by_type_bar_chart.html"]);
}

#[test]
fn test_reader_refuses_names_outside_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("decks");
    std::fs::create_dir_all(&root).unwrap();
    write_document(dir.path(), "secret.html", "<p>secret</p>");

    let reader = DocumentReader::new(&root);
    assert!(reader.read("../secret.html").is_err());
    assert!(reader.read("").is_err());
    assert!(!reader.exists("../secret.html"));
}

#[test]
fn test_print_single_slide() {
    let dir = tempfile::tempdir().unwrap();
    write_document(
        dir.path(),
        "html/crude_rate_explanation.html",
        "<p>Crude rate</p>",
    );

    let args = SlidesArgs {
        deck: DeckId::Population,
        documents_root: dir.path().to_path_buf(),
        slide: Some(11),
    };

    validate_slides_args(&args).unwrap();
    let report = execute_slides(&args).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.documents.len(), 1);
}

#[test]
fn test_slide_number_out_of_range() {
    let args = SlidesArgs {
        deck: DeckId::Population,
        slide: Some(14),
        ..Default::default()
    };
    assert!(validate_slides_args(&args).is_err());
}
