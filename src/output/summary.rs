//! Plain-text chart summary for the terminal.

use crate::aggregator::AggregationRow;
use crate::views::{ChartDocument, Measure};

const LABEL_WIDTH: usize = 44;
const BAR_WIDTH: usize = 30;

/// Render a boxed table of the first `max_rows` rows with a bar column
///
/// Bars are scaled to the largest plotted value in the whole document,
/// not just the rows shown.
pub fn render_summary(chart: &ChartDocument, max_rows: usize) -> String {
    let mut lines = Vec::new();
    let uses_percentage = chart.rows.iter().any(|r| r.percentage.is_some());

    let value_of = |row: &AggregationRow| {
        if uses_percentage {
            row.percentage.unwrap_or(0.0)
        } else {
            row.cases
        }
    };

    let peak = chart
        .rows
        .iter()
        .map(value_of)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "  {}{}{}{}{}{}{}",
            left,
            "━".repeat(LABEL_WIDTH + 2),
            mid,
            "━".repeat(14),
            mid,
            "━".repeat(BAR_WIDTH + 2),
            right
        )
    };

    lines.push(format!("  {} [{}]", chart.title, chart.kind.label()));
    lines.push(rule("┏", "┳", "┓"));
    lines.push(format!(
        "  ┃ {:<width$} ┃ {:>12} ┃ {:<bar$} ┃",
        key_header(chart),
        if uses_percentage { "%" } else { "CASES" },
        "",
        width = LABEL_WIDTH,
        bar = BAR_WIDTH
    ));
    lines.push(rule("┣", "╋", "┫"));

    for row in chart.rows.iter().take(max_rows) {
        let label = truncate(&row.keys.join(" / "), LABEL_WIDTH);
        let value = value_of(row);
        let bar_len = ((value / peak) * BAR_WIDTH as f64).round() as usize;

        let shown = if uses_percentage {
            format!("{:.2}%", value)
        } else {
            format_cases(value)
        };

        lines.push(format!(
            "  ┃ {:<width$} ┃ {:>12} ┃ {:<bar$} ┃",
            label,
            shown,
            "█".repeat(bar_len.min(BAR_WIDTH)),
            width = LABEL_WIDTH,
            bar = BAR_WIDTH
        ));
    }

    lines.push(rule("┗", "┻", "┛"));
    lines.push(format!("  Total cases: {}", format_cases(chart.total_cases)));

    if chart.rows.len() > max_rows {
        lines.push(format!(
            "  (Showing {} of {} rows)",
            max_rows,
            chart.rows.len()
        ));
    }

    lines.join("\n")
}

/// Key column labels, without the measure columns
fn key_header(chart: &ChartDocument) -> String {
    chart
        .columns
        .iter()
        .filter(|c| *c != Measure::Cases.label() && *c != Measure::Percentage.label())
        .cloned()
        .collect::<Vec<_>>()
        .join(" / ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Whole numbers without decimals, fractional values with two
fn format_cases(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{AggregationResult, AggregationRow, Dimension, Mode};
    use crate::views::View;

    fn chart(mode: Mode, rows: Vec<AggregationRow>) -> ChartDocument {
        let view = match mode {
            Mode::Sum => View::TotalByType,
            _ => View::ShareByType,
        };
        ChartDocument::from_result(
            view,
            &AggregationResult {
                dimensions: vec![Dimension::InjuryType],
                mode,
                rows,
            },
        )
    }

    #[test]
    fn test_summary_lists_rows_and_total() {
        let summary = render_summary(
            &chart(
                Mode::Sum,
                vec![
                    AggregationRow::new(vec!["Falls".into()], 30.0),
                    AggregationRow::new(vec!["Poisoning".into()], 5.0),
                ],
            ),
            10,
        );

        assert!(summary.contains("Total Number of Injuries by Type [bar]"));
        assert!(summary.contains("Falls"));
        assert!(summary.contains("Poisoning"));
        assert!(summary.contains("Total cases: 35"));
        assert!(summary.contains(&"█".repeat(BAR_WIDTH)));
        assert!(!summary.contains("Showing"));
    }

    #[test]
    fn test_summary_percentages_and_truncation() {
        let rows = vec![
            AggregationRow {
                percentage: Some(85.71),
                ..AggregationRow::new(vec!["Falls".into()], 30.0)
            },
            AggregationRow {
                percentage: Some(14.29),
                ..AggregationRow::new(vec!["Poisoning".into()], 5.0)
            },
        ];

        let summary = render_summary(&chart(Mode::PercentageOfTotal, rows), 1);

        assert!(summary.contains("85.71%"));
        assert!(!summary.contains("14.29%"));
        assert!(summary.contains("(Showing 1 of 2 rows)"));
    }

    #[test]
    fn test_truncate_and_format() {
        assert_eq!(truncate("Transport injuries", 8), "Trans...");
        assert_eq!(truncate("Falls", 8), "Falls");
        assert_eq!(format_cases(1200.0), "1200");
        assert_eq!(format_cases(12.5), "12.50");
    }
}
