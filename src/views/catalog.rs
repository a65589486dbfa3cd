//! The chart views and the aggregation each one requests.
//!
//! Each view maps to exactly one (subset, key, mode, age policy) request and
//! one chart layout.

use crate::aggregator::{Dimension, GroupingRequest, Mode, UnknownAgePolicy};
use crate::loader::schema::SubsetKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart shapes the display surface understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Pie,
    StackedBar,
    GroupedBar,
}

impl ChartKind {
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::StackedBar => "stacked-bar",
            ChartKind::GroupedBar => "grouped-bar",
        }
    }
}

/// Which number a chart plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Measure {
    Cases,
    Percentage,
}

impl Measure {
    pub fn label(self) -> &'static str {
        match self {
            Measure::Cases => "Number of Cases",
            Measure::Percentage => "Percentage",
        }
    }
}

/// Axis bindings and title for one view
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    /// Category axis, or slice names for a pie
    pub x: Dimension,
    /// Value axis, or slice sizes for a pie
    pub y: Measure,
    /// Series split, if any
    pub color: Option<Dimension>,
}

/// Every chart the dashboards offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Total cases per injury type
    TotalByType,
    /// Each injury type's share of all cases
    ShareByType,
    /// Total per injury type, pre-split by listed age bands
    TotalByTypeAgeSplit,
    /// Share of all cases per injury type and listed age band
    ShareByTypeAgeSplit,
    /// Cases per age band, stacked by injury type
    StackedByAge,
    /// Injury type mix within each age band
    PercentageByAge,
    /// Cases per year, grouped by injury type
    AnnualByYear,
}

impl View {
    pub const ALL: [View; 7] = [
        View::TotalByType,
        View::ShareByType,
        View::TotalByTypeAgeSplit,
        View::ShareByTypeAgeSplit,
        View::StackedByAge,
        View::PercentageByAge,
        View::AnnualByYear,
    ];

    /// Stable identifier used on the command line and in file names
    pub fn id(self) -> &'static str {
        match self {
            View::TotalByType => "total-by-type",
            View::ShareByType => "share-by-type",
            View::TotalByTypeAgeSplit => "total-by-type-age-split",
            View::ShareByTypeAgeSplit => "share-by-type-age-split",
            View::StackedByAge => "stacked-by-age",
            View::PercentageByAge => "percentage-by-age",
            View::AnnualByYear => "annual-by-year",
        }
    }

    pub fn subset(self) -> SubsetKind {
        match self {
            View::AnnualByYear => SubsetKind::YearIndexed,
            _ => SubsetKind::AgeIndexed,
        }
    }

    /// The aggregation this view needs
    pub fn request(self) -> GroupingRequest {
        use Dimension::{AgeGroup, InjuryType, Year};

        match self {
            View::TotalByType => GroupingRequest::by(InjuryType),
            View::ShareByType => GroupingRequest::by(InjuryType).with_mode(Mode::PercentageOfTotal),
            View::TotalByTypeAgeSplit => GroupingRequest::by_pair(InjuryType, AgeGroup)
                .with_unknown_ages(UnknownAgePolicy::Drop),
            View::ShareByTypeAgeSplit => GroupingRequest::by_pair(InjuryType, AgeGroup)
                .with_mode(Mode::PercentageOfTotal)
                .with_unknown_ages(UnknownAgePolicy::Drop),
            View::StackedByAge => GroupingRequest::by_pair(AgeGroup, InjuryType),
            View::PercentageByAge => {
                GroupingRequest::by_pair(AgeGroup, InjuryType).with_mode(Mode::PercentageOfGroup)
            }
            View::AnnualByYear => GroupingRequest::by_pair(Year, InjuryType),
        }
    }

    pub fn chart(self) -> ChartSpec {
        use Dimension::{AgeGroup, InjuryType, Year};

        match self {
            View::TotalByType => ChartSpec {
                kind: ChartKind::Bar,
                title: "Total Number of Injuries by Type",
                x: InjuryType,
                y: Measure::Cases,
                color: None,
            },
            View::ShareByType => ChartSpec {
                kind: ChartKind::Pie,
                title: "Share of Injuries by Type",
                x: InjuryType,
                y: Measure::Percentage,
                color: None,
            },
            View::TotalByTypeAgeSplit => ChartSpec {
                kind: ChartKind::StackedBar,
                title: "Total Number of Injuries by Type and Age Group",
                x: InjuryType,
                y: Measure::Cases,
                color: Some(AgeGroup),
            },
            View::ShareByTypeAgeSplit => ChartSpec {
                kind: ChartKind::Pie,
                title: "Share of Injuries by Type (Age Group Breakdown)",
                x: InjuryType,
                y: Measure::Percentage,
                color: None,
            },
            View::StackedByAge => ChartSpec {
                kind: ChartKind::StackedBar,
                title: "Injury Cases by Age Group and Type",
                x: AgeGroup,
                y: Measure::Cases,
                color: Some(InjuryType),
            },
            View::PercentageByAge => ChartSpec {
                kind: ChartKind::StackedBar,
                title: "Percentage of Injury Cases by Age Group and Type",
                x: AgeGroup,
                y: Measure::Percentage,
                color: Some(InjuryType),
            },
            View::AnnualByYear => ChartSpec {
                kind: ChartKind::GroupedBar,
                title: "Annual Number of Injury Cases by Type",
                x: Year,
                y: Measure::Cases,
                color: Some(InjuryType),
            },
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_request_is_valid_for_its_subset() {
        for view in View::ALL {
            assert!(
                view.request().validate(view.subset()).is_ok(),
                "{} requests an invalid key",
                view
            );
        }
    }

    #[test]
    fn test_chart_axes_are_part_of_the_key() {
        for view in View::ALL {
            let spec = view.chart();
            let keys = view.request().keys;
            assert!(keys.contains(&spec.x), "{} plots a missing x", view);
            if let Some(color) = spec.color {
                assert!(keys.contains(&color), "{} colors by a missing key", view);
            }
        }
    }

    #[test]
    fn test_percentage_views_plot_percentages() {
        for view in View::ALL {
            let plots_percentage = view.chart().y == Measure::Percentage;
            let computes_percentage = view.request().mode != Mode::Sum;
            assert_eq!(plots_percentage, computes_percentage, "{}", view);
        }
    }

    #[test]
    fn test_ids_match_value_enum_names() {
        for view in View::ALL {
            let parsed = View::from_str(view.id(), false).unwrap();
            assert_eq!(parsed, view);
        }
    }
}
