//! Catalog of the pre-rendered presentation decks.

use clap::ValueEnum;
use serde::Serialize;

/// One slide: a title and the documents it embeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub title: &'static str,
    /// Document names relative to the documents root, in display order
    pub documents: &'static [&'static str],
    /// Explanatory text shown above the documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl Slide {
    const fn new(title: &'static str, documents: &'static [&'static str]) -> Self {
        Self {
            title,
            documents,
            note: None,
        }
    }

    /// "Slide 3 of 13: Title" for a zero-based index
    pub fn position_label(&self, index: usize, total: usize) -> String {
        format!("Slide {} of {}: {}", index + 1, total, self.title)
    }
}

/// The decks that ship with the dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DeckId {
    /// Injury and population statistics
    Population,
    /// Fall-related healthcare expenditure
    Expenditure,
}

/// A named, ordered list of slides
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub id: DeckId,
    pub title: &'static str,
    pub slides: &'static [Slide],
}

impl Deck {
    pub fn get(id: DeckId) -> &'static Deck {
        match id {
            DeckId::Population => &POPULATION_DECK,
            DeckId::Expenditure => &EXPENDITURE_DECK,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Bounds-checked slide lookup by zero-based index
    pub fn slide(&self, index: usize) -> Option<&'static Slide> {
        self.slides.get(index)
    }

    /// Every document the deck references, in slide order
    pub fn documents(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slides.iter().flat_map(|s| s.documents.iter().copied())
    }
}

const SERVICE_CATEGORIES_NOTE: &str = "Hospital services: public hospital outpatient, \
public hospital emergency department, public hospital admitted patient, private hospital \
services, medical imaging, dental expenditure. Home services: general practitioner services, \
allied health and other services, pharmaceutical benefits scheme, pathology, specialist services.";

static POPULATION_SLIDES: [Slide; 13] = [
    Slide::new("Injuries by Type (Bar Chart)", &["html/injures_by_type_bar_chart.html"]),
    Slide::new("Injuries by Type (Pie Chart)", &["html/injures_by_type_pie_chart.html"]),
    Slide::new(
        "Annual Number of Injury Cases by Type",
        &["html/annual_number_of_injury_cases_by_type.html"],
    ),
    Slide::new(
        "Age Standardised Rate of Death (Injury)",
        &["html/Age_Standardised_rate_of_death_Injury.html"],
    ),
    Slide::new(
        "Injuries by Age Causes (Stacked Bar Chart)",
        &["html/injures_by_age_causes_stacked_bar_chart.html"],
    ),
    Slide::new(
        "Injuries by Age Causes (Stacked Bar Chart Percentage)",
        &["html/injures_by_age_causes_stacked_bar_percentage.html"],
    ),
    Slide::new(
        "Population by Age Group and Gender",
        &["html/population_by_age_group_and_sex_dashboard.html"],
    ),
    Slide::new(
        "Population Pyramid Comparison (2022 & 2032)",
        &["html/pyramid_2022.html", "html/pyramid_2032.html"],
    ),
    Slide::new("Population by Year", &["html/population_by_year_dashboard.html"]),
    Slide::new(
        "Predicted Total Population by Area",
        &["html/predicted_total_pop_by_area.html"],
    ),
    Slide::new("Crude rate", &["html/crude_rate_explanation.html"]),
    Slide::new(
        "Predicted Injuries by Age Causes (Stacked Bar Chart)",
        &["html/predicted_injures_by_age_causes_stacked_bar_chart.html"],
    ),
    Slide::new(
        "Predicted Injuries by Age Causes (Stacked Bar Chart Percentage)",
        &["html/predicted_injures_by_age_causes_stacked_bar_chart_percentage.html"],
    ),
];

static EXPENDITURE_SLIDES: [Slide; 14] = [
    Slide::new(
        "Total Expenditure Over Years",
        &["html_cost/total_expenditure_over_years_line.html"],
    ),
    Slide::new(
        "Expenditure Over Year by Area of Expenditure",
        &["html_cost/area_of_expenditure_over_years.html"],
    ),
    Slide::new(
        "Details of Expenditure",
        &["html_cost/area_of_expenditure_over_years_bar.html"],
    ),
    Slide::new(
        "Total Expenditure and Total Cases by Age Groups",
        &["html_cost/total_expenditure_and_cases_over_age_group.html"],
    ),
    Slide::new(
        "Average Expenditure per person by age groups",
        &["html_cost/experditure_per_person_age_group.html"],
    ),
    Slide::new(
        "Average Hospital cost vs Home cost per patient by Age Groups",
        &["html_cost/average_hospital_vs_home_cost.html"],
    ),
    Slide::new("Total Hospital cost", &["html_cost/total_cost_at_hospital.html"]),
    Slide::new(
        "Total Hospital cost by age group",
        &["html_cost/cost_category_over_age_group_at_hospital.html"],
    ),
    Slide::new(
        "Total Hospital cost by age group stacked bar chart",
        &["html_cost/cost_category_over_age_group_percentage_at_hospital.html"],
    ),
    Slide::new("Total Home cost by age group", &["html_cost/total_cost_at_home.html"]),
    Slide::new(
        "Total Home cost by age group and categories",
        &["html_cost/cost_category_over_age_group_at_home.html"],
    ),
    Slide::new(
        "Total Home cost by age group stacked bar chart",
        &["html_cost/cost_category_over_age_group_percentage_at_home.html"],
    ),
    Slide::new(
        "Average number of days in hospital for hospitalisations due to falls, by age group and sex, 2019–20",
        &["html_cost/days_in_hospital.html"],
    ),
    Slide {
        note: Some(SERVICE_CATEGORIES_NOTE),
        ..Slide::new(
            "Total Expenditure per Person for a Day by Age Groups and Gender",
            &["html_cost/average_expenditure_a_day_age_group.html"],
        )
    },
];

static POPULATION_DECK: Deck = Deck {
    id: DeckId::Population,
    title: "Population Presentation",
    slides: &POPULATION_SLIDES,
};

static EXPENDITURE_DECK: Deck = Deck {
    id: DeckId::Expenditure,
    title: "Fall Expenditure Presentation",
    slides: &EXPENDITURE_SLIDES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_sizes() {
        assert_eq!(Deck::get(DeckId::Population).len(), 13);
        assert_eq!(Deck::get(DeckId::Expenditure).len(), 14);
    }

    #[test]
    fn test_slide_lookup_is_bounds_checked() {
        let deck = Deck::get(DeckId::Population);
        assert!(deck.slide(0).is_some());
        assert!(deck.slide(12).is_some());
        assert!(deck.slide(13).is_none());
    }

    #[test]
    fn test_pyramid_slide_embeds_two_documents() {
        let deck = Deck::get(DeckId::Population);
        let pyramid = deck.slide(7).unwrap();
        assert_eq!(pyramid.documents.len(), 2);
        assert_eq!(deck.documents().count(), 14);
    }

    #[test]
    fn test_position_label() {
        let deck = Deck::get(DeckId::Expenditure);
        let last = deck.slide(13).unwrap();
        assert!(last.note.is_some());
        assert_eq!(
            last.position_label(13, deck.len()),
            "Slide 14 of 14: Total Expenditure per Person for a Day by Age Groups and Gender"
        );
    }
}
