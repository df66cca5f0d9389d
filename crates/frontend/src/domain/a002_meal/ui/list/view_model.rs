use contracts::domain::a002_meal::aggregate::MealSummary;

use crate::layout::navigation::meal_page_url;
use crate::shared::messages::{NO_MEALS_FOUND, UNCATEGORIZED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCardView {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub category_badge: String,
    pub origin: Option<String>,
    pub href: String,
}

impl From<&MealSummary> for MealCardView {
    fn from(meal: &MealSummary) -> Self {
        Self {
            id: meal.id.clone(),
            title: meal.name.clone(),
            thumbnail: meal.thumbnail.clone(),
            category_badge: meal
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            origin: meal.area.clone(),
            href: meal_page_url(&meal.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealGridView {
    Empty { message: &'static str },
    Cards(Vec<MealCardView>),
}

impl MealGridView {
    pub fn card_count(&self) -> usize {
        match self {
            MealGridView::Empty { .. } => 0,
            MealGridView::Cards(cards) => cards.len(),
        }
    }
}

/// One card per meal in input order, or the "no meals" placeholder.
pub fn meal_grid(meals: &[MealSummary]) -> MealGridView {
    if meals.is_empty() {
        return MealGridView::Empty {
            message: NO_MEALS_FOUND,
        };
    }
    MealGridView::Cards(meals.iter().map(MealCardView::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::meal;

    #[test]
    fn test_one_card_per_meal_in_order() {
        let meals = vec![
            meal("52959", "Baked salmon", Some("Seafood"), Some("British")),
            meal("52802", "Fish pie", Some("Seafood"), None),
            meal("52772", "Teriyaki Chicken Casserole", None, Some("Japanese")),
        ];
        let grid = meal_grid(&meals);
        assert_eq!(grid.card_count(), 3);

        let MealGridView::Cards(cards) = grid else {
            panic!("expected cards");
        };
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["52959", "52802", "52772"]);
        assert_eq!(cards[0].href, "meal.html?id=52959");
        assert_eq!(cards[1].origin, None);
        assert_eq!(cards[2].category_badge, UNCATEGORIZED);
        assert_eq!(cards[2].origin.as_deref(), Some("Japanese"));
    }

    #[test]
    fn test_empty_shows_placeholder() {
        let grid = meal_grid(&[]);
        assert_eq!(
            grid,
            MealGridView::Empty {
                message: "No meals found."
            }
        );
        assert_eq!(grid.card_count(), 0);
    }
}
