use contracts::domain::a001_category::aggregate::Category;

use crate::shared::messages::{NO_CATEGORIES, NO_DESCRIPTION};
use crate::shared::text::first_sentence;

const BLURB_CHARS: usize = 110;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCardView {
    pub name: String,
    pub thumbnail: Option<String>,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryGridView {
    Empty { message: &'static str },
    Cards(Vec<CategoryCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntryView {
    pub name: String,
}

pub fn category_grid(categories: &[Category]) -> CategoryGridView {
    if categories.is_empty() {
        return CategoryGridView::Empty {
            message: NO_CATEGORIES,
        };
    }
    CategoryGridView::Cards(
        categories
            .iter()
            .map(|c| CategoryCardView {
                name: c.name.clone(),
                thumbnail: c.thumbnail.clone(),
                blurb: c
                    .description
                    .as_deref()
                    .map(|d| first_sentence(d, BLURB_CHARS))
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            })
            .collect(),
    )
}

pub fn sidebar_entries(categories: &[Category]) -> Vec<SidebarEntryView> {
    categories
        .iter()
        .map(|c| SidebarEntryView {
            name: c.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::sample_categories;

    #[test]
    fn test_one_card_and_entry_per_category() {
        let categories = sample_categories();
        let CategoryGridView::Cards(cards) = category_grid(&categories) else {
            panic!("expected cards");
        };
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beef", "Seafood", "Vegan"]);
        assert_eq!(cards[0].blurb, "Beef is the culinary name for meat from cattle.");
        assert_eq!(cards[2].blurb, NO_DESCRIPTION);

        let entries = sidebar_entries(&categories);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].name, "Seafood");
    }

    #[test]
    fn test_empty_categories() {
        assert_eq!(
            category_grid(&[]),
            CategoryGridView::Empty {
                message: NO_CATEGORIES
            }
        );
        assert!(sidebar_entries(&[]).is_empty());
    }
}
