use contracts::domain::a001_category::aggregate::Category;

use crate::shared::messages::NO_DESCRIPTION;
use crate::shared::text::split_paragraphs;

/// Panel shown above the meal grid for the selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescriptionView {
    pub title: String,
    pub thumbnail: Option<String>,
    pub paragraphs: Vec<String>,
}

pub fn describe(name: &str, category: Option<&Category>) -> CategoryDescriptionView {
    let paragraphs = category
        .and_then(|c| c.description.as_deref())
        .map(split_paragraphs)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| vec![NO_DESCRIPTION.to_string()]);

    CategoryDescriptionView {
        title: name.to_string(),
        thumbnail: category.and_then(|c| c.thumbnail.clone()),
        paragraphs,
    }
}
