use contracts::domain::a002_meal::aggregate::MealDetail;

use crate::layout::navigation::{category_page_url, home_page_url};
use crate::shared::messages::{UNCATEGORIZED, UNKNOWN_ORIGIN};
use crate::shared::text::split_paragraphs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the current page
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub ingredient: String,
    pub measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaBlock {
    pub category: String,
    pub origin: String,
    pub links: Vec<LinkView>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetailView {
    pub title: String,
    pub thumbnail: Option<String>,
    pub breadcrumb: Vec<Crumb>,
    pub origin: String,
    pub ingredients: Vec<IngredientRow>,
    pub meta: MetaBlock,
    pub instructions: Vec<String>,
}

impl From<&MealDetail> for MealDetailView {
    fn from(meal: &MealDetail) -> Self {
        let summary = &meal.summary;
        let origin = summary
            .area
            .clone()
            .unwrap_or_else(|| UNKNOWN_ORIGIN.to_string());

        let mut breadcrumb = vec![Crumb {
            label: "Home".to_string(),
            href: Some(home_page_url()),
        }];
        if let Some(category) = &summary.category {
            breadcrumb.push(Crumb {
                label: category.clone(),
                href: Some(category_page_url(category)),
            });
        }
        breadcrumb.push(Crumb {
            label: summary.name.clone(),
            href: None,
        });

        let mut links = Vec::new();
        if let Some(source) = &meal.source {
            links.push(LinkView {
                label: "Source",
                href: source.clone(),
            });
        }
        if let Some(video) = &meal.video {
            links.push(LinkView {
                label: "Video",
                href: video.clone(),
            });
        }

        Self {
            title: summary.name.clone(),
            thumbnail: summary.thumbnail.clone(),
            breadcrumb,
            origin: origin.clone(),
            ingredients: meal
                .ingredients
                .iter()
                .map(|i| IngredientRow {
                    ingredient: i.name.clone(),
                    measure: i.measure.clone(),
                })
                .collect(),
            meta: MetaBlock {
                category: summary
                    .category
                    .clone()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                origin,
                links,
                tags: meal.tags.clone(),
            },
            instructions: split_paragraphs(&meal.instructions),
        }
    }
}
