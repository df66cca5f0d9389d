use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::{lenient_list, non_blank};

/// TheMealDB stores ingredients in fixed numbered slots `1..=20`.
pub const INGREDIENT_SLOTS: usize = 20;

// ============================================================================
// Wire format
// ============================================================================

/// One entry of `meals` as returned by `search.php`, `filter.php` and
/// `lookup.php`. `filter.php` only fills id, name and thumbnail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,

    #[serde(rename = "strMeal")]
    pub name: Option<String>,

    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,

    #[serde(rename = "strCategory")]
    pub category: Option<String>,

    #[serde(rename = "strArea")]
    pub area: Option<String>,

    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,

    #[serde(rename = "strTags")]
    pub tags: Option<String>,

    #[serde(rename = "strSource")]
    pub source: Option<String>,

    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,

    /// `strIngredientN` / `strMeasureN` and whatever else the API adds
    #[serde(flatten)]
    pub slots: BTreeMap<String, serde_json::Value>,
}

impl MealRecord {
    fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).and_then(serde_json::Value::as_str)
    }

    /// Scans the numbered slots in order and keeps those whose ingredient is
    /// not blank. A blank measure is kept as an empty string.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|n| {
                let name = non_blank(self.slot(&format!("strIngredient{n}")))?;
                let measure = non_blank(self.slot(&format!("strMeasure{n}"))).unwrap_or_default();
                Some(Ingredient { name, measure })
            })
            .collect()
    }
}

/// `{"meals": [...]}`; the API answers `{"meals": null}` when nothing matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default, deserialize_with = "lenient_list")]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsEnvelope {
    /// Usable summaries in payload order. `fallback_category` fills the badge
    /// for endpoints that do not echo the category back.
    pub fn into_summaries(self, fallback_category: Option<&str>) -> Vec<MealSummary> {
        self.meals
            .unwrap_or_default()
            .iter()
            .filter_map(|record| MealSummary::from_record(record, fallback_category))
            .collect()
    }

    /// First usable record as a full detail
    pub fn into_detail(self) -> Option<MealDetail> {
        self.meals
            .unwrap_or_default()
            .iter()
            .find_map(MealDetail::from_record)
    }
}

// ============================================================================
// Domain
// ============================================================================

/// Lightweight record for list and grid display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
}

impl MealSummary {
    pub fn from_record(record: &MealRecord, fallback_category: Option<&str>) -> Option<Self> {
        Some(Self {
            id: non_blank(record.id.as_deref())?,
            name: non_blank(record.name.as_deref())?,
            thumbnail: non_blank(record.thumbnail.as_deref()),
            category: non_blank(record.category.as_deref()).or_else(|| non_blank(fallback_category)),
            area: non_blank(record.area.as_deref()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Full record with ingredients and instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDetail {
    pub summary: MealSummary,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub video: Option<String>,
}

impl MealDetail {
    pub fn from_record(record: &MealRecord) -> Option<Self> {
        let summary = MealSummary::from_record(record, None)?;
        Some(Self {
            summary,
            instructions: record.instructions.clone().unwrap_or_default(),
            ingredients: record.ingredients(),
            tags: parse_tags(record.tags.as_deref()),
            source: non_blank(record.source.as_deref()),
            video: non_blank(record.youtube.as_deref()),
        })
    }
}

/// `"Meat,Casserole, ,Curry"` -> `["Meat", "Casserole", "Curry"]`
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .filter_map(|tag| non_blank(Some(tag)))
        .collect()
}
