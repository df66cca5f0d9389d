use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient_list, non_blank};

// ============================================================================
// Wire format
// ============================================================================

/// One entry of `categories.php` as TheMealDB sends it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "idCategory")]
    pub id: Option<String>,

    #[serde(rename = "strCategory")]
    pub name: Option<String>,

    #[serde(rename = "strCategoryThumb")]
    pub thumbnail: Option<String>,

    #[serde(rename = "strCategoryDescription")]
    pub description: Option<String>,
}

/// `{"categories": [...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default, deserialize_with = "lenient_list")]
    pub categories: Option<Vec<CategoryRecord>>,
}

impl CategoriesEnvelope {
    /// Records that carry a usable name, in payload order
    pub fn into_categories(self) -> Vec<Category> {
        self.categories
            .unwrap_or_default()
            .into_iter()
            .filter_map(Category::from_record)
            .collect()
    }
}

// ============================================================================
// Domain
// ============================================================================

/// Named grouping of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

impl Category {
    /// `None` when the record has no name; the name is what every page keys on.
    pub fn from_record(record: CategoryRecord) -> Option<Self> {
        let name = non_blank(record.name.as_deref())?;
        Some(Self {
            id: non_blank(record.id.as_deref()).unwrap_or_else(|| name.clone()),
            name,
            thumbnail: non_blank(record.thumbnail.as_deref()),
            description: non_blank(record.description.as_deref()),
        })
    }
}

/// Case-sensitive lookup by name, which is what `filter.php?c=` expects.
pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories_payload() {
        let json = r#"{"categories":[
            {"idCategory":"1","strCategory":"Beef","strCategoryThumb":"https://img/beef.png","strCategoryDescription":"Beef is the culinary name for meat from cattle."},
            {"idCategory":"2","strCategory":"Seafood","strCategoryThumb":"https://img/seafood.png","strCategoryDescription":""}
        ]}"#;
        let envelope: CategoriesEnvelope = serde_json::from_str(json).unwrap();
        let categories = envelope.into_categories();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Beef");
        assert_eq!(categories[0].thumbnail.as_deref(), Some("https://img/beef.png"));
        assert_eq!(categories[1].name, "Seafood");
        assert_eq!(categories[1].description, None);
    }

    #[test]
    fn test_missing_or_null_key_is_empty() {
        let absent: CategoriesEnvelope = serde_json::from_str("{}").unwrap();
        assert!(absent.into_categories().is_empty());

        let null: CategoriesEnvelope = serde_json::from_str(r#"{"categories":null}"#).unwrap();
        assert!(null.into_categories().is_empty());

        let wrong_shape: CategoriesEnvelope =
            serde_json::from_str(r#"{"categories":"oops"}"#).unwrap();
        assert!(wrong_shape.into_categories().is_empty());
    }

    #[test]
    fn test_nameless_record_is_dropped() {
        let json = r#"{"categories":[{"idCategory":"9","strCategory":"  "}]}"#;
        let envelope: CategoriesEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.into_categories().is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let categories = vec![Category {
            id: "2".into(),
            name: "Seafood".into(),
            thumbnail: None,
            description: Some("Fish and shellfish.".into()),
        }];
        assert!(find_by_name(&categories, "Seafood").is_some());
        assert!(find_by_name(&categories, "seafood").is_none());
    }
}
