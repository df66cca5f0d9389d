//! Page modes, page URLs and the category-selection routing rule.

use std::collections::HashMap;

use contracts::shared::page_params::{
    CATEGORY_PAGE, CATEGORY_PARAM, HOME_PAGE, MEAL_ID_PARAM, MEAL_PAGE,
};

/// Which of the three pages is mounted. Declared by the page itself through
/// `<body data-page="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    #[default]
    Home,
    Category,
    Meal,
}

impl PageMode {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "home" => Some(PageMode::Home),
            "category" => Some(PageMode::Category),
            "meal" => Some(PageMode::Meal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageMode::Home => "home",
            PageMode::Category => "category",
            PageMode::Meal => "meal",
        }
    }

    /// Home and category pages show categories right away. The meal page
    /// only needs them once the sidebar is opened.
    pub fn preloads_categories(self) -> bool {
        !matches!(self, PageMode::Meal)
    }

    /// Reads `data-page` from `<body>`, falling back to [`PageMode::Home`].
    pub fn from_document() -> Self {
        let attr = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute("data-page"));

        match attr.as_deref().and_then(PageMode::from_attr) {
            Some(mode) => mode,
            None => {
                log::warn!("Missing or unknown data-page {:?}, assuming home", attr);
                PageMode::Home
            }
        }
    }
}

/// What selecting a category should do on the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Re-render the home page in place
    RenderInline(String),
    /// Full page load of the given URL
    Redirect(String),
}

pub fn select_category(mode: PageMode, category: &str) -> NavAction {
    match mode {
        PageMode::Home => NavAction::RenderInline(category.to_string()),
        PageMode::Category | PageMode::Meal => NavAction::Redirect(category_page_url(category)),
    }
}

pub fn home_page_url() -> String {
    HOME_PAGE.to_string()
}

pub fn category_page_url(category: &str) -> String {
    format!(
        "{}?{}={}",
        CATEGORY_PAGE,
        CATEGORY_PARAM,
        urlencoding::encode(category)
    )
}

pub fn meal_page_url(id: &str) -> String {
    format!("{}?{}={}", MEAL_PAGE, MEAL_ID_PARAM, urlencoding::encode(id))
}

/// Non-blank value of `key` in a `location.search` string.
///
/// Pairs are decoded one at a time, so a malformed or nested parameter
/// elsewhere in the query does not hide `key`. The first occurrence wins.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| serde_qs::from_str::<HashMap<String, String>>(pair).ok())
        .find_map(|mut decoded| decoded.remove(key))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// [`query_param`] against the current page URL
pub fn current_query_param(key: &str) -> Option<String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    query_param(&search, key)
}

pub fn redirect(url: &str) {
    log::info!("Navigating to {}", url);
    let Some(window) = web_sys::window() else {
        log::error!("No window available for navigation to {}", url);
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::error!("Navigation to {} failed: {:?}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_renders_inline() {
        assert_eq!(
            select_category(PageMode::Home, "Seafood"),
            NavAction::RenderInline("Seafood".to_string())
        );
    }

    #[test]
    fn test_other_pages_redirect() {
        assert_eq!(
            select_category(PageMode::Category, "Seafood"),
            NavAction::Redirect("category.html?c=Seafood".to_string())
        );
        assert_eq!(
            select_category(PageMode::Meal, "Side Dish"),
            NavAction::Redirect("category.html?c=Side%20Dish".to_string())
        );
    }

    #[test]
    fn test_meal_page_url() {
        assert_eq!(meal_page_url("52772"), "meal.html?id=52772");
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?c=Seafood", "c"), Some("Seafood".to_string()));
        assert_eq!(query_param("?id=52772&x=1", "id"), Some("52772".to_string()));
        assert_eq!(query_param("?c=Side%20Dish", "c"), Some("Side Dish".to_string()));
        assert_eq!(query_param("", "id"), None);
        assert_eq!(query_param("?id=", "id"), None);
        assert_eq!(query_param("?other=1", "id"), None);
    }

    #[test]
    fn test_query_param_ignores_unrelated_noise() {
        assert_eq!(query_param("?c=Seafood&utm[src]=x", "c"), Some("Seafood".to_string()));
        assert_eq!(query_param("?id=52772&utm[src]=x", "id"), Some("52772".to_string()));
        assert_eq!(query_param("?c=Seafood&x=%E0", "c"), Some("Seafood".to_string()));
        assert_eq!(query_param("?c=Seafood&c=Beef", "c"), Some("Seafood".to_string()));
        assert_eq!(query_param("?&&c=Beef", "c"), Some("Beef".to_string()));
    }

    #[test]
    fn test_meal_page_defers_category_load() {
        assert!(PageMode::Home.preloads_categories());
        assert!(PageMode::Category.preloads_categories());
        assert!(!PageMode::Meal.preloads_categories());
    }

    #[test]
    fn test_page_mode_attr() {
        assert_eq!(PageMode::from_attr("home"), Some(PageMode::Home));
        assert_eq!(PageMode::from_attr(" category "), Some(PageMode::Category));
        assert_eq!(PageMode::from_attr("meal"), Some(PageMode::Meal));
        assert_eq!(PageMode::from_attr("about"), None);
    }
}
