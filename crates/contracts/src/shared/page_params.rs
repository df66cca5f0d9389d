//! Page-to-page contract: file names of the three pages and the query keys
//! they read.

pub const HOME_PAGE: &str = "index.html";
pub const CATEGORY_PAGE: &str = "category.html";
pub const MEAL_PAGE: &str = "meal.html";

/// Category name on `category.html`
pub const CATEGORY_PARAM: &str = "c";

/// Meal id on `meal.html`
pub const MEAL_ID_PARAM: &str = "id";
