//! User-visible fallback strings

pub const NO_MEALS_FOUND: &str = "No meals found.";
pub const NO_CATEGORIES: &str = "No categories available.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_MEAL_ID: &str = "No meal id provided.";
pub const MEAL_NOT_FOUND: &str = "Meal not found.";
pub const NO_CATEGORY_PARAM: &str = "No category provided.";
pub const LOADING: &str = "Loading...";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const UNKNOWN_ORIGIN: &str = "Unknown";
