pub mod details;
pub mod list;

pub use details::MealDetails;
pub use list::MealGrid;
