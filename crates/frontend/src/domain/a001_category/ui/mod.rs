pub mod description;
pub mod list;

pub use description::CategoryDescriptionPanel;
pub use list::CategoryGrid;
