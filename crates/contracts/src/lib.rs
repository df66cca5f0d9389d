//! Wire records and domain types shared by the MealDB client.
//!
//! Nothing in here touches the browser, so everything is testable natively.

pub mod domain;
pub mod shared;
