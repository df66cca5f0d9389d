use contracts::domain::a001_category::aggregate::find_by_name;
use contracts::domain::a002_meal::aggregate::MealSummary;

use super::view_model::{describe, CategoryDescriptionView};
use crate::shared::api_client::MealDbApi;
use crate::shared::session::SessionContext;

/// Everything the page shows for one selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    pub description: CategoryDescriptionView,
    pub meals: Vec<MealSummary>,
}

/// Loads the description (through the session cache) and the meal list for
/// `name`. Returns `None` when a newer search or selection started while this
/// one was in flight.
pub async fn load_category_selection<A: MealDbApi>(
    session: &SessionContext<A>,
    name: &str,
) -> Option<CategorySelection> {
    let ticket = session.requests.begin();

    let categories = session.categories.get_or_fetch(&session.api).await;
    let meals = session.api.filter_by_category(name).await;

    if !session.requests.is_current(ticket) {
        log::debug!("Dropping stale result for category '{}'", name);
        return None;
    }

    Some(CategorySelection {
        description: describe(name, find_by_name(&categories, name)),
        meals,
    })
}
