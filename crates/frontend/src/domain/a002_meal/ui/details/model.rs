use super::view_model::MealDetailView;
use crate::shared::api_client::MealDbApi;
use crate::shared::messages::{MEAL_NOT_FOUND, NO_MEAL_ID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    NoId,
    NotFound,
    Loaded(Box<MealDetailView>),
}

impl DetailOutcome {
    /// Message to show instead of the detail view
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DetailOutcome::NoId => Some(NO_MEAL_ID),
            DetailOutcome::NotFound => Some(MEAL_NOT_FOUND),
            DetailOutcome::Loaded(_) => None,
        }
    }
}

/// Looks up one meal. A missing or blank id never reaches the network.
pub async fn load_meal_detail<A: MealDbApi>(api: &A, id: Option<&str>) -> DetailOutcome {
    let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
        log::warn!("Meal page opened without an id parameter");
        return DetailOutcome::NoId;
    };

    match api.lookup(id).await {
        Some(meal) => DetailOutcome::Loaded(Box::new(MealDetailView::from(&meal))),
        None => {
            log::warn!("Meal {} not found", id);
            DetailOutcome::NotFound
        }
    }
}
