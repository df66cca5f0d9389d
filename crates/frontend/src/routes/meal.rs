//! Meal detail page (`meal.html?id=<id>`).

use contracts::shared::page_params::MEAL_ID_PARAM;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_meal::ui::details::model::{load_meal_detail, DetailOutcome};
use crate::domain::a002_meal::ui::MealDetails;
use crate::layout::navigation::current_query_param;
use crate::shared::components::StatusMessage;
use crate::shared::messages::LOADING;
use crate::shared::session::use_session;

#[component]
pub fn MealPage() -> impl IntoView {
    let session = use_session();
    let outcome = RwSignal::new(None::<DetailOutcome>);

    let id = current_query_param(MEAL_ID_PARAM);
    spawn_local(async move {
        let loaded = load_meal_detail(&session.api, id.as_deref()).await;
        if let DetailOutcome::Loaded(detail) = &loaded {
            set_document_title(&detail.title);
        }
        outcome.set(Some(loaded));
    });

    move || match outcome.get() {
        None => view! { <StatusMessage message=LOADING /> }.into_any(),
        Some(DetailOutcome::Loaded(detail)) => view! { <MealDetails detail=*detail /> }.into_any(),
        Some(other) => {
            let message = other.message().unwrap_or_default();
            view! { <StatusMessage message=message /> }.into_any()
        }
    }
}

fn set_document_title(meal: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} | Recipe Finder", meal));
    }
}
