//! Category listing page (`category.html?c=<name>`).

use contracts::domain::a002_meal::aggregate::MealSummary;
use contracts::shared::page_params::CATEGORY_PARAM;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::ui::description::model::load_category_selection;
use crate::domain::a001_category::ui::description::view_model::CategoryDescriptionView;
use crate::domain::a001_category::ui::CategoryDescriptionPanel;
use crate::domain::a002_meal::ui::MealGrid;
use crate::layout::global_context::use_global_context;
use crate::layout::navigation::current_query_param;
use crate::shared::components::{PageHeader, StatusMessage};
use crate::shared::messages::{LOADING, NO_CATEGORY_PARAM};
use crate::shared::session::use_session;

#[derive(Clone, Debug, PartialEq)]
enum CategoryPageState {
    Loading,
    Missing,
    Loaded(CategoryDescriptionView),
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let name = current_query_param(CATEGORY_PARAM);

    let state = RwSignal::new(CategoryPageState::Loading);
    let meals = RwSignal::new(Vec::<MealSummary>::new());

    match name.clone() {
        None => {
            log::warn!("Category page opened without a '{}' parameter", CATEGORY_PARAM);
            state.set(CategoryPageState::Missing);
        }
        Some(name) => {
            // Wait for the startup category load so the description comes
            // out of the session cache instead of a second request.
            Effect::new(move |started: Option<bool>| {
                if started == Some(true) {
                    return true;
                }
                if !ctx.categories_loaded.get() {
                    return false;
                }
                let session = session.clone();
                let name = name.clone();
                spawn_local(async move {
                    if let Some(selection) = load_category_selection(&session, &name).await {
                        meals.set(selection.meals);
                        state.set(CategoryPageState::Loaded(selection.description));
                    }
                });
                true
            });
        }
    }

    let title = name.clone().unwrap_or_else(|| "Category".to_string());
    let meal_count = move || {
        let count = meals.with(Vec::len);
        match count {
            1 => "1 meal".to_string(),
            n => format!("{} meals", n),
        }
    };

    view! {
        <PageHeader title=title subtitle=Signal::derive(move || {
            matches!(state.get(), CategoryPageState::Loaded(_)).then(meal_count)
        }) />
        {move || match state.get() {
            CategoryPageState::Loading => view! { <StatusMessage message=LOADING /> }.into_any(),
            CategoryPageState::Missing => view! { <StatusMessage message=NO_CATEGORY_PARAM /> }.into_any(),
            CategoryPageState::Loaded(description) => view! {
                <CategoryDescriptionPanel description=description />
                <MealGrid meals=meals />
            }
            .into_any(),
        }}
    }
}
