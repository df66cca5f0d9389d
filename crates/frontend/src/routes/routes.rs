use leptos::prelude::*;

use super::{category::CategoryPage, home::HomePage, meal::MealPage};
use crate::layout::navigation::PageMode;
use crate::layout::Shell;

/// Picks the page body for the mode the HTML page declared.
#[component]
pub fn AppRoutes(mode: PageMode) -> impl IntoView {
    view! {
        <Shell>
            {match mode {
                PageMode::Home => view! { <HomePage /> }.into_any(),
                PageMode::Category => view! { <CategoryPage /> }.into_any(),
                PageMode::Meal => view! { <MealPage /> }.into_any(),
            }}
        </Shell>
    }
}
