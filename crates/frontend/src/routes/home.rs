//! Home page: search box, category grid, and the inline category view.

use contracts::domain::a002_meal::aggregate::MealSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::ui::description::model::load_category_selection;
use crate::domain::a001_category::ui::description::view_model::CategoryDescriptionView;
use crate::domain::a001_category::ui::{CategoryDescriptionPanel, CategoryGrid};
use crate::domain::a002_meal::ui::list::model::{normalize_query, search_meals};
use crate::domain::a002_meal::ui::MealGrid;
use crate::layout::global_context::use_global_context;
use crate::shared::components::StatusMessage;
use crate::shared::icons::icon;
use crate::shared::messages::LOADING;
use crate::shared::session::use_session;

/// Which panel the home page currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum HomePanel {
    Categories,
    Category(CategoryDescriptionView),
    Search(String),
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let panel = RwSignal::new(HomePanel::Categories);
    let meals = RwSignal::new(Vec::<MealSummary>::new());
    let loading = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    // Sidebar entries and category cards both end up here via choose_category.
    let selection_session = session.clone();
    Effect::new(move |_| {
        let Some(name) = ctx.inline_selection.get() else {
            return;
        };
        let session = selection_session.clone();
        loading.set(true);
        spawn_local(async move {
            if let Some(selection) = load_category_selection(&session, &name).await {
                meals.set(selection.meals);
                panel.set(HomePanel::Category(selection.description));
                loading.set(false);
            }
        });
    });

    let run_search = {
        let session = session.clone();
        move || {
            let Some(text) = normalize_query(&query.get_untracked()) else {
                return;
            };
            ctx.clear_selection();
            loading.set(true);
            let session = session.clone();
            spawn_local(async move {
                if let Some(found) = search_meals(&session, &text).await {
                    meals.set(found);
                    panel.set(HomePanel::Search(text));
                    loading.set(false);
                }
            });
        }
    };

    let back_to_categories = {
        let session = session.clone();
        move |_: leptos::ev::MouseEvent| {
            // Anything still in flight is now stale.
            session.requests.begin();
            ctx.clear_selection();
            loading.set(false);
            meals.set(Vec::new());
            panel.set(HomePanel::Categories);
        }
    };

    let search_on_enter = run_search.clone();
    let search_on_click = run_search;

    view! {
        <section class="home-hero">
            <h1>"Find your next meal"</h1>
            <div
                class="search-bar"
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        search_on_enter();
                    }
                }
            >
                <Input value=query placeholder="Search meals by name..." />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| search_on_click()>
                    {icon("search")}
                    "Search"
                </Button>
            </div>
        </section>

        {move || loading.get().then(|| view! { <StatusMessage message=LOADING /> })}

        {move || {
            let back = back_to_categories.clone();
            match panel.get() {
                HomePanel::Categories => view! {
                    <h2 class="section-title">"Categories"</h2>
                    <CategoryGrid categories=ctx.categories />
                }
                .into_any(),
                HomePanel::Category(description) => view! {
                    <button class="back-link" on:click=back>{icon("arrow-left")}"Back to categories"</button>
                    <CategoryDescriptionPanel description=description />
                    <MealGrid meals=meals scroll_on_mount=true />
                }
                .into_any(),
                HomePanel::Search(text) => view! {
                    <button class="back-link" on:click=back>{icon("arrow-left")}"Back to categories"</button>
                    <h2 class="section-title">{format!("Results for \"{}\"", text)}</h2>
                    <MealGrid meals=meals scroll_on_mount=true />
                }
                .into_any(),
            }
        }}
    }
}
