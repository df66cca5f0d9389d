pub mod view_model;

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

use self::view_model::{category_grid, CategoryCardView, CategoryGridView};
use crate::layout::global_context::use_global_context;
use crate::shared::components::{stagger_delay, thumbnail, CardAnimated, StatusMessage};

#[component]
fn CategoryCard(card: CategoryCardView, index: usize) -> impl IntoView {
    let ctx = use_global_context();
    let CategoryCardView {
        name,
        thumbnail: thumb,
        blurb,
    } = card;
    let target = StoredValue::new(name.clone());

    view! {
        <div
            class="category-card"
            role="button"
            tabindex="0"
            on:click=move |_| ctx.choose_category(&target.get_value())
        >
            <CardAnimated delay_ms=stagger_delay(index)>
                {thumbnail(thumb, name.clone(), "category-card__image")}
                <h3 class="category-card__title">{name}</h3>
                <p class="category-card__blurb">{blurb}</p>
            </CardAnimated>
        </div>
    }
}

/// One clickable card per category. Clicks go through the navigation
/// controller, so they re-render inline on home and redirect elsewhere.
#[component]
pub fn CategoryGrid(#[prop(into)] categories: Signal<Vec<Category>>) -> impl IntoView {
    view! {
        <div class="category-grid">
            {move || match categories.with(|c| category_grid(c)) {
                CategoryGridView::Empty { message } => view! { <StatusMessage message=message /> }.into_any(),
                CategoryGridView::Cards(cards) => cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| view! { <CategoryCard card=card index=index /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
