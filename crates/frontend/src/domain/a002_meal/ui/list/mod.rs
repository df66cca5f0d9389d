pub mod model;
pub mod view_model;

use contracts::domain::a002_meal::aggregate::MealSummary;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::*;

use self::view_model::{meal_grid, MealCardView, MealGridView};
use crate::shared::components::{stagger_delay, thumbnail, CardAnimated, StatusMessage};

fn scroll_smoothly(element: &web_sys::HtmlElement) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Re-renders always scroll; the first render only when the grid was opened
/// by a user action.
fn scrolls_after_render(first_render: bool, scroll_on_mount: bool) -> bool {
    !first_render || scroll_on_mount
}

#[component]
fn MealCard(card: MealCardView, index: usize) -> impl IntoView {
    let MealCardView {
        id,
        title,
        thumbnail: thumb,
        category_badge,
        origin,
        href,
    } = card;

    view! {
        <a class="meal-card" href=href data-meal-id=id>
            <CardAnimated delay_ms=stagger_delay(index)>
                {thumbnail(thumb, title.clone(), "meal-card__image")}
                <div class="meal-card__badges">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {category_badge}
                    </Badge>
                    {origin.map(|origin| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {origin}
                        </Badge>
                    })}
                </div>
                <p class="meal-card__title">{title}</p>
            </CardAnimated>
        </a>
    }
}

/// Card grid for home, category and search views.
///
/// Replaces its content whenever `meals` changes and scrolls itself into
/// view after every re-render. The initial render only scrolls when
/// `scroll_on_mount` is set, i.e. the grid appeared because of a user action.
#[component]
pub fn MealGrid(
    #[prop(into)] meals: Signal<Vec<MealSummary>>,
    #[prop(optional)] scroll_on_mount: bool,
) -> impl IntoView {
    let grid_ref = NodeRef::<Div>::new();

    Effect::new(move |prev: Option<()>| {
        meals.track();
        if scrolls_after_render(prev.is_none(), scroll_on_mount) {
            if let Some(element) = grid_ref.get_untracked() {
                scroll_smoothly(&element);
            }
        }
    });

    view! {
        <div class="meal-grid" node_ref=grid_ref>
            {move || match meals.with(|m| meal_grid(m)) {
                MealGridView::Empty { message } => view! { <StatusMessage message=message /> }.into_any(),
                MealGridView::Cards(cards) => cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| view! { <MealCard card=card index=index /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_load_does_not_scroll() {
        assert!(!scrolls_after_render(true, false));
    }

    #[test]
    fn test_user_opened_grid_scrolls_on_mount() {
        assert!(scrolls_after_render(true, true));
    }

    #[test]
    fn test_rerender_always_scrolls() {
        assert!(scrolls_after_render(false, false));
        assert!(scrolls_after_render(false, true));
    }
}
