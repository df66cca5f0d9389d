//! Thaw `Card` with a staggered appear animation.
//!
//! The keyframes (`card-appear`) live in `static/styles.css`.
//!
//! ```ignore
//! {cards.into_iter().enumerate().map(|(i, card)| view! {
//!     <CardAnimated delay_ms=stagger_delay(i)>
//!         <p>{card.title}</p>
//!     </CardAnimated>
//! }).collect_view()}
//! ```

use leptos::prelude::*;
use thaw::Card;

const STAGGER_STEP_MS: u32 = 40;
const STAGGER_MAX_MS: u32 = 400;

/// Delay for the `index`-th card of a grid, capped so long grids still
/// appear quickly.
pub fn stagger_delay(index: usize) -> u32 {
    let step = u32::try_from(index).unwrap_or(u32::MAX);
    step.saturating_mul(STAGGER_STEP_MS).min(STAGGER_MAX_MS)
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class="card" attr:style=style>
            {children()}
        </Card>
    }
}
