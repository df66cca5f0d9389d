//! Top bar: hamburger toggle and the site title linking home.

use leptos::prelude::*;

use crate::layout::global_context::{use_global_context, SidebarEvent};
use crate::layout::navigation::home_page_url;
use crate::shared::icons::icon;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.is_sidebar_open();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.sidebar_event(SidebarEvent::Toggle)
                    title=move || if is_open() { "Hide categories" } else { "Show categories" }
                    aria-expanded=move || is_open().to_string()
                >
                    {icon("menu")}
                </button>
                <a class="top-header__title" href=home_page_url()>"Recipe Finder"</a>
            </div>
        </div>
    }
}
