//! Slide-out category menu.
//!
//! Open/closed state lives in [`AppGlobalContext::sidebar`]; this component
//! only translates DOM events into [`SidebarEvent`]s.

use leptos::prelude::*;

use crate::domain::a001_category::ui::list::view_model::sidebar_entries;
use crate::layout::global_context::{use_global_context, SidebarEvent};
use crate::shared::icons::icon;
use crate::shared::messages::{LOADING, NO_CATEGORIES};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.is_sidebar_open();

    let _ = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && ctx.sidebar.get_untracked().is_open() {
            ctx.sidebar_event(SidebarEvent::Escape);
        }
    });

    let entries = move || sidebar_entries(&ctx.categories.get());

    view! {
        <div
            class="sidebar-overlay"
            class:sidebar-overlay--visible=is_open
            on:click=move |_| ctx.sidebar_event(SidebarEvent::OverlayClick)
        ></div>
        <aside class="app-sidebar" class:app-sidebar--open=is_open aria-hidden=move || (!is_open()).to_string()>
            <div class="app-sidebar__header">
                <span class="app-sidebar__title">"Categories"</span>
                <button
                    class="app-sidebar__close"
                    title="Close menu"
                    on:click=move |_| ctx.sidebar_event(SidebarEvent::CloseButton)
                >
                    {icon("x")}
                </button>
            </div>
            <div class="app-sidebar__content">
                {move || {
                    if !ctx.categories_loaded.get() {
                        return view! { <div class="app-sidebar__empty">{LOADING}</div> }.into_any();
                    }
                    let entries = entries();
                    if entries.is_empty() {
                        return view! { <div class="app-sidebar__empty">{NO_CATEGORIES}</div> }.into_any();
                    }
                    entries
                        .into_iter()
                        .map(|entry| {
                            let name = StoredValue::new(entry.name.clone());
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        ctx.inline_selection.get().as_deref() == Some(name.get_value().as_str())
                                    }
                                    on:click=move |_| ctx.choose_category(&name.get_value())
                                >
                                    <div class="app-sidebar__item-content">
                                        <span>{entry.name}</span>
                                    </div>
                                    {icon("chevron-right")}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </aside>
    }
}
