use leptos::prelude::*;

/// Placeholder or fallback text shown in place of a panel's content
#[component]
pub fn StatusMessage(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="status-message">{message}</p> }
}
