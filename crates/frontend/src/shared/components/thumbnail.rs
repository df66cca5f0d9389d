use leptos::prelude::*;

/// Lazy image, or an empty placeholder block of the same class when the
/// record has no picture.
pub fn thumbnail(src: Option<String>, alt: String, class: &'static str) -> AnyView {
    match src {
        Some(src) => view! { <img class=class src=src alt=alt loading="lazy" /> }.into_any(),
        None => view! { <div class=format!("{} {}--placeholder", class, class)></div> }.into_any(),
    }
}
