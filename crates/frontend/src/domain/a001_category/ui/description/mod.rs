pub mod model;
pub mod view_model;

use leptos::prelude::*;

use self::view_model::CategoryDescriptionView;
use crate::shared::components::thumbnail;

#[component]
pub fn CategoryDescriptionPanel(description: CategoryDescriptionView) -> impl IntoView {
    let CategoryDescriptionView {
        title,
        thumbnail: thumb,
        paragraphs,
    } = description;

    view! {
        <section class="category-description">
            {thumbnail(thumb, title.clone(), "category-description__image")}
            <div class="category-description__text">
                <h2>{title}</h2>
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
        </section>
    }
}
