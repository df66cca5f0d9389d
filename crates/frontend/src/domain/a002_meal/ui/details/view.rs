use leptos::prelude::*;
use thaw::*;

use super::view_model::{Crumb, IngredientRow, LinkView, MealDetailView, MetaBlock};
use crate::shared::components::{thumbnail, PageHeader};
use crate::shared::icons::icon;

fn breadcrumb(crumbs: Vec<Crumb>) -> impl IntoView {
    let last = crumbs.len().saturating_sub(1);
    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            {crumbs
                .into_iter()
                .enumerate()
                .map(|(i, crumb)| {
                    let item = match crumb.href {
                        Some(href) => view! { <a href=href>{crumb.label}</a> }.into_any(),
                        None => view! { <span aria-current="page">{crumb.label}</span> }.into_any(),
                    };
                    view! {
                        {item}
                        {(i < last).then(|| view! { <span class="breadcrumb__sep">{icon("chevron-right")}</span> })}
                    }
                })
                .collect_view()}
        </nav>
    }
}

fn ingredient_table(rows: Vec<IngredientRow>) -> impl IntoView {
    view! {
        <table class="ingredients">
            <thead>
                <tr>
                    <th>"Ingredient"</th>
                    <th>"Measure"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td>{row.ingredient}</td>
                            <td>{row.measure}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

fn meta_block(meta: MetaBlock) -> impl IntoView {
    let MetaBlock {
        category,
        origin,
        links,
        tags,
    } = meta;

    view! {
        <dl class="meal-meta">
            <dt>"Category"</dt>
            <dd>{category}</dd>
            <dt>"Origin"</dt>
            <dd>{origin}</dd>
            {(!links.is_empty()).then(|| view! {
                <dt>"Links"</dt>
                <dd>
                    {links
                        .into_iter()
                        .map(|LinkView { label, href }| view! {
                            <a class="meal-meta__link" href=href target="_blank" rel="noopener noreferrer">
                                {label}
                                {icon("external-link")}
                            </a>
                        })
                        .collect_view()}
                </dd>
            })}
            {(!tags.is_empty()).then(|| view! {
                <dt>"Tags"</dt>
                <dd class="meal-meta__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>{tag}</Badge>
                        })
                        .collect_view()}
                </dd>
            })}
        </dl>
    }
}

#[component]
pub fn MealDetails(detail: MealDetailView) -> impl IntoView {
    let MealDetailView {
        title,
        thumbnail: thumb,
        breadcrumb: crumbs,
        origin,
        ingredients,
        meta,
        instructions,
    } = detail;

    view! {
        <article class="meal-details">
            {breadcrumb(crumbs)}
            <PageHeader title=title.clone() subtitle=origin />
            <div class="meal-details__top">
                {thumbnail(thumb, title, "meal-details__image")}
                <div class="meal-details__side">
                    {meta_block(meta)}
                    <h2>"Ingredients"</h2>
                    {ingredient_table(ingredients)}
                </div>
            </div>
            <section class="meal-details__instructions">
                <h2>"Instructions"</h2>
                {instructions.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </section>
        </article>
    }
}
