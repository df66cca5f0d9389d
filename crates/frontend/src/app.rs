use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::PageMode;
use crate::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::session::SessionContext;

/// One category load per page; the sidebar, the home grid and the
/// description panels all read it from the context or the session cache.
fn load_categories(session: SessionContext, ctx: AppGlobalContext) {
    spawn_local(async move {
        let categories = session.categories.get_or_fetch(&session.api).await;
        ctx.categories.set((*categories).clone());
        ctx.categories_loaded.set(true);
    });
}

#[component]
pub fn App(mode: PageMode) -> impl IntoView {
    let config = load_config();
    log::info!("Mounting {} page against {}", mode.as_str(), config.api.base_url);

    let session = SessionContext::new(&config);
    let ctx = AppGlobalContext::new(mode);

    if mode.preloads_categories() {
        load_categories(session.clone(), ctx);
    } else {
        let deferred = session.clone();
        Effect::new(move |started: Option<bool>| {
            if started == Some(true) {
                return true;
            }
            if !ctx.is_sidebar_open() {
                return false;
            }
            load_categories(deferred.clone(), ctx);
            true
        });
    }

    provide_context(session);
    provide_context(ctx);

    view! {
        <AppRoutes mode=mode />
    }
}
