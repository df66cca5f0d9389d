pub mod global_context;
pub mod left;
pub mod navigation;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Page shell shared by all three pages.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (hamburger, title)             |
/// +------------------------------------------+
/// |  Content                                  |
/// +------------------------------------------+
///   Sidebar + overlay slide over the content
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <left::Sidebar />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
