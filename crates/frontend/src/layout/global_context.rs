use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

use super::navigation::{redirect, select_category, NavAction, PageMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Hamburger button
    Toggle,
    CloseButton,
    OverlayClick,
    Escape,
    EntrySelected,
}

impl SidebarState {
    pub fn next(self, event: SidebarEvent) -> Self {
        match (self, event) {
            (SidebarState::Closed, SidebarEvent::Toggle) => SidebarState::Open,
            (SidebarState::Open, SidebarEvent::Toggle) => SidebarState::Closed,
            (_, SidebarEvent::CloseButton)
            | (_, SidebarEvent::OverlayClick)
            | (_, SidebarEvent::Escape)
            | (_, SidebarEvent::EntrySelected) => SidebarState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == SidebarState::Open
    }
}

/// Page-wide reactive state: page mode, sidebar, the shared category list and
/// the inline category selection consumed by the home page.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub mode: PageMode,
    pub sidebar: RwSignal<SidebarState>,
    pub categories: RwSignal<Vec<Category>>,
    pub categories_loaded: RwSignal<bool>,
    pub inline_selection: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new(mode: PageMode) -> Self {
        Self {
            mode,
            sidebar: RwSignal::new(SidebarState::Closed),
            categories: RwSignal::new(vec![]),
            categories_loaded: RwSignal::new(false),
            inline_selection: RwSignal::new(None),
        }
    }

    pub fn sidebar_event(&self, event: SidebarEvent) {
        self.sidebar.update(|state| *state = state.next(event));
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar.get().is_open()
    }

    /// Entry point for every category click, from the sidebar or a card.
    pub fn choose_category(&self, name: &str) {
        self.sidebar_event(SidebarEvent::EntrySelected);
        match select_category(self.mode, name) {
            NavAction::RenderInline(category) => {
                log::info!("Selecting category '{}' inline", category);
                self.inline_selection.set(Some(category));
            }
            NavAction::Redirect(url) => redirect(&url),
        }
    }

    pub fn clear_selection(&self) {
        self.inline_selection.set(None);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(SidebarState::Closed.next(SidebarEvent::Toggle), SidebarState::Open);
        assert_eq!(SidebarState::Open.next(SidebarEvent::Toggle), SidebarState::Closed);
    }

    #[test]
    fn test_close_events_force_closed() {
        for event in [
            SidebarEvent::CloseButton,
            SidebarEvent::OverlayClick,
            SidebarEvent::Escape,
            SidebarEvent::EntrySelected,
        ] {
            assert_eq!(SidebarState::Open.next(event), SidebarState::Closed);
            assert_eq!(SidebarState::Closed.next(event), SidebarState::Closed);
        }
    }

    #[test]
    fn test_inline_selection_on_home() {
        let ctx = AppGlobalContext::new(PageMode::Home);
        ctx.sidebar_event(SidebarEvent::Toggle);
        ctx.choose_category("Seafood");

        assert_eq!(ctx.inline_selection.get_untracked(), Some("Seafood".to_string()));
        assert_eq!(ctx.sidebar.get_untracked(), SidebarState::Closed);
    }
}
