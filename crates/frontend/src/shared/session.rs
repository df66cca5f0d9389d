//! Per-page session state.
//!
//! A session lives exactly as long as the loaded page. It owns the API
//! client, the memoized category list and the request generation counter, and
//! is handed to components through Leptos context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

use super::api_client::{MealDbApi, MealDbClient};
use super::config::AppConfig;

/// Category list fetched at most once per session.
///
/// The stored value is never invalidated. An empty result is stored as well,
/// so a failing API is not hammered by every panel that needs categories.
#[derive(Clone, Default)]
pub struct CategoryCache {
    slot: Arc<RwLock<Option<Arc<Vec<Category>>>>>,
}

impl CategoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self) -> Option<Arc<Vec<Category>>> {
        match self.slot.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub async fn get_or_fetch<A: MealDbApi>(&self, api: &A) -> Arc<Vec<Category>> {
        if let Some(categories) = self.cached() {
            return categories;
        }

        let fetched = Arc::new(api.categories().await);
        log::debug!("Category cache populated with {} entries", fetched.len());

        // First writer wins so every caller ends up holding the same list.
        let mut slot = match self.slot.write() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.get_or_insert_with(|| fetched).clone()
    }
}

/// Ticket handed out for one user-triggered search or filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic counter used to drop responses that were overtaken by a newer
/// action.
#[derive(Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[derive(Clone)]
pub struct SessionContext<A = MealDbClient> {
    pub api: A,
    pub categories: CategoryCache,
    pub requests: RequestGeneration,
}

impl SessionContext<MealDbClient> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_api(MealDbClient::new(config.api.base_url.clone()))
    }
}

impl<A: MealDbApi> SessionContext<A> {
    pub fn with_api(api: A) -> Self {
        Self {
            api,
            categories: CategoryCache::new(),
            requests: RequestGeneration::new(),
        }
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{sample_categories, FakeApi};
    use futures::executor::block_on;

    #[test]
    fn test_cache_fetches_once() {
        let api = FakeApi::with_categories(sample_categories());
        let cache = CategoryCache::new();

        let first = block_on(cache.get_or_fetch(&api));
        let second = block_on(cache.get_or_fetch(&api));

        assert_eq!(api.calls.categories.get(), 1);
        assert_eq!(first.len(), 3);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_keeps_empty_result() {
        let api = FakeApi::default();
        let cache = CategoryCache::new();

        let first = block_on(cache.get_or_fetch(&api));
        let second = block_on(cache.get_or_fetch(&api));

        assert!(first.is_empty());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(api.calls.categories.get(), 1);
    }

    #[test]
    fn test_clones_share_the_cache() {
        let api = FakeApi::with_categories(sample_categories());
        let cache = CategoryCache::new();
        let other_panel = cache.clone();

        let first = block_on(cache.get_or_fetch(&api));
        let second = block_on(other_panel.get_or_fetch(&api));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(api.calls.categories.get(), 1);
    }

    #[test]
    fn test_newer_ticket_makes_older_stale() {
        let requests = RequestGeneration::new();
        let first = requests.begin();
        assert!(requests.is_current(first));

        let second = requests.begin();
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }
}
