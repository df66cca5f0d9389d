//! TheMealDB client.
//!
//! Every operation issues exactly one request. Failures are logged and turned
//! into an empty result, so callers never see an error.

use contracts::domain::a001_category::aggregate::{CategoriesEnvelope, Category};
use contracts::domain::a002_meal::aggregate::{MealDetail, MealSummary, MealsEnvelope};

use super::api_utils::{get_json, Endpoint};

/// The four read operations the pages need.
///
/// Implemented by [`MealDbClient`] in the browser and by in-memory fakes in
/// tests.
#[allow(async_fn_in_trait)]
pub trait MealDbApi {
    async fn categories(&self) -> Vec<Category>;
    async fn search(&self, name: &str) -> Vec<MealSummary>;
    async fn filter_by_category(&self, category: &str) -> Vec<MealSummary>;
    async fn lookup(&self, id: &str) -> Option<MealDetail>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealDbClient {
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn fetch_meals(&self, endpoint: Endpoint<'_>) -> MealsEnvelope {
        let url = endpoint.url(&self.base_url);
        match get_json::<MealsEnvelope>(&url).await {
            Ok(envelope) => envelope,
            Err(e) => {
                log::error!("GET {} failed: {}", url, e);
                MealsEnvelope::default()
            }
        }
    }
}

impl MealDbApi for MealDbClient {
    async fn categories(&self) -> Vec<Category> {
        let url = Endpoint::Categories.url(&self.base_url);
        match get_json::<CategoriesEnvelope>(&url).await {
            Ok(envelope) => envelope.into_categories(),
            Err(e) => {
                log::error!("GET {} failed: {}", url, e);
                Vec::new()
            }
        }
    }

    async fn search(&self, name: &str) -> Vec<MealSummary> {
        self.fetch_meals(Endpoint::Search(name))
            .await
            .into_summaries(None)
    }

    async fn filter_by_category(&self, category: &str) -> Vec<MealSummary> {
        self.fetch_meals(Endpoint::FilterByCategory(category))
            .await
            .into_summaries(Some(category))
    }

    async fn lookup(&self, id: &str) -> Option<MealDetail> {
        self.fetch_meals(Endpoint::Lookup(id)).await.into_detail()
    }
}
