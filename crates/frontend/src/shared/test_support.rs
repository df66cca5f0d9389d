//! In-memory [`MealDbApi`] for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_meal::aggregate::{MealDetail, MealSummary};

use super::api_client::MealDbApi;

#[derive(Default)]
pub struct CallCounts {
    pub categories: Cell<usize>,
    pub search: Cell<usize>,
    pub filter: Cell<usize>,
    pub lookup: Cell<usize>,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.categories.get() + self.search.get() + self.filter.get() + self.lookup.get()
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub categories: Vec<Category>,
    pub by_category: HashMap<String, Vec<MealSummary>>,
    pub search_results: Vec<MealSummary>,
    pub details: HashMap<String, MealDetail>,
    pub calls: CallCounts,
    /// Runs while a search or filter request is "in flight"
    pub in_flight: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakeApi {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    pub fn while_in_flight(&self, hook: impl Fn() + 'static) {
        *self.in_flight.borrow_mut() = Some(Box::new(hook));
    }

    fn run_in_flight_hook(&self) {
        if let Some(hook) = self.in_flight.borrow().as_ref() {
            hook();
        }
    }
}

impl MealDbApi for FakeApi {
    async fn categories(&self) -> Vec<Category> {
        self.calls.categories.set(self.calls.categories.get() + 1);
        self.categories.clone()
    }

    async fn search(&self, _name: &str) -> Vec<MealSummary> {
        self.calls.search.set(self.calls.search.get() + 1);
        self.run_in_flight_hook();
        self.search_results.clone()
    }

    async fn filter_by_category(&self, category: &str) -> Vec<MealSummary> {
        self.calls.filter.set(self.calls.filter.get() + 1);
        self.run_in_flight_hook();
        self.by_category.get(category).cloned().unwrap_or_default()
    }

    async fn lookup(&self, id: &str) -> Option<MealDetail> {
        self.calls.lookup.set(self.calls.lookup.get() + 1);
        self.details.get(id).cloned()
    }
}

pub fn category(name: &str, description: Option<&str>) -> Category {
    Category {
        id: name.to_lowercase(),
        name: name.to_string(),
        thumbnail: Some(format!("https://img/{}.png", name.to_lowercase())),
        description: description.map(str::to_string),
    }
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        category("Beef", Some("Beef is the culinary name for meat from cattle. It is eaten worldwide.")),
        category("Seafood", Some("Seafood is any form of sea life regarded as food by humans.")),
        category("Vegan", None),
    ]
}

pub fn meal(id: &str, name: &str, category: Option<&str>, area: Option<&str>) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://img/{}.jpg", id)),
        category: category.map(str::to_string),
        area: area.map(str::to_string),
    }
}
