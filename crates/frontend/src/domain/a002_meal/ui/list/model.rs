use contracts::domain::a002_meal::aggregate::MealSummary;

use crate::shared::api_client::MealDbApi;
use crate::shared::session::SessionContext;

/// Trimmed search text, or `None` if there is nothing to search for
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (!query.is_empty()).then(|| query.to_string())
}

/// Runs a name search. Returns `None` when the response was overtaken by a
/// newer search or category selection.
pub async fn search_meals<A: MealDbApi>(
    session: &SessionContext<A>,
    query: &str,
) -> Option<Vec<MealSummary>> {
    let ticket = session.requests.begin();
    let meals = session.api.search(query).await;

    if !session.requests.is_current(ticket) {
        log::debug!("Dropping stale search result for '{}'", query);
        return None;
    }
    log::info!("Search '{}' returned {} meals", query, meals.len());
    Some(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{meal, FakeApi};
    use futures::executor::block_on;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Arrabiata "), Some("Arrabiata".to_string()));
        assert_eq!(normalize_query("   "), None);
    }

    #[test]
    fn test_search_returns_results() {
        let mut api = FakeApi::default();
        api.search_results = vec![meal("52771", "Spicy Arrabiata Penne", Some("Vegetarian"), Some("Italian"))];
        let session = SessionContext::with_api(api);

        let meals = block_on(search_meals(&session, "Arrabiata")).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(session.api.calls.search.get(), 1);
    }

    #[test]
    fn test_only_latest_search_renders() {
        let session = SessionContext::with_api(FakeApi::default());
        let requests = session.requests.clone();
        session.api.while_in_flight(move || {
            requests.begin();
        });

        // A newer action starts while this one is in flight.
        assert_eq!(block_on(search_meals(&session, "pie")), None);

        *session.api.in_flight.borrow_mut() = None;
        assert_eq!(block_on(search_meals(&session, "pie")), Some(vec![]));
    }
}
