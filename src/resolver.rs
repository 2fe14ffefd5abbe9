use crate::api::CocktailApi;
use crate::error::{CocktailError, FailureReason};
use crate::model::{non_empty, Cocktail, IngredientLine};
use log::{debug, info, warn};
use serde::Serialize;

/// Result of a search-style operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchOutcome {
    /// Nothing matched
    Empty,
    /// Exactly one record, to be shown without further selection
    Single(Cocktail),
    /// Several records awaiting a choice
    Many(Vec<Cocktail>),
    Failed(FailureReason),
}

impl SearchOutcome {
    fn from_records(mut records: Vec<Cocktail>) -> Self {
        match records.len() {
            0 => SearchOutcome::Empty,
            1 => SearchOutcome::Single(records.remove(0)),
            _ => SearchOutcome::Many(records),
        }
    }
}

/// Resolves free-text queries, random picks and id lookups into a
/// [`SearchOutcome`].
///
/// Text queries search by name first and only fall back to the ingredient
/// filter when the name search yields nothing. The two result sets are never
/// merged. A transport failure on the name search is reported as is and the
/// fallback is not attempted.
pub struct SearchResolver<A> {
    api: A,
    hydrate_single_filter_result: bool,
}

impl<A: CocktailApi> SearchResolver<A> {
    pub fn new(api: A) -> Self {
        SearchResolver {
            api,
            hydrate_single_filter_result: false,
        }
    }

    /// When enabled, a lone ingredient-filter hit is re-fetched by id so the
    /// reported `Single` carries ingredients and instructions.
    pub fn hydrate_single_filter_result(mut self, enabled: bool) -> Self {
        self.hydrate_single_filter_result = enabled;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn resolve_by_text(&self, query: &str) -> SearchOutcome {
        let term = query.trim();
        if term.is_empty() {
            return SearchOutcome::Failed(FailureReason::EmptyQuery);
        }

        let by_name = match self.api.search_by_name(term).await {
            Ok(records) => records,
            Err(e) => return network_failure("name search", &e),
        };
        if !by_name.is_empty() {
            info!("'{}' matched {} cocktail(s) by name", term, by_name.len());
            return SearchOutcome::from_records(by_name);
        }

        debug!("No name match for '{}', trying ingredient filter", term);
        let by_ingredient = match self.api.filter_by_ingredient(term).await {
            Ok(records) => records,
            Err(e) => return network_failure("ingredient filter", &e),
        };
        info!(
            "'{}' matched {} cocktail(s) by ingredient",
            term,
            by_ingredient.len()
        );

        if self.hydrate_single_filter_result && by_ingredient.len() == 1 {
            let id = by_ingredient[0].id.clone();
            debug!("Hydrating lone filter result {}", id);
            return self.resolve_details_by_id(&id).await;
        }

        SearchOutcome::from_records(by_ingredient)
    }

    pub async fn resolve_random(&self) -> SearchOutcome {
        match self.api.random().await {
            Ok(records) => match records.into_iter().next() {
                Some(cocktail) => {
                    info!("Random pick: {} ({})", cocktail.name, cocktail.id);
                    SearchOutcome::Single(cocktail)
                }
                None => SearchOutcome::Failed(FailureReason::NoRandomAvailable),
            },
            Err(e) => network_failure("random pick", &e),
        }
    }

    /// Fetch the full record for `id`. A successful result replaces whatever
    /// list the caller was showing.
    pub async fn resolve_details_by_id(&self, id: &str) -> SearchOutcome {
        let id = id.trim();
        if id.is_empty() {
            return SearchOutcome::Failed(FailureReason::DetailsNotFound);
        }

        match self.api.lookup(id).await {
            Ok(records) => match records.into_iter().next() {
                Some(cocktail) => SearchOutcome::Single(cocktail),
                None => {
                    debug!("Lookup for {} returned no record", id);
                    SearchOutcome::Failed(FailureReason::DetailsNotFound)
                }
            },
            Err(e) => network_failure("lookup", &e),
        }
    }
}

fn network_failure(step: &str, error: &CocktailError) -> SearchOutcome {
    warn!("Cocktail API {} failed: {}", step, error);
    SearchOutcome::Failed(FailureReason::NetworkError)
}

/// Ingredient lines of `record` in slot order.
///
/// Slots whose ingredient is missing or blank are skipped. Measures are
/// trimmed and a blank measure counts as absent.
pub fn extract_ingredient_lines(record: &Cocktail) -> impl Iterator<Item = IngredientLine> + '_ {
    record.slots.iter().filter_map(|slot| {
        let ingredient = non_empty(slot.ingredient.as_deref())?;
        Some(IngredientLine {
            measure: non_empty(slot.measure.as_deref()).map(String::from),
            ingredient: ingredient.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientSlot, INGREDIENT_SLOTS};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    type Reply = Result<Vec<Cocktail>, ()>;

    /// Answers from canned replies and records every call.
    #[derive(Default)]
    struct ScriptedApi {
        by_name: HashMap<String, Reply>,
        by_ingredient: HashMap<String, Reply>,
        by_id: HashMap<String, Reply>,
        random: Option<Reply>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn reply(reply: Option<&Reply>) -> Result<Vec<Cocktail>, CocktailError> {
            match reply {
                Some(Ok(records)) => Ok(records.clone()),
                Some(Err(())) => Err(CocktailError::Status {
                    endpoint: "scripted".to_string(),
                    status: 503,
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CocktailApi for ScriptedApi {
        async fn search_by_name(&self, name: &str) -> Result<Vec<Cocktail>, CocktailError> {
            self.record(format!("search:{}", name));
            Self::reply(self.by_name.get(name))
        }

        async fn filter_by_ingredient(
            &self,
            ingredient: &str,
        ) -> Result<Vec<Cocktail>, CocktailError> {
            self.record(format!("filter:{}", ingredient));
            Self::reply(self.by_ingredient.get(ingredient))
        }

        async fn random(&self) -> Result<Vec<Cocktail>, CocktailError> {
            self.record("random".to_string());
            Self::reply(self.random.as_ref())
        }

        async fn lookup(&self, id: &str) -> Result<Vec<Cocktail>, CocktailError> {
            self.record(format!("lookup:{}", id));
            Self::reply(self.by_id.get(id))
        }
    }

    fn drinks(names: &[&str]) -> Vec<Cocktail> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Cocktail::partial(format!("{}", 1000 + i), *name, None))
            .collect()
    }

    fn full(id: &str, name: &str) -> Cocktail {
        let mut cocktail = Cocktail::partial(id, name, None);
        cocktail.instructions = Some("Stir.".to_string());
        cocktail.slots[0].ingredient = Some("Gin".to_string());
        cocktail
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_calls() {
        let resolver = SearchResolver::new(ScriptedApi::default());

        let outcome = resolver.resolve_by_text("   ").await;

        assert_eq!(outcome, SearchOutcome::Failed(FailureReason::EmptyQuery));
        assert!(resolver.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_name_match_skips_fallback() {
        let mut api = ScriptedApi::default();
        api.by_name.insert(
            "margarita".to_string(),
            Ok(drinks(&["Margarita", "Blue Margarita", "Tommy's Margarita"])),
        );
        api.by_ingredient
            .insert("margarita".to_string(), Ok(drinks(&["Should not appear"])));
        let resolver = SearchResolver::new(api);

        let outcome = resolver.resolve_by_text("margarita").await;

        match outcome {
            SearchOutcome::Many(records) => assert_eq!(records.len(), 3),
            other => panic!("Expected Many, got {:?}", other),
        }
        assert_eq!(resolver.api().calls(), vec!["search:margarita"]);
    }

    #[tokio::test]
    async fn test_query_is_trimmed() {
        let mut api = ScriptedApi::default();
        api.by_name
            .insert("mojito".to_string(), Ok(drinks(&["Mojito"])));
        let resolver = SearchResolver::new(api);

        let outcome = resolver.resolve_by_text("  mojito \n").await;

        assert!(matches!(outcome, SearchOutcome::Single(ref c) if c.name == "Mojito"));
        assert_eq!(resolver.api().calls(), vec!["search:mojito"]);
    }

    #[tokio::test]
    async fn test_ingredient_fallback_many() {
        let mut api = ScriptedApi::default();
        api.by_ingredient.insert(
            "vodka".to_string(),
            Ok(drinks(&["A", "B", "C", "D", "E"])),
        );
        let resolver = SearchResolver::new(api);

        let outcome = resolver.resolve_by_text("vodka").await;

        match outcome {
            SearchOutcome::Many(records) => {
                assert_eq!(records.len(), 5);
                assert!(records.iter().all(Cocktail::is_partial));
            }
            other => panic!("Expected Many, got {:?}", other),
        }
        assert_eq!(resolver.api().calls(), vec!["search:vodka", "filter:vodka"]);
    }

    #[tokio::test]
    async fn test_single_filter_result_is_selected_as_is() {
        let mut api = ScriptedApi::default();
        api.by_ingredient
            .insert("absinthe".to_string(), Ok(drinks(&["Death in the Afternoon"])));
        let resolver = SearchResolver::new(api);

        let outcome = resolver.resolve_by_text("absinthe").await;

        match outcome {
            SearchOutcome::Single(cocktail) => assert!(cocktail.is_partial()),
            other => panic!("Expected Single, got {:?}", other),
        }
        assert_eq!(resolver.api().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_single_filter_result_hydrated_when_enabled() {
        let mut api = ScriptedApi::default();
        api.by_ingredient
            .insert("absinthe".to_string(), Ok(drinks(&["Death in the Afternoon"])));
        api.by_id.insert(
            "1000".to_string(),
            Ok(vec![full("1000", "Death in the Afternoon")]),
        );
        let resolver = SearchResolver::new(api).hydrate_single_filter_result(true);

        let outcome = resolver.resolve_by_text("absinthe").await;

        match outcome {
            SearchOutcome::Single(cocktail) => assert!(!cocktail.is_partial()),
            other => panic!("Expected Single, got {:?}", other),
        }
        assert_eq!(
            resolver.api().calls(),
            vec!["search:absinthe", "filter:absinthe", "lookup:1000"]
        );
    }

    #[tokio::test]
    async fn test_both_steps_empty() {
        let resolver = SearchResolver::new(ScriptedApi::default());

        let outcome = resolver.resolve_by_text("unobtainium").await;

        assert_eq!(outcome, SearchOutcome::Empty);
        assert_eq!(resolver.api().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_name_search_failure_does_not_fall_back() {
        let mut api = ScriptedApi::default();
        api.by_name.insert("gin".to_string(), Err(()));
        api.by_ingredient
            .insert("gin".to_string(), Ok(drinks(&["Gimlet"])));
        let resolver = SearchResolver::new(api);

        let outcome = resolver.resolve_by_text("gin").await;

        assert_eq!(outcome, SearchOutcome::Failed(FailureReason::NetworkError));
        assert_eq!(resolver.api().calls(), vec!["search:gin"]);
    }

    #[tokio::test]
    async fn test_filter_failure_is_network_error() {
        let mut api = ScriptedApi::default();
        api.by_ingredient.insert("rum".to_string(), Err(()));
        let resolver = SearchResolver::new(api);

        let outcome = resolver.resolve_by_text("rum").await;

        assert_eq!(outcome, SearchOutcome::Failed(FailureReason::NetworkError));
    }

    #[tokio::test]
    async fn test_repeated_query_is_idempotent() {
        let mut api = ScriptedApi::default();
        api.by_name
            .insert("negroni".to_string(), Ok(drinks(&["Negroni", "White Negroni"])));
        let resolver = SearchResolver::new(api);

        let first = resolver.resolve_by_text("negroni").await;
        let second = resolver.resolve_by_text("negroni").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_random_outcomes() {
        let mut api = ScriptedApi::default();
        api.random = Some(Ok(drinks(&["Surprise"])));
        let resolver = SearchResolver::new(api);
        assert!(matches!(
            resolver.resolve_random().await,
            SearchOutcome::Single(ref c) if c.name == "Surprise"
        ));

        let resolver = SearchResolver::new(ScriptedApi::default());
        assert_eq!(
            resolver.resolve_random().await,
            SearchOutcome::Failed(FailureReason::NoRandomAvailable)
        );

        let mut api = ScriptedApi::default();
        api.random = Some(Err(()));
        let resolver = SearchResolver::new(api);
        assert_eq!(
            resolver.resolve_random().await,
            SearchOutcome::Failed(FailureReason::NetworkError)
        );
        assert_eq!(resolver.api().calls(), vec!["random"]);
    }

    #[tokio::test]
    async fn test_details_by_id() {
        let mut api = ScriptedApi::default();
        api.by_id
            .insert("17222".to_string(), Ok(vec![full("17222", "A1")]));
        api.by_id.insert("500".to_string(), Err(()));
        let resolver = SearchResolver::new(api);

        assert!(matches!(
            resolver.resolve_details_by_id("17222").await,
            SearchOutcome::Single(ref c) if c.id == "17222"
        ));
        assert_eq!(
            resolver.resolve_details_by_id("404").await,
            SearchOutcome::Failed(FailureReason::DetailsNotFound)
        );
        assert_eq!(
            resolver.resolve_details_by_id("500").await,
            SearchOutcome::Failed(FailureReason::NetworkError)
        );
    }

    #[tokio::test]
    async fn test_blank_id_makes_no_call() {
        let resolver = SearchResolver::new(ScriptedApi::default());

        let outcome = resolver.resolve_details_by_id(" ").await;

        assert_eq!(outcome, SearchOutcome::Failed(FailureReason::DetailsNotFound));
        assert!(resolver.api().calls().is_empty());
    }

    #[test]
    fn test_extract_lines_sparse_slots() {
        let mut cocktail = Cocktail::partial("1", "Sparse", None);
        cocktail.slots[0] = IngredientSlot {
            ingredient: Some("  Vodka ".to_string()),
            measure: Some(" 2 oz ".to_string()),
        };
        cocktail.slots[2] = IngredientSlot {
            ingredient: Some("Lime juice".to_string()),
            measure: None,
        };
        cocktail.slots[6] = IngredientSlot {
            ingredient: Some("Ginger beer".to_string()),
            measure: Some("Top".to_string()),
        };

        let lines: Vec<String> = extract_ingredient_lines(&cocktail)
            .map(|line| line.to_string())
            .collect();

        assert_eq!(lines, vec!["2 oz Vodka", "Lime juice", "Top Ginger beer"]);
    }

    #[test]
    fn test_extract_lines_skips_blank_ingredients() {
        let mut cocktail = Cocktail::partial("1", "Blanks", None);
        cocktail.slots[0].ingredient = Some("".to_string());
        cocktail.slots[0].measure = Some("1 oz".to_string());
        cocktail.slots[1].ingredient = Some("   ".to_string());
        cocktail.slots[4].ingredient = Some("Sugar".to_string());
        cocktail.slots[4].measure = Some("   ".to_string());

        let lines: Vec<IngredientLine> = extract_ingredient_lines(&cocktail).collect();

        assert_eq!(
            lines,
            vec![IngredientLine {
                measure: None,
                ingredient: "Sugar".to_string(),
            }]
        );
        assert_eq!(cocktail.slots.len(), INGREDIENT_SLOTS);
    }

    #[test]
    fn test_extract_lines_partial_record() {
        let cocktail = Cocktail::partial("1", "Partial", None);
        assert_eq!(extract_ingredient_lines(&cocktail).count(), 0);
    }
}
