mod http;

pub use http::{HttpCocktailApi, DEFAULT_BASE_URL};

use crate::error::CocktailError;
use crate::model::Cocktail;
use async_trait::async_trait;

/// The four read-only endpoints of the cocktail API.
///
/// Implementations normalize a missing or `null` drink list to an empty
/// `Vec`; an `Err` always means the request itself failed.
#[async_trait]
pub trait CocktailApi: Send + Sync {
    /// `search.php?s={name}`
    async fn search_by_name(&self, name: &str) -> Result<Vec<Cocktail>, CocktailError>;

    /// `filter.php?i={ingredient}`, returns partial records
    async fn filter_by_ingredient(&self, ingredient: &str)
        -> Result<Vec<Cocktail>, CocktailError>;

    /// `random.php`
    async fn random(&self) -> Result<Vec<Cocktail>, CocktailError>;

    /// `lookup.php?i={id}`
    async fn lookup(&self, id: &str) -> Result<Vec<Cocktail>, CocktailError>;
}
