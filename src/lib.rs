pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod resolver;
pub mod session;

pub use api::{CocktailApi, HttpCocktailApi};
pub use builder::{CocktailFinder, CocktailFinderBuilder};
pub use crate::config::FinderConfig;
pub use error::{CocktailError, FailureReason};
pub use model::{Cocktail, ImageSize, IngredientLine, IngredientSlot};
pub use resolver::{extract_ingredient_lines, SearchOutcome, SearchResolver};
pub use session::{RequestTicket, Session, ViewState};

fn configured_resolver() -> Result<SearchResolver<HttpCocktailApi>, CocktailError> {
    let config = FinderConfig::load()?;
    CocktailFinder::builder().config(&config).build()
}

/// Search by cocktail name, falling back to ingredient
///
/// Uses the API configured through `config.toml` / `COCKTAIL__*` variables,
/// which defaults to the public TheCocktailDB host.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = cocktail_finder::search("margarita").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str) -> Result<SearchOutcome, CocktailError> {
    Ok(configured_resolver()?.resolve_by_text(query).await)
}

/// Fetch one random cocktail from the configured API
pub async fn random_cocktail() -> Result<SearchOutcome, CocktailError> {
    Ok(configured_resolver()?.resolve_random().await)
}

/// Fetch the full record for a cocktail id from the configured API
pub async fn cocktail_details(id: &str) -> Result<SearchOutcome, CocktailError> {
    Ok(configured_resolver()?.resolve_details_by_id(id).await)
}
