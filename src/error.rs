use serde::Serialize;
use thiserror::Error;

/// Errors raised while talking to the cocktail API or setting up a client
#[derive(Error, Debug)]
pub enum CocktailError {
    /// Transport failure, or the HTTP client could not be constructed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("{endpoint} returned HTTP status {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body did not match the `{ "drinks": ... }` contract
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}

/// Why a search-style operation produced no displayable cocktail.
///
/// Every variant is recoverable: the caller shows the message and lets the
/// user try again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureReason {
    #[error("Please enter a cocktail name or ingredient to search.")]
    EmptyQuery,

    #[error("Failed to fetch cocktails. Please check your internet connection or try again later.")]
    NetworkError,

    #[error("No cocktails found for your search. Try a different name or ingredient.")]
    NoResultsFound,

    #[error("Failed to fetch a random cocktail.")]
    NoRandomAvailable,

    #[error("Could not find full details for this cocktail.")]
    DetailsNotFound,
}
