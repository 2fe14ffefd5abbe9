use std::time::Duration;

use crate::api::HttpCocktailApi;
use crate::config::FinderConfig;
use crate::resolver::SearchResolver;
use crate::session::Session;
use crate::CocktailError;

/// Builder for an HTTP-backed [`SearchResolver`]
#[derive(Debug, Default)]
pub struct CocktailFinderBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    hydrate_single_filter_result: bool,
}

impl CocktailFinderBuilder {
    /// Start from loaded configuration; later calls override it
    ///
    /// # Example
    /// ```
    /// use cocktail_finder::{CocktailFinder, FinderConfig};
    ///
    /// let builder = CocktailFinder::builder().config(&FinderConfig::default());
    /// ```
    pub fn config(mut self, config: &FinderConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.timeout = config.timeout_duration();
        self.user_agent = Some(config.user_agent.clone());
        self.hydrate_single_filter_result = config.hydrate_single_filter_result;
        self
    }

    /// Point the client at another API host, e.g. a mirror or a test server
    ///
    /// # Example
    /// ```
    /// use cocktail_finder::CocktailFinder;
    ///
    /// let builder = CocktailFinder::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use cocktail_finder::CocktailFinder;
    /// use std::time::Duration;
    ///
    /// let builder = CocktailFinder::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Re-fetch a lone ingredient-filter hit by id so it carries full details
    pub fn hydrate_single_filter_result(mut self, enabled: bool) -> Self {
        self.hydrate_single_filter_result = enabled;
        self
    }

    /// Build the resolver
    ///
    /// # Errors
    /// Returns `CocktailError` if the base URL is blank or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<SearchResolver<HttpCocktailApi>, CocktailError> {
        let defaults = FinderConfig::default();

        let base_url = self.base_url.unwrap_or(defaults.base_url);
        if base_url.trim().is_empty() {
            return Err(CocktailError::BuilderError(
                "Base URL cannot be empty".to_string(),
            ));
        }
        let user_agent = self.user_agent.unwrap_or(defaults.user_agent);

        let api = HttpCocktailApi::new(base_url.trim(), self.timeout, &user_agent)?;
        Ok(SearchResolver::new(api).hydrate_single_filter_result(self.hydrate_single_filter_result))
    }

    /// Build a [`Session`] around the resolver
    pub fn build_session(self) -> Result<Session<HttpCocktailApi>, CocktailError> {
        Ok(Session::new(self.build()?))
    }
}

/// Main entry point for the builder API
pub struct CocktailFinder;

impl CocktailFinder {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use cocktail_finder::CocktailFinder;
    ///
    /// let resolver = CocktailFinder::builder().build().unwrap();
    /// ```
    pub fn builder() -> CocktailFinderBuilder {
        CocktailFinderBuilder::default()
    }
}
