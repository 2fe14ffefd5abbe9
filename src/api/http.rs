use super::CocktailApi;
use crate::error::CocktailError;
use crate::model::Cocktail;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Public TheCocktailDB endpoint using the shared test key
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Every endpoint answers with this envelope.
#[derive(Deserialize)]
struct DrinksEnvelope {
    #[serde(default)]
    drinks: Value,
}

pub struct HttpCocktailApi {
    client: Client,
    base_url: String,
}

impl HttpCocktailApi {
    /// Create a client for `base_url`. Without a timeout, requests wait as
    /// long as the transport allows.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, CocktailError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpCocktailApi {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        HttpCocktailApi {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_drinks(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<Cocktail>, CocktailError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CocktailError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let drinks = parse_drinks(&body)?;
        debug!("{} returned {} record(s)", endpoint, drinks.len());
        Ok(drinks)
    }
}

/// Decode a response body into records.
///
/// `null`, a missing `drinks` key, a non-array value (the filter endpoint
/// answers unknown ingredients with a string) and an empty body all mean
/// "no records".
pub(crate) fn parse_drinks(body: &str) -> Result<Vec<Cocktail>, CocktailError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let envelope: DrinksEnvelope = serde_json::from_str(body)?;
    match envelope.drinks {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Cocktail>, _>>()
            .map_err(CocktailError::from),
        _ => Ok(Vec::new()),
    }
}

#[async_trait]
impl CocktailApi for HttpCocktailApi {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Cocktail>, CocktailError> {
        self.get_drinks("search.php", &[("s", name)]).await
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<Cocktail>, CocktailError> {
        self.get_drinks("filter.php", &[("i", ingredient)]).await
    }

    async fn random(&self) -> Result<Vec<Cocktail>, CocktailError> {
        self.get_drinks("random.php", &[]).await
    }

    async fn lookup(&self, id: &str) -> Result<Vec<Cocktail>, CocktailError> {
        self.get_drinks("lookup.php", &[("i", id)]).await
    }
}
