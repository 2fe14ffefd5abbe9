use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Number of indexed ingredient/measure pairs a cocktail record can carry.
pub const INGREDIENT_SLOTS: usize = 15;

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x300/E0E0E0/616161?text=No+Image";

/// A cocktail record as returned by the API.
///
/// Records coming from the ingredient filter endpoint only carry `id`,
/// `name` and `thumbnail_url`; see [`Cocktail::is_partial`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCocktail")]
pub struct Cocktail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub glass: Option<String>,
    pub alcoholic_type: Option<String>,
    pub instructions: Option<String>,
    pub tags: Vec<String>,
    /// Ingredient/measure pairs in slot order (slot 1 first)
    pub slots: Vec<IngredientSlot>,
}

/// One indexed ingredient/measure pair, exactly as the API sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// A displayable ingredient line: optional measure followed by the ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub measure: Option<String>,
    pub ingredient: String,
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{} {}", measure, self.ingredient),
            None => f.write_str(&self.ingredient),
        }
    }
}

/// Image variants served by the API's image host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    #[default]
    Original,
    Medium,
    Small,
    Preview,
}

impl ImageSize {
    fn suffix(&self) -> &str {
        match self {
            ImageSize::Original => "",
            ImageSize::Medium => "/medium",
            ImageSize::Small => "/small",
            ImageSize::Preview => "/preview",
        }
    }
}

impl Cocktail {
    /// Create a record carrying only the fields the ingredient filter returns
    pub fn partial(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail_url: Option<String>,
    ) -> Self {
        Cocktail {
            id: id.into(),
            name: name.into(),
            thumbnail_url,
            category: None,
            glass: None,
            alcoholic_type: None,
            instructions: None,
            tags: Vec::new(),
            slots: vec![IngredientSlot::default(); INGREDIENT_SLOTS],
        }
    }

    /// True when the record lacks both instructions and ingredients, which is
    /// the shape returned by the ingredient filter endpoint.
    pub fn is_partial(&self) -> bool {
        self.instructions.is_none()
            && self
                .slots
                .iter()
                .all(|slot| non_empty(slot.ingredient.as_deref()).is_none())
    }

    /// URL of the drink image in the requested size, or a placeholder image
    /// when the record has no thumbnail.
    pub fn image_url(&self, size: ImageSize) -> String {
        match &self.thumbnail_url {
            Some(url) => format!("{}{}", url.trim_end_matches('/'), size.suffix()),
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Wire shape of a drink. Ingredient and measure fields are keyed
/// `strIngredient1..15` / `strMeasure1..15` and are picked out of `rest`.
#[derive(Deserialize)]
struct RawCocktail {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail_url: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strGlass", default)]
    glass: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    alcoholic_type: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawCocktail> for Cocktail {
    fn from(mut raw: RawCocktail) -> Self {
        let mut take = |key: String| match raw.rest.remove(&key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        let slots = (1..=INGREDIENT_SLOTS)
            .map(|i| IngredientSlot {
                ingredient: take(format!("strIngredient{}", i)),
                measure: take(format!("strMeasure{}", i)),
            })
            .collect();

        let owned = |value: Option<String>| non_empty(value.as_deref()).map(String::from);

        Cocktail {
            id: raw.id,
            name: raw.name,
            thumbnail_url: owned(raw.thumbnail_url),
            category: owned(raw.category),
            glass: owned(raw.glass),
            alcoholic_type: owned(raw.alcoholic_type),
            instructions: owned(raw.instructions),
            tags: raw
                .tags
                .as_deref()
                .map(|tags| {
                    tags.split(',')
                        .filter_map(|t| non_empty(Some(t)))
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            slots,
        }
    }
}
