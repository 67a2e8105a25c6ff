//! Search Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resources::products::ProductId;

/// Condensed product row for autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProduct {
    /// Product id.
    pub id: ProductId,
    /// Localized name.
    pub name: String,
    /// Current price, tax included.
    pub price: Decimal,
    /// Thumbnail URL.
    pub image: Option<String>,
    /// URL slug.
    pub link_rewrite: Option<String>,
    /// Main category name.
    pub category_name: Option<String>,
}

/// What a suggestion points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A product page.
    Product,
    /// A category page.
    Category,
    /// A brand page.
    Manufacturer,
    /// A query to run.
    Query,

    /// Any kind this client does not know.
    #[serde(other)]
    Other,
}

/// Autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// What the entry points at.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Text shown to the user.
    pub label: String,

    /// Id of the suggested entity, when it is one.
    pub id: Option<u64>,
    /// Storefront link, when the backend has one.
    pub url: Option<String>,
}

/// Autocomplete results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching products.
    #[serde(default)]
    pub products: Vec<SearchProduct>,

    /// Related suggestions.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl SearchResults {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.suggestions.is_empty()
    }

    /// Suggestions of one kind.
    pub fn suggestions_of(&self, kind: SuggestionKind) -> impl Iterator<Item = &Suggestion> {
        self.suggestions
            .iter()
            .filter(move |suggestion| suggestion.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn unknown_suggestion_types_are_kept() -> TestResult {
        let results: SearchResults = serde_json::from_value(json!({
            "suggestions": [
                { "type": "category", "label": "Freinage", "id": 3 },
                { "type": "cms", "label": "Livraison" }
            ]
        }))?;

        assert_eq!(results.suggestions_of(SuggestionKind::Category).count(), 1);
        assert_eq!(results.suggestions_of(SuggestionKind::Other).count(), 1);
        assert!(results.products.is_empty());

        Ok(())
    }
}
