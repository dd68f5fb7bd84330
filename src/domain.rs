use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Marketplace-agnostic product record handed to the catalog.
///
/// Optional fields are omitted from the serialized form when absent so the
/// catalog can tell "not provided" apart from an empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URLs in display order; empty when the source had none
    pub images: Vec<String>,
    pub price: Price,
    pub metadata: ProductMetadata,
}

/// Price as handed to the catalog. `amount` is a decimal string, never a
/// float, so the catalog never has to guess about precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: String,
    pub currency: String,
}

/// Source provenance plus marketplace-specific attributes.
/// Review figures are carried as the marketplace sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetadata {
    /// Which marketplace the record came from, e.g. `"rakuten"`
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    pub tax_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_average: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_url: Option<String>,
}
