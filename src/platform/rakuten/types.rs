use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Item as returned by the Ichiba Item Search API.
///
/// Only `item_code`, `item_name` and `item_price` are guaranteed once a
/// payload has passed [`super::validate_rakuten_product`]. Every other field
/// is `None` when the API left it out or sent a value of the wrong type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RakutenProduct {
    pub item_code: String,
    pub item_name: String,
    /// HTML-flavoured caption text
    #[serde(default, deserialize_with = "lenient")]
    pub item_caption: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shop_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shop_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub genre_id: Option<String>,
    /// Kept as the parsed JSON number so the amount string matches the payload
    pub item_price: Number,
    /// 0: tax excluded, 1: tax included
    #[serde(default, deserialize_with = "lenient")]
    pub tax_flag: Option<Number>,
    /// 0: shipping not included, 1: shipping included
    #[serde(default, deserialize_with = "lenient")]
    pub postage_flag: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub credit_card_flag: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub shop_of_the_year_flag: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub ship_overseas_flag: Option<Number>,
    /// Same-day delivery
    #[serde(default, deserialize_with = "lenient")]
    pub asuraku_flag: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub point_rate: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub point_rate_start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub point_rate_end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub review_count: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub review_average: Option<Number>,
    /// 0: unavailable, 1: available
    #[serde(default, deserialize_with = "lenient")]
    pub availability: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub medium_image_urls: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub small_image_urls: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub item_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shop_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tag_ids: Option<Vec<i64>>,
}

// A wrongly typed optional field reads as absent instead of failing the item
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl RakutenProduct {
    /// Product with only the mandatory fields set
    pub fn new(item_code: impl Into<String>, item_name: impl Into<String>, item_price: impl Into<Number>) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            item_caption: None,
            shop_code: None,
            shop_name: None,
            genre_id: None,
            item_price: item_price.into(),
            tax_flag: None,
            postage_flag: None,
            credit_card_flag: None,
            shop_of_the_year_flag: None,
            ship_overseas_flag: None,
            asuraku_flag: None,
            point_rate: None,
            point_rate_start_time: None,
            point_rate_end_time: None,
            review_count: None,
            review_average: None,
            availability: None,
            medium_image_urls: None,
            small_image_urls: None,
            item_url: None,
            shop_url: None,
            tag_ids: None,
        }
    }
}

/// Caller-side pricing overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RakutenPriceContext {
    /// ISO currency code replacing the marketplace default when non-empty
    #[serde(default)]
    pub currency: Option<String>,
    /// Informational only; the tax flag on the product decides `taxIncluded`
    #[serde(default)]
    pub include_tax: Option<bool>,
}
