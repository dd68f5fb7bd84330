use serde::Deserialize;
use serde_json::{Number, Value};

use super::types::{RakutenPriceContext, RakutenProduct};
use crate::constants::{RAKUTEN_DEFAULT_CURRENCY, RAKUTEN_SOURCE, RAKUTEN_TAX_INCLUDED_FLAG};
use crate::diagnostics::DiagnosticSink;
use crate::domain::{NormalizedProduct, Price, ProductMetadata};
use crate::error::Result;
use crate::platform::MarketplaceAdapter;
use crate::text::{decimal_string, strip_markup};

/// Convert a Rakuten item into a catalog record.
///
/// Expects a payload that already passed [`validate_rakuten_product`]; it
/// does not re-check anything and never fails. Fields the marketplace left
/// out stay `None` in the metadata.
pub fn convert_rakuten_product(
    product: &RakutenProduct,
    price_context: Option<&RakutenPriceContext>,
) -> NormalizedProduct {
    let currency = price_context
        .and_then(|ctx| ctx.currency.as_deref())
        .filter(|currency| !currency.is_empty())
        .unwrap_or(RAKUTEN_DEFAULT_CURRENCY)
        .to_string();

    // Exact match on the sentinel, not "any nonzero flag"
    let tax_included =
        product.tax_flag.as_ref().and_then(Number::as_f64) == Some(RAKUTEN_TAX_INCLUDED_FLAG);

    let price = Price {
        amount: decimal_string(&product.item_price),
        currency,
    };

    // Medium images first; an empty medium list falls through to the small ones
    let images = match (&product.medium_image_urls, &product.small_image_urls) {
        (Some(medium), _) if !medium.is_empty() => medium.clone(),
        (_, Some(small)) => small.clone(),
        _ => Vec::new(),
    };

    let description = product
        .item_caption
        .as_deref()
        .filter(|caption| !caption.is_empty())
        .map(strip_markup);

    NormalizedProduct {
        id: product.item_code.clone(),
        title: product.item_name.clone(),
        description,
        images,
        price,
        metadata: ProductMetadata {
            source: RAKUTEN_SOURCE.to_string(),
            shop_code: product.shop_code.clone(),
            shop_name: product.shop_name.clone(),
            genre_id: product.genre_id.clone(),
            tax_included,
            review_count: product.review_count.clone(),
            review_average: product.review_average.clone(),
            item_url: product.item_url.clone(),
            shop_url: product.shop_url.clone(),
        },
    }
}

/// Check that an untyped payload carries the fields conversion relies on.
///
/// Only the item code, item name and item price decide the result. A
/// product without any image is still valid; it is reported to
/// `diagnostics` instead.
pub fn validate_rakuten_product(candidate: &Value, diagnostics: &dyn DiagnosticSink) -> bool {
    // Arrays pass this check but carry no named fields, so they fail below
    if !matches!(candidate, Value::Object(_) | Value::Array(_)) {
        return false;
    }

    if !is_non_blank_string(candidate.get("itemCode")) {
        return false;
    }
    if !is_non_blank_string(candidate.get("itemName")) {
        return false;
    }
    match candidate.get("itemPrice").and_then(Value::as_f64) {
        Some(price) if price >= 0.0 => {}
        _ => return false,
    }

    let has_images = is_non_empty_array(candidate.get("mediumImageUrls"))
        || is_non_empty_array(candidate.get("smallImageUrls"));
    if !has_images {
        diagnostics.warn(RAKUTEN_SOURCE, "Product has no images");
    }

    true
}

/// Narrow a validated payload into the typed product.
pub fn parse_rakuten_product(candidate: &Value) -> Result<RakutenProduct> {
    let product = RakutenProduct::deserialize(candidate)?;
    Ok(product)
}

fn is_non_blank_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

fn is_non_empty_array(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_array)
        .map(|items| !items.is_empty())
        .unwrap_or(false)
}

/// [`MarketplaceAdapter`] for Rakuten Ichiba
#[derive(Debug, Default, Clone, Copy)]
pub struct RakutenAdapter;

impl RakutenAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl MarketplaceAdapter for RakutenAdapter {
    type Product = RakutenProduct;
    type PriceContext = RakutenPriceContext;

    fn source_id(&self) -> &str {
        RAKUTEN_SOURCE
    }

    fn name(&self) -> &str {
        "Rakuten Ichiba Adapter"
    }

    fn validate(&self, candidate: &Value, diagnostics: &dyn DiagnosticSink) -> bool {
        validate_rakuten_product(candidate, diagnostics)
    }

    fn parse(&self, candidate: &Value) -> Result<RakutenProduct> {
        parse_rakuten_product(candidate)
    }

    fn convert(
        &self,
        product: &RakutenProduct,
        price_context: Option<&RakutenPriceContext>,
    ) -> NormalizedProduct {
        convert_rakuten_product(product, price_context)
    }
}
