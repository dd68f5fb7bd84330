pub mod rakuten;

use serde_json::Value;

use crate::diagnostics::DiagnosticSink;
use crate::domain::NormalizedProduct;
use crate::error::{AdapterError, Result};

pub use rakuten::RakutenAdapter;

/// Base trait for marketplace-specific adapters.
///
/// Validation and narrowing are separate steps: `validate` only answers
/// whether a payload has the minimum shape, `parse` turns it into the typed
/// product, and `convert` is a total transform over that type.
pub trait MarketplaceAdapter: Send + Sync {
    /// Typed product as returned by the marketplace API
    type Product;
    /// Caller-supplied pricing overrides
    type PriceContext;

    /// Get the source tag this adapter writes into normalized records
    fn source_id(&self) -> &str;

    /// Get a human-readable name for this adapter
    fn name(&self) -> &str;

    fn validate(&self, candidate: &Value, diagnostics: &dyn DiagnosticSink) -> bool;

    fn parse(&self, candidate: &Value) -> Result<Self::Product>;

    fn convert(
        &self,
        product: &Self::Product,
        price_context: Option<&Self::PriceContext>,
    ) -> NormalizedProduct;

    /// Gate, narrow and transform a single raw payload
    fn normalize(
        &self,
        candidate: &Value,
        price_context: Option<&Self::PriceContext>,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<NormalizedProduct> {
        if !self.validate(candidate, diagnostics) {
            return Err(AdapterError::InvalidProduct {
                source_id: self.source_id().to_string(),
                reason: "missing or invalid item code, item name or item price".to_string(),
            });
        }
        let product = self.parse(candidate)?;
        Ok(self.convert(&product, price_context))
    }
}
