//! Marketplace identifiers and fixed values shared by the adapters.

/// Source tag written into `metadata.source` for Rakuten Ichiba records
pub const RAKUTEN_SOURCE: &str = "rakuten";

/// Home currency of Rakuten Ichiba, used when no price context overrides it
pub const RAKUTEN_DEFAULT_CURRENCY: &str = "JPY";

/// `taxFlag` value meaning the listed price already includes consumption tax.
/// Only this exact value counts (`1` and `1.0` alike); any other flag,
/// including a non-numeric one, means tax is not included.
pub const RAKUTEN_TAX_INCLUDED_FLAG: f64 = 1.0;
