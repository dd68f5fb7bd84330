//! Rakuten Ichiba item search results.
//!
//! Field names follow the Ichiba Item Search API; see
//! <https://webservice.rakuten.co.jp/documentation/ichiba-item-search>.

pub mod adapter;
pub mod types;

pub use adapter::{convert_rakuten_product, parse_rakuten_product, validate_rakuten_product, RakutenAdapter};
pub use types::{RakutenPriceContext, RakutenProduct};
