pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod logging;
pub mod platform;
pub mod text;

pub use diagnostics::{CollectingDiagnostics, DiagnosticSink, TracingDiagnostics};
pub use domain::{NormalizedProduct, Price, ProductMetadata};
pub use error::{AdapterError, Result};
pub use platform::rakuten::{
    convert_rakuten_product, parse_rakuten_product, validate_rakuten_product, RakutenAdapter,
    RakutenPriceContext, RakutenProduct,
};
pub use platform::MarketplaceAdapter;
