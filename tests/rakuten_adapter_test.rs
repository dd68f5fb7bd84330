use catalog_adapters::{
    convert_rakuten_product, parse_rakuten_product, validate_rakuten_product, CollectingDiagnostics,
    MarketplaceAdapter, RakutenAdapter, RakutenPriceContext,
};
use jsonschema::JSONSchema;
use serde_json::{json, Value};

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn compiled_schema() -> JSONSchema {
    let schema = include_str!("../schemas/normalized_product.v1.json");
    let schema_json: Value = serde_json::from_str(schema).unwrap();
    let schema_static: &'static Value = Box::leak(Box::new(schema_json));
    JSONSchema::options().compile(schema_static).unwrap()
}

#[test]
fn headphones_fixture_normalizes_to_catalog_shape() {
    let candidate = fixture(include_str!("resources/rakuten_headphones.json"));
    let diagnostics = CollectingDiagnostics::new();

    assert!(validate_rakuten_product(&candidate, &diagnostics));
    assert!(diagnostics.is_empty());

    let product = parse_rakuten_product(&candidate).unwrap();
    let normalized = convert_rakuten_product(&product, None);

    assert_eq!(
        serde_json::to_value(&normalized).unwrap(),
        json!({
            "id": "headphones-001",
            "title": "Premium Wireless Headphones",
            "description": "Experience crystal-clear sound.Features 40-hour battery life.",
            "images": [
                "https://thumbnail.image.rakuten.co.jp/@0_mall/audiotech/cabinet/headphones/front.jpg",
                "https://thumbnail.image.rakuten.co.jp/@0_mall/audiotech/cabinet/headphones/side.jpg"
            ],
            "price": { "amount": "29800", "currency": "JPY" },
            "metadata": {
                "source": "rakuten",
                "shopCode": "audiotech-rakuten",
                "shopName": "AudioTech Official Store",
                "genreId": "100051",
                "taxIncluded": true,
                "reviewCount": 128,
                "reviewAverage": 4.5,
                "itemUrl": "https://item.rakuten.co.jp/audiotech/headphones-001/",
                "shopUrl": "https://www.rakuten.co.jp/audiotech/"
            }
        })
    );
}

#[test]
fn imageless_fixture_is_valid_with_one_warning() {
    let candidate = fixture(include_str!("resources/rakuten_no_images.json"));
    let diagnostics = CollectingDiagnostics::new();

    let normalized = RakutenAdapter::new()
        .normalize(&candidate, None, &diagnostics)
        .unwrap();

    assert_eq!(diagnostics.entries().len(), 1);
    assert!(normalized.images.is_empty());
    assert!(!normalized.metadata.tax_included);
    assert_eq!(normalized.description, None);

    // Absent passthrough fields are dropped, not defaulted
    let value = serde_json::to_value(&normalized).unwrap();
    assert_eq!(value["metadata"], json!({ "source": "rakuten", "taxIncluded": false }));
    assert!(value.get("description").is_none());
}

#[test]
fn price_context_overrides_currency_only() {
    let candidate = fixture(include_str!("resources/rakuten_headphones.json"));
    let product = parse_rakuten_product(&candidate).unwrap();
    let ctx = RakutenPriceContext {
        currency: Some("USD".to_string()),
        include_tax: Some(false),
    };

    let normalized = convert_rakuten_product(&product, Some(&ctx));
    assert_eq!(normalized.price.currency, "USD");
    assert_eq!(normalized.price.amount, "29800");
    assert!(normalized.metadata.tax_included);
}

#[test]
fn normalized_outputs_match_schema() {
    let compiled = compiled_schema();
    let adapter = RakutenAdapter::new();
    let diagnostics = CollectingDiagnostics::new();

    for raw in [
        include_str!("resources/rakuten_headphones.json"),
        include_str!("resources/rakuten_no_images.json"),
    ] {
        let normalized = adapter.normalize(&fixture(raw), None, &diagnostics).unwrap();
        let value = serde_json::to_value(&normalized).unwrap();
        assert!(compiled.is_valid(&value), "schema rejected {}", value);
    }
}

#[test]
fn negative_zero_price_matches_schema() {
    let compiled = compiled_schema();
    let candidate = json!({ "itemCode": "z-1", "itemName": "Free sample", "itemPrice": -0.0 });
    let normalized = RakutenAdapter::new()
        .normalize(&candidate, None, &CollectingDiagnostics::new())
        .unwrap();

    assert_eq!(normalized.price.amount, "0");
    assert!(compiled.is_valid(&serde_json::to_value(&normalized).unwrap()));
}

#[test]
fn float_flags_and_counts_from_the_wire() {
    let candidate = json!({
        "itemCode": "a",
        "itemName": "A",
        "itemPrice": 100,
        "taxFlag": 1.0,
        "reviewCount": 128.0,
        "mediumImageUrls": ["x"]
    });
    let normalized = RakutenAdapter::new()
        .normalize(&candidate, None, &CollectingDiagnostics::new())
        .unwrap();

    assert!(normalized.metadata.tax_included);
    let value = serde_json::to_value(&normalized).unwrap();
    assert_eq!(value["metadata"]["reviewCount"], json!(128.0));
    assert!(compiled_schema().is_valid(&value));
}

#[test]
fn schema_rejects_numeric_amount() {
    let compiled = compiled_schema();
    let candidate = fixture(include_str!("resources/rakuten_headphones.json"));
    let normalized = convert_rakuten_product(&parse_rakuten_product(&candidate).unwrap(), None);

    let mut value = serde_json::to_value(&normalized).unwrap();
    value["price"]["amount"] = json!(29800);
    assert!(!compiled.is_valid(&value));
}

#[test]
fn validation_gate_matches_marketplace_rules() {
    let diagnostics = CollectingDiagnostics::new();
    let cases = [
        (Value::Null, false),
        (json!("string"), false),
        (json!({ "itemName": "Test", "itemPrice": 1000 }), false),
        (json!({ "itemCode": "   ", "itemName": "Test", "itemPrice": 1000 }), false),
        (json!({ "itemCode": "test-001", "itemPrice": 1000 }), false),
        (json!({ "itemCode": "test-001", "itemName": "   ", "itemPrice": 1000 }), false),
        (json!({ "itemCode": "test-001", "itemName": "Test" }), false),
        (json!({ "itemCode": "test-001", "itemName": "Test", "itemPrice": -100 }), false),
        (json!({ "itemCode": "t", "itemName": "t", "itemPrice": -1 }), false),
        (
            json!({
                "itemCode": "test-001",
                "itemName": "Test",
                "itemPrice": 1000,
                "smallImageUrls": ["https://example.com/img.jpg"]
            }),
            true,
        ),
        (json!({ "itemCode": "test-001", "itemName": "Test", "itemPrice": 1000 }), true),
    ];

    for (candidate, expected) in cases {
        assert_eq!(
            validate_rakuten_product(&candidate, &diagnostics),
            expected,
            "candidate {}",
            candidate
        );
    }
    // Only the last case is valid and imageless
    assert_eq!(diagnostics.entries().len(), 1);
}
