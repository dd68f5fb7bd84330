use anyhow::{Context, Result};
use clap::Parser;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

use catalog_adapters::config::{Config, DEFAULT_CONFIG_PATH};
use catalog_adapters::logging::init_logging;
use catalog_adapters::{CollectingDiagnostics, MarketplaceAdapter, RakutenAdapter, RakutenPriceContext};

/// Validate a raw Rakuten item fixture and print its normalized form.
#[derive(Parser, Debug)]
#[command(name = "check-product", version, about = "Validate and normalize a marketplace product fixture")]
struct Cli {
    /// Path to the raw product JSON file
    path: PathBuf,

    /// Config file (defaults to config.toml; missing file means defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Currency override, takes precedence over [pricing] in the config
    #[arg(long)]
    currency: Option<String>,

    /// Check the output against this schema (defaults to schemas/normalized_product.v1.json)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Skip the output schema check
    #[arg(long)]
    no_schema: bool,
}

fn load_json(path: &PathBuf) -> Result<Value> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: Value = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    Ok(json)
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Cli::parse();

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    let _guard = init_logging(&config.logging);

    let mut price_context = config.price_context();
    if let Some(currency) = args.currency {
        let ctx = price_context.get_or_insert_with(RakutenPriceContext::default);
        ctx.currency = Some(currency);
    }

    let candidate = load_json(&args.path)?;
    let adapter = RakutenAdapter::new();
    let diagnostics = CollectingDiagnostics::new();

    if !adapter.validate(&candidate, &diagnostics) {
        eprintln!("invalid: {} requires a non-blank itemCode and itemName and a non-negative itemPrice", adapter.name());
        std::process::exit(1)
    }
    for finding in diagnostics.entries() {
        warn!(source = %finding.source, path = %args.path.display(), "{}", finding.message);
    }

    let product = adapter
        .parse(&candidate)
        .with_context(|| format!("Product in {} has mistyped optional fields", args.path.display()))?;
    let normalized = adapter.convert(&product, price_context.as_ref());
    let output = serde_json::to_value(&normalized).context("Failed to serialize normalized product")?;

    if !args.no_schema {
        let schema_path = args
            .schema
            .unwrap_or_else(|| PathBuf::from("schemas/normalized_product.v1.json"));
        let schema_json = load_json(&schema_path)?;

        // jsonschema 0.17 expects a schema with 'static lifetime; leak the parsed schema for CLI lifetime
        let schema_static: &'static Value = Box::leak(Box::new(schema_json));
        let compiled = JSONSchema::options()
            .compile(schema_static)
            .context("Failed to compile JSON Schema")?;

        let result = compiled.validate(&output);
        match result {
            Ok(_) => {}
            Err(errors) => {
                eprintln!("normalized output does not match schema:");
                for error in errors {
                    eprintln!("- {} at {}", error, error.instance_path);
                }
                std::process::exit(2)
            }
        }
    }

    info!(id = %normalized.id, source = adapter.source_id(), "product normalized");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
