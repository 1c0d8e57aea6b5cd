// Copyright (c) 2025 - Cowboy AI, Inc.
//! VARP Plan
//!
//! Validates one resource declaration and prints the change needed to
//! converge a provider snapshot onto it. Nothing is applied.
//!
//! Run with: cargo run --bin varp-plan -- <declaration.json> [observed.json]
//!
//! Environment:
//! - `VARP_DECLARATION`: declaration file, if not given as first argument
//! - `VARP_OBSERVED`: provider snapshot file, if not given as second argument
//! - `VARP_RESOURCE_TYPE`: resource type name, if `--resource-type` is not given
//! - `RUST_LOG`: log filter

use anyhow::{Context, Result};
use cim_infrastructure_varp::{Declaration, ResourceTypeRegistry, VarpResourceType};
use clap::Parser;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Plan the change that converges a device onto a VARP declaration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct PlanConfig {
    /// JSON file holding the declaration
    #[arg(env = "VARP_DECLARATION")]
    declaration: PathBuf,

    /// JSON file holding the provider snapshot; unset device if missing
    #[arg(env = "VARP_OBSERVED")]
    observed: Option<PathBuf>,

    /// Registered resource type to build with
    #[arg(long, env = "VARP_RESOURCE_TYPE", default_value = VarpResourceType::TYPE_NAME)]
    resource_type: String,
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PlanConfig::parse();
    debug!(?config, "Configuration loaded");

    let registry = ResourceTypeRegistry::with_builtin_types();

    let declaration: Declaration = serde_json::from_value(read_json(&config.declaration)?)
        .context("Declaration must be a JSON object")?;
    let entry = registry
        .build(&config.resource_type, &declaration)
        .with_context(|| format!("Invalid {} declaration", config.resource_type))?;
    info!("Validated {}", entry.key());

    let observed = match &config.observed {
        Some(path) => read_json(path)?,
        None => json!({}),
    };
    let change = registry
        .diff(&entry, &observed)
        .with_context(|| format!("Failed to diff {}", entry.key()))?;

    let plan = json!({
        "resource": entry.key().to_string(),
        "desired": entry.to_json(),
        "change": change,
    });
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
