// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment Producer
//!
//! Reads a provisioned manifest and writes the deployment plan (host groups
//! and deployments) as JSON for the deployment-execution stage.
//!
//! Run with: cargo run --bin deployment-producer
//!
//! Environment:
//! 1. DEPLOYMENT_MANIFEST - manifest path (required)
//! 2. DEPLOYMENT_OUTPUT - plan path (optional, defaults to stdout)
//! 3. DEPLOYMENT_OUTPUT_PRETTY - pretty-print JSON (optional, defaults to true)

use anyhow::{Context, Result};
use deployment_producer::{DeploymentBuilder, DeploymentPlan, Manifest, ProducerConfig};
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the plan
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting deployment producer");

    let config = ProducerConfig::from_env().context("Failed to load configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - Manifest: {}", config.manifest_path.display());
    match &config.output_path {
        Some(path) => info!("  - Output: {}", path.display()),
        None => info!("  - Output: stdout"),
    }

    let manifest = Manifest::load(&config.manifest_path).with_context(|| {
        format!(
            "Failed to load manifest {}",
            config.manifest_path.display()
        )
    })?;
    info!("📦 Loaded {} vm groups", manifest.vm_groups.len());

    let plan = DeploymentPlan::produce(&DeploymentBuilder::new(), &manifest)
        .context("Failed to produce deployment plan")?;
    info!(
        "✅ Plan {} with {} host groups",
        plan.plan_id,
        plan.host_groups.len()
    );

    let json = plan.to_json(config.pretty)?;
    match &config.output_path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write plan to {}", path.display()))?;
            info!("💾 Plan written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write plan to stdout")?;
        }
    }

    Ok(())
}
