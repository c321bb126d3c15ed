//! CLI module for backend-lb
//!
//! Registers a list of addresses into a registry and prints a sequence of
//! selections.

use crate::balancer::StrategyKind;
use crate::config::RegistryConfig;
use crate::registry::EndpointRegistry;
use crate::types::endpoint::Endpoint;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::{info, warn};

/// backend-lb - In-memory endpoint registry with pluggable selection
#[derive(Parser, Debug)]
#[command(name = "backend-lb")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    BACKEND_LB_MAX_INSTANCES  Registry capacity (default: 10)
    BACKEND_LB_STRATEGY       Selection strategy: random | round-robin (default: random)
    BACKEND_LB_LOG_LEVEL      Log level when RUST_LOG is unset (default: info)
"#)]
pub struct Cli {
    /// Selection strategy (overrides BACKEND_LB_STRATEGY)
    #[arg(short, long)]
    pub strategy: Option<StrategyKind>,

    /// Maximum number of endpoints (overrides BACKEND_LB_MAX_INSTANCES)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Number of selections to perform (default: number of addresses)
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Print selections as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Endpoint addresses to register, in order
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

impl Cli {
    /// Resolve the registry configuration: flags first, then environment.
    pub fn registry_config(&self) -> RegistryConfig {
        let mut config = RegistryConfig::from_env();
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(capacity) = self.capacity {
            config.max_instances = capacity;
        }
        config
    }
}

/// Execute the CLI, writing selections to `out`
///
/// Registration failures are logged and skipped; a selection failure aborts.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Vec<Endpoint>> {
    let config = cli.registry_config();
    let registry =
        EndpointRegistry::from_config(&config).context("failed to build endpoint registry")?;

    for address in &cli.addresses {
        if let Err(err) = Endpoint::new(address.as_str()).and_then(|e| registry.register(e)) {
            warn!(
                address = %address,
                code = err.error_type(),
                "Failed to register endpoint: {}",
                err
            );
        }
    }
    info!(
        registered = registry.len(),
        capacity = registry.capacity(),
        strategy = %registry.strategy_kind(),
        "Registry ready"
    );

    let count = cli.count.unwrap_or(cli.addresses.len());
    let selected = (0..count)
        .map(|_| registry.select())
        .collect::<Result<Vec<_>, _>>()
        .context("failed to select endpoint")?;

    if cli.json {
        serde_json::to_writer(&mut *out, &selected)?;
        writeln!(out)?;
    } else {
        for endpoint in &selected {
            writeln!(out, "{endpoint}")?;
        }
    }

    Ok(selected)
}
