//! Check command implementation
//!
//! Prints the effective configuration and re-prices the reference
//! benchmarks, failing if any price or parity residual is off.

use pricer_models::analytical::parity;
use tracing::{info, warn};

use crate::benchmarks::{Benchmark, EUROPEAN_BATCHES, PERPETUAL, TOLERANCE};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Outcome of one reference comparison
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// What was compared
    pub label: String,
    /// Computed value
    pub computed: f64,
    /// Reference value
    pub expected: f64,
}

impl CheckOutcome {
    /// Absolute difference
    pub fn error(&self) -> f64 {
        (self.computed - self.expected).abs()
    }

    /// Within [`TOLERANCE`]
    pub fn passed(&self) -> bool {
        self.error() < TOLERANCE
    }
}

fn outcome(label: String, computed: f64, expected: f64) -> CheckOutcome {
    CheckOutcome {
        label,
        computed,
        expected,
    }
}

fn european_outcomes(batch: &Benchmark) -> Vec<CheckOutcome> {
    let (call, put) = batch.european();
    let spot = batch.spot();
    let p = &batch.params;
    let call_price = call.price(spot);
    let put_price = put.price(spot);

    vec![
        outcome(format!("{} call", batch.name), call_price, batch.call),
        outcome(format!("{} put", batch.name), put_price, batch.put),
        outcome(
            format!("{} parity", batch.name),
            parity::parity_error(
                call_price, put_price, spot, p.strike, p.rate, p.carry, p.expiry,
            ),
            0.0,
        ),
    ]
}

/// Re-prices every benchmark.
pub fn verify() -> Vec<CheckOutcome> {
    let mut outcomes: Vec<CheckOutcome> = EUROPEAN_BATCHES
        .iter()
        .flat_map(european_outcomes)
        .collect();

    let (call, put) = PERPETUAL.perpetual_american();
    outcomes.push(outcome(
        "Perpetual call".to_string(),
        call.price(PERPETUAL.spot()),
        PERPETUAL.call,
    ));
    outcomes.push(outcome(
        "Perpetual put".to_string(),
        put.price(PERPETUAL.spot()),
        PERPETUAL.put,
    ));
    outcomes
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    println!("Configuration:");
    println!("  fd_step:            {}", config.fd_step);
    println!("  format:             {}", config.format);
    println!("  log_level:          {}", config.log_level);
    println!("  precision:          {}", config.precision);
    println!("  batch_size:         {}", config.parallel.batch_size);
    println!("  parallel_threshold: {}", config.parallel.parallel_threshold);
    println!();

    println!("Benchmarks:");
    let outcomes = verify();
    let mut failures = Vec::new();
    for o in &outcomes {
        let status = if o.passed() { "ok" } else { "FAIL" };
        println!(
            "  {:<18} computed {:>14.8}  expected {:>14.8}  error {:.2e}  {}",
            o.label,
            o.computed,
            o.expected,
            o.error(),
            status
        );
        if !o.passed() {
            warn!(label = %o.label, error = o.error(), "Benchmark mismatch");
            failures.push(o.label.clone());
        }
    }

    if failures.is_empty() {
        info!("All {} checks passed", outcomes.len());
        Ok(())
    } else {
        Err(CliError::CheckFailed(failures.join(", ")))
    }
}
