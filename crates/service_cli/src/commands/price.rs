//! Price command implementation
//!
//! Prices one contract at one spot and reports every applicable output:
//! the price, the exact Greeks (European only) and the finite-difference
//! delta and gamma.

use pricer_risk::sweep::{OutputKind, SweepEngine};
use tracing::info;

use super::ContractArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::report::Report;
use crate::Result;

/// Evaluates every applicable output kind for `args` at `spot`.
pub fn evaluate(engine: &SweepEngine, args: &ContractArgs, spot: f64) -> Result<Report> {
    let contract = args.contract();
    let style = contract.style();

    let mut report = Report::new(
        format!(
            "{} {} K={} T={} sig={} r={} b={} at S={}",
            style,
            contract.option_type(),
            contract.params().strike,
            contract.params().expiry,
            contract.params().volatility,
            contract.params().rate,
            contract.params().carry,
            spot
        ),
        "output",
        vec!["value".to_string()],
    );

    for kind in OutputKind::ALL {
        if kind.is_exact_greek() && !style.is_european() {
            continue;
        }
        let value = engine.vector(&contract, &[spot], kind)?;
        report.push(kind.name(), value);
    }
    Ok(report)
}

/// Run the price command
pub fn run(config: &CliConfig, format: OutputFormat, args: &ContractArgs, spot: f64) -> Result<()> {
    info!("Pricing {} {} at S={}", args.style, args.option_type, spot);

    let engine = SweepEngine::new(config.sweep_config());
    let report = evaluate(&engine, args, spot)?;
    report.render(format, config.precision, std::io::stdout().lock())?;

    info!("Pricing complete");
    Ok(())
}
