//! Demo command: a guided tour of the pricing library.
//!
//! Sections, in order:
//! 1. European benchmark batches against their reference prices
//! 2. Put-call parity on each batch
//! 3. Call prices over the spot mesh 10, 11, ..., 50
//! 4. Price surface over three volatility scenarios
//! 5. Exact Greeks of a futures option (b = 0)
//! 6. Call delta over the spot mesh
//! 7. Delta surface over the volatility scenarios
//! 8. Finite-difference delta and gamma against the exact values
//! 9. Perpetual American reference prices
//! 10. Perpetual American call and put over the spot mesh
//! 11. Perpetual American price surface

use std::io::Write;

use pricer_core::math::mesh::uniform;
use pricer_core::types::OptionType;
use pricer_models::analytical::{greeks, parity, EuropeanOption};
use pricer_models::instruments::{ContractParams, OptionContract};
use pricer_risk::sweep::{OutputKind, SweepEngine};
use tracing::{info, warn};

use crate::benchmarks::{EUROPEAN_BATCHES, PERPETUAL};
use crate::config::{CliConfig, OutputFormat};
use crate::report::Report;
use crate::Result;

/// FD steps compared in section 8
const FD_STEPS: [f64; 4] = [1.0, 0.5, 0.1, 0.01];

/// Volatility scenarios `{T, K, sigma, r}` for the European surfaces
const EUROPEAN_ROWS: [[f64; 4]; 3] = [
    [1.0, 100.0, 0.15, 0.05],
    [1.0, 100.0, 0.25, 0.05],
    [1.0, 100.0, 0.35, 0.05],
];

/// Volatility scenarios `{T, K, sigma, r, b}` for the perpetual surface
const PERPETUAL_ROWS: [[f64; 5]; 3] = [
    [0.0, 100.0, 0.10, 0.10, 0.02],
    [0.0, 100.0, 0.15, 0.10, 0.02],
    [0.0, 100.0, 0.20, 0.10, 0.02],
];

/// Futures option used for the Greeks sections
fn futures_option(option_type: OptionType) -> EuropeanOption {
    let params = ContractParams::default()
        .with_strike(102.0)
        .with_expiry(1.65)
        .with_rate(0.045)
        .with_carry(0.0)
        .with_volatility(0.43)
        .with_spot(122.0);
    EuropeanOption::new(params, option_type)
}

fn scenario_labels<const N: usize>(rows: &[[f64; N]]) -> Vec<String> {
    rows.iter().map(|r| format!("sig={}", r[2])).collect()
}

struct Printer<'a, W: Write> {
    format: OutputFormat,
    precision: usize,
    out: &'a mut W,
}

impl<W: Write> Printer<'_, W> {
    fn emit(&mut self, report: &Report) -> Result<()> {
        report.render(self.format, self.precision, &mut *self.out)
    }
}

/// Writes every demo section to `out`.
pub fn write_demo<W: Write>(
    engine: &SweepEngine,
    format: OutputFormat,
    precision: usize,
    out: &mut W,
) -> Result<()> {
    let mut printer = Printer {
        format,
        precision,
        out,
    };
    let spots = uniform(10.0, 50.0, 1.0)?;

    // 1. Benchmarks
    let columns = ["computed", "exact", "error"].map(String::from).to_vec();
    let mut report = Report::new("European benchmarks", "case", columns);
    for batch in &EUROPEAN_BATCHES {
        let (call, put) = batch.european();
        for (contract, exact) in [(call, batch.call), (put, batch.put)] {
            let computed = contract.try_price(batch.spot())?;
            report.push(
                format!("{} {}", batch.name, contract.option_type()),
                vec![computed, exact, (computed - exact).abs()],
            );
        }
    }
    printer.emit(&report)?;

    // 2. Parity
    let columns = ["put(parity)", "put", "call(parity)", "call", "residual"]
        .map(String::from)
        .to_vec();
    let mut report = Report::new("Put-call parity", "case", columns);
    for batch in &EUROPEAN_BATCHES {
        let (call, put) = batch.european();
        let p = &batch.params;
        let s = batch.spot();
        let (c, v) = (call.price(s), put.price(s));
        if !parity::check_parity(c, v, s, p.strike, p.rate, p.expiry) {
            warn!(batch = batch.name, "Parity does not hold");
        }
        report.push(
            batch.name,
            vec![
                parity::put_from_call(c, s, p.strike, p.rate, p.expiry),
                v,
                parity::call_from_put(v, s, p.strike, p.rate, p.expiry),
                c,
                parity::parity_error(c, v, s, p.strike, p.rate, p.carry, p.expiry),
            ],
        );
    }
    printer.emit(&report)?;

    // 3. Vector pricing
    let call = OptionContract::default();
    let prices = engine.vector(&call, &spots, OutputKind::Price)?;
    printer.emit(&Report::from_vector(
        "Call price, T=1 K=100 sig=0.2 r=b=0.05",
        "price",
        &spots,
        &prices,
    ))?;

    // 4. Price surface
    let surface = engine.matrix(&call, &EUROPEAN_ROWS, &spots, OutputKind::Price)?;
    printer.emit(&Report::from_surface(
        "Call price surface",
        scenario_labels(&EUROPEAN_ROWS),
        &spots,
        &surface,
    ))?;

    // 5. Exact Greeks
    let columns = ["delta", "gamma", "vega", "theta", "rho"]
        .map(String::from)
        .to_vec();
    let mut report = Report::new(
        "Greeks, K=102 S=122 T=1.65 r=0.045 b=0 sig=0.43",
        "type",
        columns,
    );
    for option_type in [OptionType::Call, OptionType::Put] {
        let option = futures_option(option_type);
        let g = greeks::greeks(&option, option.params.spot);
        report.push(
            option_type.code(),
            vec![g.delta, g.gamma, g.vega, g.theta, g.rho],
        );
    }
    printer.emit(&report)?;

    // 6. Delta vector
    let deltas = engine.vector(&call, &spots, OutputKind::Delta)?;
    printer.emit(&Report::from_vector("Call delta", "delta", &spots, &deltas))?;

    // 7. Delta surface
    let surface = engine.matrix(&call, &EUROPEAN_ROWS, &spots, OutputKind::Delta)?;
    printer.emit(&Report::from_surface(
        "Call delta surface",
        scenario_labels(&EUROPEAN_ROWS),
        &spots,
        &surface,
    ))?;

    // 8. FD convergence
    let option = futures_option(OptionType::Call);
    let spot = option.params.spot;
    let (delta, gamma) = (greeks::delta(&option, spot), greeks::gamma(&option, spot));
    let columns = ["delta_fd", "delta err", "gamma_fd", "gamma err"]
        .map(String::from)
        .to_vec();
    let mut report = Report::new(
        format!("Finite differences (delta={:.10}, gamma={:.10})", delta, gamma),
        "h",
        columns,
    );
    for h in FD_STEPS {
        let d = greeks::delta_fd(&option, spot, h)?;
        let g = greeks::gamma_fd(&option, spot, h)?;
        report.push(
            h.to_string(),
            vec![d, (d - delta).abs(), g, (g - gamma).abs()],
        );
    }
    printer.emit(&report)?;

    // 9. Perpetual reference
    let (perp_call, perp_put) = PERPETUAL.perpetual_american();
    let columns = ["computed", "exact", "error"].map(String::from).to_vec();
    let mut report = Report::new(
        "Perpetual American, K=100 sig=0.1 r=0.1 b=0.02 S=110",
        "type",
        columns,
    );
    for (contract, exact) in [(perp_call, PERPETUAL.call), (perp_put, PERPETUAL.put)] {
        let computed = contract.try_price(PERPETUAL.spot())?;
        report.push(
            contract.option_type().code(),
            vec![computed, exact, (computed - exact).abs()],
        );
    }
    printer.emit(&report)?;

    // 10. Perpetual vectors
    let surface = vec![
        engine.vector(&perp_call, &spots, OutputKind::Price)?,
        engine.vector(&perp_put, &spots, OutputKind::Price)?,
    ];
    printer.emit(&Report::from_surface(
        "Perpetual American prices",
        vec!["call".to_string(), "put".to_string()],
        &spots,
        &surface,
    ))?;

    // 11. Perpetual surface
    let surface = engine.matrix(&perp_call, &PERPETUAL_ROWS, &spots, OutputKind::Price)?;
    printer.emit(&Report::from_surface(
        "Perpetual American call surface",
        scenario_labels(&PERPETUAL_ROWS),
        &spots,
        &surface,
    ))?;

    Ok(())
}

/// Run the demo command
pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!("Running demo");
    let engine = SweepEngine::new(config.sweep_config());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_demo(&engine, format, config.precision, &mut out)?;
    info!("Demo complete");
    Ok(())
}
