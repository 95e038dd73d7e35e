//! Sweep command implementation
//!
//! Evaluates one output over a uniform spot mesh, either for the contract
//! given on the command line (vector) or once per row of a CSV parameter
//! table (matrix). Rows are `T, K, sigma, r[, b]` with no header; blank
//! lines and `#` comments are skipped, but an empty cell inside a row is an
//! error.

use std::io::Read;
use std::path::Path;

use pricer_core::math::mesh::uniform;
use pricer_risk::sweep::{OutputKind, ParamRow, SweepEngine};
use tracing::{debug, info};

use super::ContractArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::report::Report;
use crate::{CliError, Result};

/// Spot mesh flags
#[derive(clap::Args, Debug, Clone)]
pub struct MeshArgs {
    /// First spot of the mesh
    #[arg(long, default_value_t = 10.0)]
    pub start: f64,

    /// Last spot of the mesh (inclusive)
    #[arg(long, default_value_t = 50.0)]
    pub end: f64,

    /// Mesh spacing
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,
}

/// Reads positional parameter rows from CSV.
///
/// Cells are parsed as `f64`; row length is left to the sweep engine, which
/// reports rows without 4 or 5 values. Records with no content at all are
/// skipped and do not count towards the row index, so the index in every
/// error matches the engine's.
///
/// # Errors
/// `CliError::InvalidArgument` for an empty or non-numeric cell, naming its
/// row, line and column.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let row = rows.len();
        let line = record.position().map_or(0, |p| p.line());
        let values = record
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let at = || format!("Row {} (line {}), column {}", row, line, column);
                if cell.is_empty() {
                    return Err(CliError::InvalidArgument(format!("{}: empty cell", at())));
                }
                cell.parse::<f64>().map_err(|_| {
                    CliError::InvalidArgument(format!("{}: '{}' is not a number", at(), cell))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(values);
    }
    Ok(rows)
}

/// Reads parameter rows from a CSV file.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<f64>>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let rows = read_rows(std::fs::File::open(path)?)?;
    debug!(path = %path.display(), n_rows = rows.len(), "Loaded parameter rows");
    Ok(rows)
}

/// Builds the sweep report without printing it.
pub fn evaluate(
    engine: &SweepEngine,
    args: &ContractArgs,
    mesh: &MeshArgs,
    kind: OutputKind,
    rows: Option<&[Vec<f64>]>,
) -> Result<Report> {
    let contract = args.contract();
    let spots = uniform(mesh.start, mesh.end, mesh.step)?;

    let report = match rows {
        None => {
            let values = engine.vector(&contract, &spots, kind)?;
            Report::from_vector(
                format!("{} {} {}", contract.style(), contract.option_type(), kind),
                kind.name(),
                &spots,
                &values,
            )
        }
        Some(rows) => {
            let surface = engine.matrix(&contract, rows, &spots, kind)?;
            let scenarios = ParamRow::parse_all(rows)
                .map_err(CliError::from)?
                .iter()
                .map(ToString::to_string)
                .collect();
            Report::from_surface(
                format!("{} {} {} surface", contract.style(), contract.option_type(), kind),
                scenarios,
                &spots,
                &surface,
            )
        }
    };
    Ok(report)
}

/// Run the sweep command
pub fn run(
    config: &CliConfig,
    format: OutputFormat,
    args: &ContractArgs,
    mesh: &MeshArgs,
    kind: OutputKind,
    rows_path: Option<&Path>,
) -> Result<()> {
    info!(
        "Sweeping {} over S in [{}, {}] step {}",
        kind, mesh.start, mesh.end, mesh.step
    );

    let rows = rows_path.map(load_rows).transpose()?;
    let engine = SweepEngine::new(config.sweep_config());
    let report = evaluate(&engine, args, mesh, kind, rows.as_deref())?;
    report.render(format, config.precision, std::io::stdout().lock())?;

    info!("Sweep complete");
    Ok(())
}
