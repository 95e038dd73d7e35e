//! Vector and matrix evaluation over spot sequences.
//!
//! This module provides:
//! - [`vector`]: one output per spot for a single contract
//! - [`matrix`]: one vector per parameter row
//! - [`SweepEngine`]: the same operations with a stored FD step and
//!   Rayon fan-out across rows
//!
//! Every entry point validates its inputs before evaluating anything and
//! fails fast; no partial surface is ever returned.

use pricer_models::instruments::OptionContract;
use tracing::{debug, info};

use super::error::SweepError;
use super::output::OutputKind;
use super::row::ParamRow;
use crate::parallel::ParallelConfig;

/// Default finite-difference step.
pub const DEFAULT_FD_STEP: f64 = 0.01;

/// Every spot must be finite and above `floor`.
fn check_spots(spots: &[f64], floor: f64) -> Result<(), SweepError> {
    match spots
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.is_finite() && **s > floor))
    {
        Some((index, &spot)) => Err(SweepError::InvalidSpot { index, spot }),
        None => Ok(()),
    }
}

/// Evaluates `kind` at every spot, in input order.
///
/// The contract is read, never modified.
///
/// # Errors
/// - `SweepError::Analytical` if the contract fails validation for its
///   style, an exact Greek is requested on a perpetual contract, or `h`
///   is invalid for an FD kind
/// - `SweepError::InvalidSpot` for the first non-positive or non-finite
///   spot, or for FD kinds the first spot with `S - h <= 0`
///
/// # Examples
/// ```
/// use pricer_core::math::mesh::uniform;
/// use pricer_models::instruments::OptionContract;
/// use pricer_risk::sweep::{vector, OutputKind};
///
/// let spots = uniform(10.0, 50.0, 1.0).unwrap();
/// let prices = vector(&OptionContract::default(), &spots, OutputKind::Price, 0.01).unwrap();
/// assert_eq!(prices.len(), 41);
/// ```
pub fn vector(
    contract: &OptionContract,
    spots: &[f64],
    kind: OutputKind,
    h: f64,
) -> Result<Vec<f64>, SweepError> {
    let f = kind.evaluator(contract, h)?;
    contract.validate()?;
    check_spots(spots, spot_floor(kind, h))?;
    let values = spots.iter().map(|&s| f(s)).collect::<Result<Vec<_>, _>>()?;
    Ok(values)
}

/// FD kinds need `S - h > 0`; a bad `h` is left to the evaluator to report.
fn spot_floor(kind: OutputKind, h: f64) -> f64 {
    if kind.is_finite_difference() && h.is_finite() && h > 0.0 {
        h
    } else {
        0.0
    }
}

/// Evaluates `kind` over `spots` once per parameter row.
///
/// Each row is applied to its own copy of `contract`, so the caller's
/// contract keeps its parameters. Rows are parsed before any pricing.
///
/// # Errors
/// - `SweepError::MalformedRow` for the first row without 4 or 5 values
/// - Anything [`vector`] reports, for the first failing row
pub fn matrix<R: AsRef<[f64]>>(
    contract: &OptionContract,
    rows: &[R],
    spots: &[f64],
    kind: OutputKind,
    h: f64,
) -> Result<Vec<Vec<f64>>, SweepError> {
    let rows = ParamRow::parse_all(rows)?;
    check_spots(spots, spot_floor(kind, h))?;
    rows.iter()
        .map(|row| vector(&with_row(contract, row), spots, kind, h))
        .collect()
}

fn with_row(contract: &OptionContract, row: &ParamRow) -> OptionContract {
    let mut local = *contract;
    row.apply(local.params_mut());
    local
}

/// Sweep configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Step for the finite-difference output kinds
    pub fd_step: f64,
    /// Row fan-out
    pub parallel: ParallelConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            fd_step: DEFAULT_FD_STEP,
            parallel: ParallelConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Sets the finite-difference step.
    pub fn with_fd_step(mut self, fd_step: f64) -> Self {
        self.fd_step = fd_step;
        self
    }

    /// Sets the parallel configuration.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Vector/matrix pricer with a stored configuration.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionContract;
/// use pricer_risk::sweep::{OutputKind, SweepEngine};
///
/// let engine = SweepEngine::default();
/// let rows = vec![vec![1.0, 100.0, 0.2, 0.05], vec![0.5, 100.0, 0.3, 0.05, 0.0]];
/// let surface = engine
///     .matrix(&OptionContract::default(), &rows, &[90.0, 100.0, 110.0], OutputKind::Delta)
///     .unwrap();
/// assert_eq!(surface.len(), 2);
/// assert!(surface.iter().all(|v| v.len() == 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SweepEngine {
    config: SweepConfig,
}

impl SweepEngine {
    /// Creates an engine from a configuration.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// [`vector`] with the configured FD step.
    pub fn vector(
        &self,
        contract: &OptionContract,
        spots: &[f64],
        kind: OutputKind,
    ) -> Result<Vec<f64>, SweepError> {
        debug!(
            style = %contract.style(),
            option_type = %contract.option_type(),
            %kind,
            n_spots = spots.len(),
            "Evaluating vector"
        );
        vector(contract, spots, kind, self.config.fd_step)
    }

    /// [`matrix`] with the configured FD step, rows fanned out on Rayon
    /// once `rows.len()` reaches the parallel threshold.
    ///
    /// Output order matches row order either way.
    pub fn matrix<R: AsRef<[f64]>>(
        &self,
        contract: &OptionContract,
        rows: &[R],
        spots: &[f64],
        kind: OutputKind,
    ) -> Result<Vec<Vec<f64>>, SweepError> {
        let rows = ParamRow::parse_all(rows)?;
        check_spots(spots, spot_floor(kind, self.config.fd_step))?;

        let parallel = self.config.parallel.should_parallelize(rows.len());
        info!(
            style = %contract.style(),
            %kind,
            n_rows = rows.len(),
            n_spots = spots.len(),
            parallel,
            "Evaluating matrix"
        );

        let h = self.config.fd_step;
        self.config.parallel.try_map(&rows, |row| {
            debug!(%row, "Evaluating row");
            vector(&with_row(contract, row), spots, kind, h)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;
    use pricer_models::analytical::{AnalyticalError, EuropeanOption};
    use pricer_models::instruments::ContractParams;

    fn spots() -> Vec<f64> {
        (10..=50).map(|s| s as f64).collect()
    }

    // ==========================================================
    // Vector tests
    // ==========================================================

    #[test]
    fn test_vector_preserves_length_and_order() {
        let contract = OptionContract::default();
        let spots = vec![120.0, 80.0, 100.0];
        let prices = vector(&contract, &spots, OutputKind::Price, DEFAULT_FD_STEP).unwrap();

        assert_eq!(prices.len(), 3);
        for (s, p) in spots.iter().zip(&prices) {
            assert_eq!(*p, contract.price(*s));
        }
    }

    #[test]
    fn test_vector_empty_spots() {
        let prices = vector(&OptionContract::default(), &[], OutputKind::Gamma, 0.01).unwrap();
        assert!(prices.is_empty());
    }

    #[test]
    fn test_vector_reads_current_option_type() {
        let mut contract = OptionContract::default();
        let calls = vector(&contract, &spots(), OutputKind::Delta, 0.01).unwrap();
        contract.toggle();
        let puts = vector(&contract, &spots(), OutputKind::Delta, 0.01).unwrap();

        assert!(calls.iter().all(|d| *d >= 0.0));
        assert!(puts.iter().all(|d| *d <= 0.0));
    }

    #[test]
    fn test_vector_rejects_bad_spot() {
        let result = vector(
            &OptionContract::default(),
            &[100.0, 0.0, 90.0],
            OutputKind::Price,
            0.01,
        );
        assert_eq!(
            result,
            Err(SweepError::InvalidSpot {
                index: 1,
                spot: 0.0
            })
        );
    }

    #[test]
    fn test_vector_validates_contract() {
        let contract =
            OptionContract::european(ContractParams::default().with_expiry(0.0), OptionType::Call);
        assert!(matches!(
            vector(&contract, &[100.0], OutputKind::Price, 0.01),
            Err(SweepError::Analytical(AnalyticalError::InvalidParameter {
                name: "expiry",
                ..
            }))
        ));
    }

    #[test]
    fn test_vector_perpetual_ignores_expiry() {
        let contract = OptionContract::perpetual_american(
            ContractParams::default().with_expiry(0.0),
            OptionType::Put,
        );
        let deltas = vector(&contract, &[90.0, 110.0], OutputKind::DeltaFd, 0.01).unwrap();
        assert!(deltas.iter().all(|d| *d < 0.0));
    }

    #[test]
    fn test_vector_fd_tracks_exact() {
        let contract = OptionContract::default();
        let exact = vector(&contract, &spots(), OutputKind::Gamma, 0.01).unwrap();
        let fd = vector(&contract, &spots(), OutputKind::GammaFd, 0.01).unwrap();
        for (e, f) in exact.iter().zip(&fd) {
            assert_relative_eq!(*e, *f, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_vector_fd_rejects_spot_within_step() {
        let contract = OptionContract::default();
        for kind in [OutputKind::DeltaFd, OutputKind::GammaFd] {
            assert_eq!(
                vector(&contract, &[1.0, 0.005], kind, 0.01),
                Err(SweepError::InvalidSpot {
                    index: 1,
                    spot: 0.005
                })
            );
            // S == h puts the lower stencil point on zero
            assert!(matches!(
                vector(&contract, &[0.5], kind, 0.5),
                Err(SweepError::InvalidSpot { index: 0, .. })
            ));
        }

        // Non-FD kinds only need S > 0
        assert!(vector(&contract, &[0.005], OutputKind::Price, 0.01).is_ok());
    }

    #[test]
    fn test_vector_fd_bad_step_reported_before_spots() {
        let result = vector(&OptionContract::default(), &[0.005], OutputKind::DeltaFd, f64::NAN);
        assert!(matches!(
            result,
            Err(SweepError::Analytical(AnalyticalError::InvalidStep { .. }))
        ));
    }

    #[test]
    fn test_vector_rejects_complex_perpetual_exponents() {
        let contract = OptionContract::perpetual_american(
            ContractParams::default()
                .with_rate(-0.05)
                .with_carry(0.02)
                .with_volatility(0.2),
            OptionType::Call,
        );
        for kind in [OutputKind::Price, OutputKind::DeltaFd] {
            assert!(matches!(
                vector(&contract, &[100.0], kind, 0.01),
                Err(SweepError::Analytical(
                    AnalyticalError::NumericalInstability { .. }
                ))
            ));
        }
    }

    // ==========================================================
    // Matrix tests
    // ==========================================================

    #[test]
    fn test_matrix_shape_and_row_mapping() {
        let contract = OptionContract::default();
        let rows = vec![
            vec![0.25, 65.0, 0.30, 0.08],
            vec![1.0, 100.0, 0.20, 0.05, 0.05],
            vec![30.0, 100.0, 0.30, 0.08],
        ];
        let spots = [60.0, 100.0];
        let surface = matrix(&contract, &rows, &spots, OutputKind::Price, 0.01).unwrap();

        assert_eq!(surface.len(), 3);
        assert!(surface.iter().all(|v| v.len() == 2));
        assert_relative_eq!(surface[0][0], 2.13337, epsilon = 1e-5);
        assert_relative_eq!(surface[1][1], 10.450583572185565, epsilon = 1e-9);
        assert_relative_eq!(surface[2][1], 92.17570, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix_leaves_contract_untouched() {
        let contract = OptionContract::default();
        let before = contract;
        let rows = vec![vec![2.0, 80.0, 0.5, 0.1, 0.0]];
        matrix(&contract, &rows, &[100.0], OutputKind::Vega, 0.01).unwrap();
        assert_eq!(contract, before);
    }

    #[test]
    fn test_matrix_rows_match_rebound_vectors() {
        let contract = OptionContract::default();
        let rows = vec![vec![0.5, 95.0, 0.25, 0.03, 0.01]];
        let surface = matrix(&contract, &rows, &spots(), OutputKind::Theta, 0.01).unwrap();

        let params = ContractParams::default()
            .with_expiry(0.5)
            .with_strike(95.0)
            .with_volatility(0.25)
            .with_rate(0.03)
            .with_carry(0.01);
        let expected = vector(
            &OptionContract::from(EuropeanOption::call(params)),
            &spots(),
            OutputKind::Theta,
            0.01,
        )
        .unwrap();
        assert_eq!(surface[0], expected);
    }

    #[test]
    fn test_matrix_malformed_row_fails_before_pricing() {
        // Row 0 is invalid for pricing (vol = 0) but row 1 is malformed;
        // parsing runs first so the malformed row is reported.
        let rows = vec![vec![1.0, 100.0, 0.0, 0.05], vec![1.0, 100.0, 0.2]];
        assert_eq!(
            matrix(&OptionContract::default(), &rows, &[100.0], OutputKind::Price, 0.01),
            Err(SweepError::MalformedRow { row: 1, len: 3 })
        );
    }

    #[test]
    fn test_matrix_empty_rows() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let surface = matrix(&OptionContract::default(), &rows, &[100.0], OutputKind::Price, 0.01);
        assert_eq!(surface, Ok(Vec::new()));
    }

    #[test]
    fn test_matrix_fd_rejects_spot_within_step() {
        let rows = vec![vec![1.0, 100.0, 0.2, 0.05]];
        assert_eq!(
            matrix(&OptionContract::default(), &rows, &[0.01], OutputKind::GammaFd, 0.01),
            Err(SweepError::InvalidSpot {
                index: 0,
                spot: 0.01
            })
        );
    }

    // ==========================================================
    // Engine tests
    // ==========================================================

    #[test]
    fn test_engine_uses_configured_step() {
        let engine = SweepEngine::new(SweepConfig::default().with_fd_step(0.5));
        let contract = OptionContract::default();
        let via_engine = engine
            .vector(&contract, &[100.0], OutputKind::DeltaFd)
            .unwrap();
        let direct = vector(&contract, &[100.0], OutputKind::DeltaFd, 0.5).unwrap();
        assert_eq!(via_engine, direct);
    }

    #[test]
    fn test_engine_fd_spot_checked_against_configured_step() {
        let engine = SweepEngine::new(SweepConfig::default().with_fd_step(0.5));
        let contract = OptionContract::default();
        let rows = vec![vec![1.0, 100.0, 0.2, 0.05]];

        assert!(matches!(
            engine.vector(&contract, &[0.4], OutputKind::DeltaFd),
            Err(SweepError::InvalidSpot { index: 0, .. })
        ));
        assert!(matches!(
            engine.matrix(&contract, &rows, &[10.0, 0.4], OutputKind::GammaFd),
            Err(SweepError::InvalidSpot { index: 1, .. })
        ));
        assert!(engine.vector(&contract, &[0.4], OutputKind::Price).is_ok());
    }

    #[test]
    fn test_engine_parallel_matches_serial() {
        let rows: Vec<Vec<f64>> = (1..=150)
            .map(|i| vec![0.1 * i as f64, 100.0, 0.2 + 0.001 * i as f64, 0.05])
            .collect();
        let contract = OptionContract::default();

        let serial = SweepEngine::new(
            SweepConfig::default().with_parallel(ParallelConfig::serial()),
        )
        .matrix(&contract, &rows, &spots(), OutputKind::Price)
        .unwrap();
        let parallel = SweepEngine::new(
            SweepConfig::default().with_parallel(ParallelConfig::new(4, 10)),
        )
        .matrix(&contract, &rows, &spots(), OutputKind::Price)
        .unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_engine_matrix_rejects_exact_greek_on_perpetual() {
        let engine = SweepEngine::default();
        let contract = OptionContract::perpetual_american(ContractParams::default(), OptionType::Call);
        let rows = vec![vec![1.0, 100.0, 0.2, 0.05]];
        assert!(matches!(
            engine.matrix(&contract, &rows, &[100.0], OutputKind::Rho),
            Err(SweepError::Analytical(
                AnalyticalError::UnsupportedExerciseStyle { .. }
            ))
        ));
    }
}
