//! Output quantities a sweep can produce.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;
use pricer_models::analytical::{greeks, AnalyticalError};
use pricer_models::instruments::OptionContract;

use super::error::SweepError;

/// Unary function of spot produced by [`OutputKind::evaluator`].
pub type SpotFn<'a> = Box<dyn Fn(f64) -> Result<f64, AnalyticalError> + Send + Sync + 'a>;

/// Quantity evaluated at each spot of a sweep.
///
/// | Kind | Source | Variants |
/// |------|--------|----------|
/// | `Price` | contract `price` | all |
/// | `Delta` .. `Rho` | exact Greeks | European only |
/// | `DeltaFd`, `GammaFd` | central differences of `price` | all |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OutputKind {
    /// Option price
    #[default]
    Price,
    /// Exact delta
    Delta,
    /// Exact gamma
    Gamma,
    /// Exact vega
    Vega,
    /// Exact theta
    Theta,
    /// Exact rho
    Rho,
    /// Finite-difference delta
    DeltaFd,
    /// Finite-difference gamma
    GammaFd,
}

impl OutputKind {
    /// Every output kind, in display order.
    pub const ALL: [OutputKind; 8] = [
        OutputKind::Price,
        OutputKind::Delta,
        OutputKind::Gamma,
        OutputKind::Vega,
        OutputKind::Theta,
        OutputKind::Rho,
        OutputKind::DeltaFd,
        OutputKind::GammaFd,
    ];

    /// Stable lowercase name, accepted back by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            OutputKind::Price => "price",
            OutputKind::Delta => "delta",
            OutputKind::Gamma => "gamma",
            OutputKind::Vega => "vega",
            OutputKind::Theta => "theta",
            OutputKind::Rho => "rho",
            OutputKind::DeltaFd => "delta-fd",
            OutputKind::GammaFd => "gamma-fd",
        }
    }

    /// Returns whether the finite-difference step is consulted.
    #[inline]
    pub fn is_finite_difference(&self) -> bool {
        matches!(self, OutputKind::DeltaFd | OutputKind::GammaFd)
    }

    /// Returns whether this kind needs the exact European Greeks.
    #[inline]
    pub fn is_exact_greek(&self) -> bool {
        !matches!(
            self,
            OutputKind::Price | OutputKind::DeltaFd | OutputKind::GammaFd
        )
    }

    /// Maps this kind to a function of spot bound to `contract`.
    ///
    /// The contract is only read. `h` is ignored unless
    /// [`is_finite_difference`](Self::is_finite_difference). Prices go
    /// through `try_price` and the FD kinds report a stencil that reaches
    /// `S - h <= 0`; the exact Greeks are evaluated unchecked.
    ///
    /// # Errors
    /// - `AnalyticalError::UnsupportedExerciseStyle` for an exact Greek on
    ///   a perpetual American contract
    /// - `AnalyticalError::InvalidStep` for an FD kind with `h <= 0`
    pub fn evaluator<'a>(
        &self,
        contract: &'a OptionContract,
        h: f64,
    ) -> Result<SpotFn<'a>, SweepError> {
        if self.is_finite_difference() && !(h.is_finite() && h > 0.0) {
            return Err(AnalyticalError::InvalidStep { step: h }.into());
        }

        let f: SpotFn<'a> = match self {
            OutputKind::Price => Box::new(move |s: f64| contract.try_price(s)),
            OutputKind::Delta => {
                let option = contract.as_european()?;
                Box::new(move |s: f64| Ok(greeks::delta(option, s)))
            }
            OutputKind::Gamma => {
                let option = contract.as_european()?;
                Box::new(move |s: f64| Ok(greeks::gamma(option, s)))
            }
            OutputKind::Vega => {
                let option = contract.as_european()?;
                Box::new(move |s: f64| Ok(greeks::vega(option, s)))
            }
            OutputKind::Theta => {
                let option = contract.as_european()?;
                Box::new(move |s: f64| Ok(greeks::theta(option, s)))
            }
            OutputKind::Rho => {
                let option = contract.as_european()?;
                Box::new(move |s: f64| Ok(greeks::rho(option, s)))
            }
            OutputKind::DeltaFd => Box::new(move |s: f64| greeks::delta_fd(contract, s, h)),
            OutputKind::GammaFd => Box::new(move |s: f64| greeks::gamma_fd(contract, s, h)),
        };
        Ok(f)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('_', "-");
        match normalised.as_str() {
            "price" | "p" => Ok(OutputKind::Price),
            "delta" => Ok(OutputKind::Delta),
            "gamma" => Ok(OutputKind::Gamma),
            "vega" => Ok(OutputKind::Vega),
            "theta" => Ok(OutputKind::Theta),
            "rho" => Ok(OutputKind::Rho),
            "delta-fd" | "deltafd" => Ok(OutputKind::DeltaFd),
            "gamma-fd" | "gammafd" => Ok(OutputKind::GammaFd),
            _ => Err(PricingError::InvalidInput(format!(
                "Unknown output kind '{}': expected one of price, delta, gamma, vega, theta, rho, delta-fd, gamma-fd",
                s
            ))),
        }
    }
}
