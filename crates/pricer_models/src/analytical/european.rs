//! Generalised Black-Scholes pricing for European options.
//!
//! This module provides the European variant of the option contract,
//! priced with the cost-of-carry form of Black-Scholes.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Setting b = r gives the plain Black-Scholes model, b = r - q a
//! continuous dividend yield q, and b = r - r_f the Garman-Kohlhagen FX model.

use pricer_core::traits::Priceable;
use pricer_core::types::OptionType;

use super::distributions::norm_cdf;
use super::error::{check_finite, check_spot, AnalyticalError};
use crate::instruments::{ContractParams, ExerciseStyle};

/// European option under generalised Black-Scholes dynamics.
///
/// Both fields are public and may be rebound between calls; every method
/// recomputes from the current values.
///
/// # Preconditions
/// `price` and the Greeks expect `S > 0`, `σ > 0`, `T > 0` and `K > 0`.
/// Outside that domain the result is whatever IEEE arithmetic yields
/// (NaN or ±Inf). Use [`EuropeanOption::try_price`] for a validated result.
///
/// # Examples
/// ```
/// use pricer_models::analytical::EuropeanOption;
/// use pricer_models::instruments::ContractParams;
///
/// let call = EuropeanOption::call(ContractParams::default());
/// let put = EuropeanOption::put(ContractParams::default());
///
/// // Put-call parity with b = r: C - P = S - K·e^(-rT)
/// let parity = call.price(100.0) - put.price(100.0) - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanOption {
    /// Market and contract parameters
    pub params: ContractParams,
    /// Call or put
    pub option_type: OptionType,
}

impl EuropeanOption {
    /// Creates a European option.
    #[inline]
    pub fn new(params: ContractParams, option_type: OptionType) -> Self {
        Self {
            params,
            option_type,
        }
    }

    /// Creates a European call.
    #[inline]
    pub fn call(params: ContractParams) -> Self {
        Self::new(params, OptionType::Call)
    }

    /// Creates a European put.
    #[inline]
    pub fn put(params: ContractParams) -> Self {
        Self::new(params, OptionType::Put)
    }

    /// Switches between call and put.
    #[inline]
    pub fn toggle(&mut self) {
        self.option_type = self.option_type.toggle();
    }

    /// Carry factor e^((b-r)T) applied to the spot leg.
    #[inline]
    pub fn carry_factor(&self) -> f64 {
        let p = &self.params;
        ((p.carry - p.rate) * p.expiry).exp()
    }

    /// Discount factor e^(-rT) applied to the strike leg.
    #[inline]
    pub fn discount(&self) -> f64 {
        (-self.params.rate * self.params.expiry).exp()
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, spot: f64) -> f64 {
        let p = &self.params;
        let vol_sqrt_t = p.volatility * p.expiry.sqrt();
        ((spot / p.strike).ln() + (p.carry + 0.5 * p.volatility * p.volatility) * p.expiry)
            / vol_sqrt_t
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, spot: f64) -> f64 {
        self.d1(spot) - self.params.volatility * self.params.expiry.sqrt()
    }

    /// Call price at `spot`, regardless of `option_type`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::EuropeanOption;
    /// use pricer_models::instruments::ContractParams;
    ///
    /// let option = EuropeanOption::put(ContractParams::default());
    /// assert!((option.call_price(100.0) - 10.450583572185565).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn call_price(&self, spot: f64) -> f64 {
        let d1 = self.d1(spot);
        let d2 = self.d2(spot);
        spot * self.carry_factor() * norm_cdf(d1) - self.params.strike * self.discount() * norm_cdf(d2)
    }

    /// Put price at `spot`, regardless of `option_type`.
    #[inline]
    pub fn put_price(&self, spot: f64) -> f64 {
        let d1 = self.d1(spot);
        let d2 = self.d2(spot);
        self.params.strike * self.discount() * norm_cdf(-d2)
            - spot * self.carry_factor() * norm_cdf(-d1)
    }

    /// Price at `spot` for the configured `option_type`.
    ///
    /// Unchecked: see the preconditions on [`EuropeanOption`].
    #[inline]
    pub fn price(&self, spot: f64) -> f64 {
        match self.option_type {
            OptionType::Call => self.call_price(spot),
            OptionType::Put => self.put_price(spot),
        }
    }

    /// Checks the contract parameters for the European closed form.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        self.params.validate(ExerciseStyle::European)
    }

    /// Validated price at `spot`.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidParameter` for an out-of-domain parameter
    /// - `AnalyticalError::InvalidSpot` if `spot <= 0` or not finite
    /// - `AnalyticalError::NumericalInstability` if the formula overflows
    pub fn try_price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        self.validate()?;
        check_spot(spot)?;
        check_finite(self.price(spot), "European price")
    }
}

impl Priceable for EuropeanOption {
    #[inline]
    fn price(&self, spot: f64) -> f64 {
        EuropeanOption::price(self, spot)
    }
}
