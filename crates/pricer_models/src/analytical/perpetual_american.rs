//! Closed-form pricing for perpetual American options.
//!
//! An American option with no expiry has a time-independent free boundary,
//! so its price solves an ODE in the spot alone:
//!
//! - y₁ = 1/2 - b/σ² + √((b/σ² - 1/2)² + 2r/σ²)
//! - y₂ = 1/2 - b/σ² - √((b/σ² - 1/2)² + 2r/σ²)
//! - Call (y₁ > 1): C = K/(y₁-1) · ((y₁-1)/y₁ · S/K)^y₁
//! - Put (y₂ < 0): P = K/(1-y₂) · ((y₂-1)/y₂ · S/K)^y₂
//!
//! Outside those branches the closed form has no exercise region and the
//! price is exactly zero. The expiry field is never read.
//!
//! A negative radicand (possible with r < 0) leaves both exponents NaN; the
//! raw price then falls through to zero while `try_price` reports it.

use pricer_core::traits::Priceable;
use pricer_core::types::OptionType;

use super::error::{check_finite, check_spot, AnalyticalError};
use crate::instruments::{ContractParams, ExerciseStyle};

/// Perpetual American option.
///
/// Shares its parameter record with [`EuropeanOption`](super::EuropeanOption)
/// but applies the infinite-maturity closed form.
///
/// # Examples
/// ```
/// use pricer_models::analytical::PerpetualAmericanOption;
/// use pricer_models::instruments::ContractParams;
///
/// let params = ContractParams::default()
///     .with_volatility(0.1)
///     .with_rate(0.1)
///     .with_carry(0.02);
/// let call = PerpetualAmericanOption::call(params);
/// assert!((call.price(110.0) - 18.5035).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerpetualAmericanOption {
    /// Market and contract parameters (`expiry` is ignored)
    pub params: ContractParams,
    /// Call or put
    pub option_type: OptionType,
}

impl PerpetualAmericanOption {
    /// Creates a perpetual American option.
    #[inline]
    pub fn new(params: ContractParams, option_type: OptionType) -> Self {
        Self {
            params,
            option_type,
        }
    }

    /// Creates a perpetual American call.
    #[inline]
    pub fn call(params: ContractParams) -> Self {
        Self::new(params, OptionType::Call)
    }

    /// Creates a perpetual American put.
    #[inline]
    pub fn put(params: ContractParams) -> Self {
        Self::new(params, OptionType::Put)
    }

    /// Switches between call and put.
    #[inline]
    pub fn toggle(&mut self) {
        self.option_type = self.option_type.toggle();
    }

    /// Radicand (b/σ² - 1/2)² + 2r/σ² of both exponents.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        let p = &self.params;
        let sig2 = p.volatility * p.volatility;
        let bs = p.carry / sig2;
        (bs - 0.5) * (bs - 0.5) + 2.0 * p.rate / sig2
    }

    /// Returns (b/σ², √discriminant).
    #[inline]
    fn exponent_terms(&self) -> (f64, f64) {
        let p = &self.params;
        let bs = p.carry / (p.volatility * p.volatility);
        (bs, self.discriminant().sqrt())
    }

    /// Call exponent y₁.
    #[inline]
    pub fn call_exponent(&self) -> f64 {
        let (bs, disc) = self.exponent_terms();
        0.5 - bs + disc
    }

    /// Put exponent y₂.
    #[inline]
    pub fn put_exponent(&self) -> f64 {
        let (bs, disc) = self.exponent_terms();
        0.5 - bs - disc
    }

    /// Call price at `spot`; exactly `0.0` when y₁ <= 1.
    pub fn call_price(&self, spot: f64) -> f64 {
        let y1 = self.call_exponent();
        if y1 > 1.0 {
            let k = self.params.strike;
            k / (y1 - 1.0) * ((y1 - 1.0) / y1 * spot / k).powf(y1)
        } else {
            0.0
        }
    }

    /// Put price at `spot`; exactly `0.0` when y₂ >= 0.
    pub fn put_price(&self, spot: f64) -> f64 {
        let y2 = self.put_exponent();
        if y2 < 0.0 {
            let k = self.params.strike;
            k / (1.0 - y2) * ((y2 - 1.0) / y2 * spot / k).powf(y2)
        } else {
            0.0
        }
    }

    /// Price at `spot` for the configured `option_type`.
    ///
    /// Unchecked: `σ <= 0` or `K <= 0` yield NaN/Inf.
    #[inline]
    pub fn price(&self, spot: f64) -> f64 {
        match self.option_type {
            OptionType::Call => self.call_price(spot),
            OptionType::Put => self.put_price(spot),
        }
    }

    /// Checks the contract parameters; `expiry` is not inspected.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidParameter` for a parameter outside its domain
    /// - `AnalyticalError::NumericalInstability` when the discriminant is
    ///   negative and neither exponent is real
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        self.params.validate(ExerciseStyle::PerpetualAmerican)?;
        let disc = self.discriminant();
        if disc >= 0.0 {
            Ok(())
        } else {
            Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "perpetual American exponents are complex: discriminant = {}",
                    disc
                ),
            })
        }
    }

    /// Validated price at `spot`.
    ///
    /// # Errors
    /// Same as [`EuropeanOption::try_price`](super::EuropeanOption::try_price),
    /// except that `expiry` may take any value, plus the
    /// `NumericalInstability` raised by [`validate`](Self::validate).
    pub fn try_price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        self.validate()?;
        check_spot(spot)?;
        check_finite(self.price(spot), "perpetual American price")
    }
}

impl Priceable for PerpetualAmericanOption {
    #[inline]
    fn price(&self, spot: f64) -> f64 {
        PerpetualAmericanOption::price(self, spot)
    }
}
