//! Market and contract parameters shared by every option variant.
//!
//! This module provides the mutable parameter record that both the
//! European and the perpetual American closed forms read at call time.

use super::exercise::ExerciseStyle;
use crate::analytical::error::AnalyticalError;

/// Default risk-free rate.
pub const DEFAULT_RATE: f64 = 0.05;
/// Default volatility.
pub const DEFAULT_VOLATILITY: f64 = 0.2;
/// Default strike.
pub const DEFAULT_STRIKE: f64 = 100.0;
/// Default time to maturity in years.
pub const DEFAULT_EXPIRY: f64 = 1.0;

/// Contract and market parameters.
///
/// Fields are public: callers rebind them between pricing calls (batch
/// loops, parameter sweeps) and every formula recomputes from the current
/// values. Nothing derived is cached.
///
/// | Field | Symbol | Meaning |
/// |-------|--------|---------|
/// | `rate` | r | Risk-free rate, continuously compounded |
/// | `volatility` | σ | Annualised volatility of log-returns |
/// | `strike` | K | Strike price |
/// | `expiry` | T | Time to maturity in years (ignored by perpetual options) |
/// | `carry` | b | Cost of carry; `b == r` is plain Black-Scholes |
/// | `spot` | S | Convenience "current spot"; never read by the formulas |
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractParams;
///
/// let params = ContractParams::default()
///     .with_expiry(0.25)
///     .with_strike(65.0)
///     .with_volatility(0.30)
///     .with_rate_and_carry(0.08);
/// assert_eq!(params.carry, 0.08);
/// assert!(params.validate(Default::default()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractParams {
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Cost-of-carry rate (b)
    pub carry: f64,
    /// Current spot (S), stored for callers only
    pub spot: f64,
}

impl Default for ContractParams {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            volatility: DEFAULT_VOLATILITY,
            strike: DEFAULT_STRIKE,
            expiry: DEFAULT_EXPIRY,
            carry: DEFAULT_RATE,
            spot: DEFAULT_STRIKE,
        }
    }
}

impl ContractParams {
    /// Sets the risk-free rate, leaving the cost of carry untouched.
    #[inline]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets both `rate` and `carry` to the same value (no-dividend case).
    #[inline]
    pub fn with_rate_and_carry(mut self, rate: f64) -> Self {
        self.rate = rate;
        self.carry = rate;
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the strike.
    #[inline]
    pub fn with_strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    /// Sets the time to maturity.
    #[inline]
    pub fn with_expiry(mut self, expiry: f64) -> Self {
        self.expiry = expiry;
        self
    }

    /// Sets the cost of carry.
    #[inline]
    pub fn with_carry(mut self, carry: f64) -> Self {
        self.carry = carry;
        self
    }

    /// Sets the stored spot.
    #[inline]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Checks the parameters against the domain of the closed form for `style`.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidParameter` naming the first offending field:
    /// - `rate`, `carry` not finite
    /// - `volatility <= 0` or not finite
    /// - `strike <= 0` or not finite
    /// - `expiry <= 0` or not finite, only when `style.requires_expiry()`
    ///
    /// The stored `spot` is not checked; pricing always takes spot explicitly.
    pub fn validate(&self, style: ExerciseStyle) -> Result<(), AnalyticalError> {
        let finite = |name: &'static str, value: f64| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(AnalyticalError::InvalidParameter { name, value })
            }
        };
        let positive = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(AnalyticalError::InvalidParameter { name, value })
            }
        };

        finite("rate", self.rate)?;
        finite("carry", self.carry)?;
        positive("volatility", self.volatility)?;
        positive("strike", self.strike)?;
        if style.requires_expiry() {
            positive("expiry", self.expiry)?;
        }
        Ok(())
    }
}
