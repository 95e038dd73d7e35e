//! Option sensitivities.
//!
//! This module provides:
//! - Exact Black-Scholes Greeks for [`EuropeanOption`] (delta, gamma, vega,
//!   theta, rho), including the cost-of-carry terms
//! - Central finite-difference delta and gamma for any [`Priceable`]
//!
//! The exact formulas assume finite-maturity Black-Scholes dynamics and are
//! only offered on the European variant. The finite-difference pair works
//! for every contract variant because it only calls `price`.
//!
//! ## Conventions
//! - Theta is the derivative with respect to calendar time (-∂V/∂T)
//! - Rho moves `b` together with `r`, as for a non-dividend asset

use pricer_core::traits::Priceable;
use pricer_core::types::OptionType;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::european::EuropeanOption;

/// Exact Greeks of a European option at one spot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// -∂V/∂T
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Delta.
///
/// - Call: e^((b-r)T)·N(d₁)
/// - Put: e^((b-r)T)·(N(d₁) - 1)
///
/// # Examples
/// ```
/// use pricer_models::analytical::{greeks, EuropeanOption};
///
/// let call = EuropeanOption::default();
/// let delta = greeks::delta(&call, 100.0);
/// assert!(delta > 0.5 && delta < 1.0);
/// ```
pub fn delta(option: &EuropeanOption, spot: f64) -> f64 {
    let n_d1 = norm_cdf(option.d1(spot));
    match option.option_type {
        OptionType::Call => option.carry_factor() * n_d1,
        OptionType::Put => option.carry_factor() * (n_d1 - 1.0),
    }
}

/// Gamma, identical for calls and puts.
///
/// e^((b-r)T)·φ(d₁) / (S·σ√T)
pub fn gamma(option: &EuropeanOption, spot: f64) -> f64 {
    let p = &option.params;
    let vol_sqrt_t = p.volatility * p.expiry.sqrt();
    option.carry_factor() * norm_pdf(option.d1(spot)) / (spot * vol_sqrt_t)
}

/// Vega, identical for calls and puts.
///
/// S·e^((b-r)T)·φ(d₁)·√T
pub fn vega(option: &EuropeanOption, spot: f64) -> f64 {
    spot * option.carry_factor() * norm_pdf(option.d1(spot)) * option.params.expiry.sqrt()
}

/// Theta.
///
/// - Call: -S·σ·e^((b-r)T)·φ(d₁)/(2√T) - (b-r)·S·e^((b-r)T)·N(d₁) - r·K·e^(-rT)·N(d₂)
/// - Put: -S·σ·e^((b-r)T)·φ(d₁)/(2√T) + (b-r)·S·e^((b-r)T)·N(-d₁) + r·K·e^(-rT)·N(-d₂)
pub fn theta(option: &EuropeanOption, spot: f64) -> f64 {
    let p = &option.params;
    let d1 = option.d1(spot);
    let d2 = option.d2(spot);
    let spot_leg = spot * option.carry_factor();
    let strike_leg = p.strike * option.discount();

    let decay = -(spot_leg * p.volatility * norm_pdf(d1)) / (2.0 * p.expiry.sqrt());
    let carry = p.carry - p.rate;

    match option.option_type {
        OptionType::Call => {
            decay - carry * spot_leg * norm_cdf(d1) - p.rate * strike_leg * norm_cdf(d2)
        }
        OptionType::Put => {
            decay + carry * spot_leg * norm_cdf(-d1) + p.rate * strike_leg * norm_cdf(-d2)
        }
    }
}

/// Rho.
///
/// - Call: K·T·e^(-rT)·N(d₂)
/// - Put: -K·T·e^(-rT)·N(-d₂)
pub fn rho(option: &EuropeanOption, spot: f64) -> f64 {
    let p = &option.params;
    let d2 = option.d2(spot);
    let scale = p.strike * p.expiry * option.discount();
    match option.option_type {
        OptionType::Call => scale * norm_cdf(d2),
        OptionType::Put => -scale * norm_cdf(-d2),
    }
}

/// All five exact Greeks at `spot`.
pub fn greeks(option: &EuropeanOption, spot: f64) -> Greeks {
    Greeks {
        delta: delta(option, spot),
        gamma: gamma(option, spot),
        vega: vega(option, spot),
        theta: theta(option, spot),
        rho: rho(option, spot),
    }
}

/// The lower stencil point `S - h` must itself be a valid spot.
fn check_stencil(spot: f64, h: f64) -> Result<(), AnalyticalError> {
    if !(h.is_finite() && h > 0.0) {
        return Err(AnalyticalError::InvalidStep { step: h });
    }
    if spot.is_finite() && spot - h > 0.0 {
        Ok(())
    } else {
        Err(AnalyticalError::InvalidSpot { spot })
    }
}

/// Central finite-difference delta.
///
/// (P(S+h) - P(S-h)) / 2h
///
/// The step is caller-supplied; smaller `h` reduces truncation error until
/// cancellation takes over.
///
/// # Errors
/// - `AnalyticalError::InvalidStep` if `h <= 0` or not finite
/// - `AnalyticalError::InvalidSpot` if `S - h <= 0` or `S` is not finite
///
/// # Examples
/// ```
/// use pricer_models::analytical::{greeks, EuropeanOption};
///
/// let call = EuropeanOption::default();
/// let fd = greeks::delta_fd(&call, 100.0, 0.01).unwrap();
/// assert!((fd - greeks::delta(&call, 100.0)).abs() < 1e-6);
/// assert!(greeks::delta_fd(&call, 100.0, 0.0).is_err());
/// ```
pub fn delta_fd<P: Priceable + ?Sized>(
    pricer: &P,
    spot: f64,
    h: f64,
) -> Result<f64, AnalyticalError> {
    check_stencil(spot, h)?;
    Ok((pricer.price(spot + h) - pricer.price(spot - h)) / (2.0 * h))
}

/// Central finite-difference gamma.
///
/// (P(S+h) - 2·P(S) + P(S-h)) / h²
///
/// # Errors
/// Same as [`delta_fd`].
pub fn gamma_fd<P: Priceable + ?Sized>(
    pricer: &P,
    spot: f64,
    h: f64,
) -> Result<f64, AnalyticalError> {
    check_stencil(spot, h)?;
    Ok(
        (pricer.price(spot + h) - 2.0 * pricer.price(spot) + pricer.price(spot - h))
            / (h * h),
    )
}
