//! Put-call parity relations.
//!
//! Pure functions of prices and market data, independent of any contract
//! type. Used to cross-check pricing output:
//!
//! - C - P = S - K·e^(-rT) (no carry)
//! - C - P = S·e^((b-r)T) - K·e^(-rT) (cost of carry b)

use pricer_core::traits::Float;

/// Tolerance used by [`check_parity`].
pub const DEFAULT_PARITY_TOLERANCE: f64 = 1e-6;

/// Put price implied by a call price: P = C - S + K·e^(-rT).
///
/// # Examples
/// ```
/// use pricer_models::analytical::parity::{call_from_put, put_from_call};
///
/// let put = put_from_call(10.45_f64, 100.0, 100.0, 0.05, 1.0);
/// let call = call_from_put(put, 100.0, 100.0, 0.05, 1.0);
/// assert!((call - 10.45).abs() < 1e-12);
/// ```
#[inline]
pub fn put_from_call<T: Float>(call: T, spot: T, strike: T, rate: T, expiry: T) -> T {
    call - spot + strike * (-rate * expiry).exp()
}

/// Call price implied by a put price: C = P + S - K·e^(-rT).
#[inline]
pub fn call_from_put<T: Float>(put: T, spot: T, strike: T, rate: T, expiry: T) -> T {
    put + spot - strike * (-rate * expiry).exp()
}

/// Returns `true` if `|(C - P) - (S - K·e^(-rT))| < DEFAULT_PARITY_TOLERANCE`.
#[inline]
pub fn check_parity<T: Float>(call: T, put: T, spot: T, strike: T, rate: T, expiry: T) -> bool {
    let tol = T::from(DEFAULT_PARITY_TOLERANCE).unwrap_or_else(T::epsilon);
    check_parity_with_tolerance(call, put, spot, strike, rate, expiry, tol)
}

/// [`check_parity`] with an explicit tolerance.
#[inline]
pub fn check_parity_with_tolerance<T: Float>(
    call: T,
    put: T,
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    tolerance: T,
) -> bool {
    let residual = (call - put) - (spot - strike * (-rate * expiry).exp());
    residual.abs() < tolerance
}

/// Absolute parity residual with cost of carry.
///
/// |(C - P) - (S·e^((b-r)T) - K·e^(-rT))|
#[inline]
pub fn parity_error<T: Float>(
    call: T,
    put: T,
    spot: T,
    strike: T,
    rate: T,
    carry: T,
    expiry: T,
) -> T {
    let forward_leg = spot * ((carry - rate) * expiry).exp();
    let strike_leg = strike * (-rate * expiry).exp();
    ((call - put) - (forward_leg - strike_leg)).abs()
}
