//! Benchmark scenarios and cross-variant properties.
//!
//! # Test Categories
//!
//! 1. **Literal batches**: published European and perpetual American prices
//! 2. **Put-call parity**: property test over the valid parameter domain
//! 3. **Greeks consistency**: exact vs finite difference across variants

use approx::assert_relative_eq;
use pricer_core::types::OptionType;
use pricer_models::analytical::parity::{check_parity, parity_error, put_from_call};
use pricer_models::analytical::{greeks, AnalyticalError, EuropeanOption};
use pricer_models::instruments::{ContractParams, ExerciseStyle, OptionContract};
use proptest::prelude::*;

/// (T, K, σ, r, S, call, put) with b = r.
const EUROPEAN_BATCHES: [(f64, f64, f64, f64, f64, f64, f64); 3] = [
    (0.25, 65.0, 0.30, 0.08, 60.0, 2.13337, 5.84628),
    (1.0, 100.0, 0.20, 0.05, 100.0, 10.45058, 5.57353),
    (30.0, 100.0, 0.30, 0.08, 100.0, 92.17570, 1.24750),
];

// ============================================================================
// Literal Batch Tests
// ============================================================================

#[test]
fn test_european_batches() {
    // One contract rebound per batch
    let mut contract = OptionContract::default();
    for (expiry, strike, vol, rate, spot, call, put) in EUROPEAN_BATCHES {
        {
            let p = contract.params_mut();
            p.expiry = expiry;
            p.strike = strike;
            p.volatility = vol;
            p.rate = rate;
            p.carry = rate;
        }
        contract.set_option_type(OptionType::Call);
        assert_relative_eq!(contract.price(spot), call, epsilon = 1e-5);
        contract.toggle();
        assert_relative_eq!(contract.price(spot), put, epsilon = 1e-5);
    }
}

#[test]
fn test_perpetual_american_batch() {
    let params = ContractParams::default()
        .with_strike(100.0)
        .with_volatility(0.1)
        .with_rate(0.1)
        .with_carry(0.02);
    let call = OptionContract::perpetual_american(params, OptionType::Call);
    let put = OptionContract::perpetual_american(params, OptionType::Put);

    assert_relative_eq!(call.price(110.0), 18.5035, epsilon = 1e-4);
    assert_relative_eq!(put.price(110.0), 3.03106, epsilon = 1e-5);
}

#[test]
fn test_perpetual_american_dominates_european() {
    // Early exercise is worth at least the finite-maturity put
    let params = ContractParams::default()
        .with_rate_and_carry(0.08)
        .with_volatility(0.25)
        .with_expiry(2.0);
    let american = OptionContract::perpetual_american(params, OptionType::Put);
    let european = OptionContract::european(params, OptionType::Put);

    for spot in [80.0, 100.0, 120.0] {
        assert!(american.price(spot) >= european.price(spot));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_raw_and_checked_pricing_disagree_on_invalid_input() {
    let contract = OptionContract::european(
        ContractParams::default().with_volatility(-0.2),
        OptionType::Call,
    );
    assert!(contract.price(100.0).is_nan());
    assert!(matches!(
        contract.try_price(100.0),
        Err(AnalyticalError::InvalidParameter {
            name: "volatility",
            ..
        })
    ));
}

#[test]
fn test_style_specific_validation() {
    let params = ContractParams::default().with_expiry(0.0);
    assert!(params.validate(ExerciseStyle::European).is_err());
    assert!(OptionContract::perpetual_american(params, OptionType::Put)
        .try_price(90.0)
        .is_ok());
}

#[test]
fn test_perpetual_with_complex_exponents_is_not_priced() {
    let params = ContractParams::default()
        .with_rate(-0.05)
        .with_carry(0.02)
        .with_volatility(0.2);
    let contract = OptionContract::perpetual_american(params, OptionType::Put);

    // Raw price falls through both branches
    assert_eq!(contract.price(100.0), 0.0);
    assert!(matches!(
        contract.try_price(100.0),
        Err(AnalyticalError::NumericalInstability { .. })
    ));
}

// ============================================================================
// Parity Tests
// ============================================================================

#[test]
fn test_parity_utilities_on_priced_contract() {
    let option = EuropeanOption::default();
    let call = option.call_price(100.0);
    let put = option.put_price(100.0);

    assert!(check_parity(call, put, 100.0, 100.0, 0.05, 1.0));
    assert_relative_eq!(put_from_call(call, 100.0, 100.0, 0.05, 1.0), put, epsilon = 1e-10);
}

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 10.0..500.0_f64,
        strike in 10.0..500.0_f64,
        rate in -0.02..0.15_f64,
        carry in -0.1..0.15_f64,
        expiry in 0.05..5.0_f64,
        vol in 0.05..1.0_f64,
    ) {
        let params = ContractParams::default()
            .with_strike(strike)
            .with_rate(rate)
            .with_carry(carry)
            .with_expiry(expiry)
            .with_volatility(vol);
        let call = EuropeanOption::call(params).price(spot);
        let put = EuropeanOption::put(params).price(spot);

        let err = parity_error(call, put, spot, strike, rate, carry, expiry);
        prop_assert!(err < 1e-9, "parity error {} for {:?} at S = {}", err, params, spot);
    }

    #[test]
    fn prop_gamma_call_put_symmetry(
        spot in 20.0..300.0_f64,
        vol in 0.05..1.0_f64,
        expiry in 0.05..5.0_f64,
    ) {
        let params = ContractParams::default().with_volatility(vol).with_expiry(expiry);
        let call = EuropeanOption::call(params);
        let put = EuropeanOption::put(params);
        prop_assert_eq!(greeks::gamma(&call, spot), greeks::gamma(&put, spot));
    }
}

// ============================================================================
// Greeks Consistency Tests
// ============================================================================

#[test]
fn test_fd_delta_on_contract_enum() {
    let contract = OptionContract::default();
    let exact = contract.greeks(100.0).unwrap();
    let fd = greeks::delta_fd(&contract, 100.0, 0.01).unwrap();
    assert_relative_eq!(fd, exact.delta, epsilon = 1e-7);
}

#[test]
fn test_fd_stencil_must_stay_above_zero() {
    let contract = OptionContract::default();
    assert!(matches!(
        greeks::delta_fd(&contract, 0.005, 0.01),
        Err(AnalyticalError::InvalidSpot { .. })
    ));
    assert!(matches!(
        greeks::gamma_fd(&contract, 0.01, 0.01),
        Err(AnalyticalError::InvalidSpot { .. })
    ));
}
