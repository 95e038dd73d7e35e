//! Reference prices used by `demo` and `check`
//!
//! European batches are stated with `b = r`. Reference values are the
//! closed-form prices to ten significant figures.

use pricer_core::types::OptionType;
use pricer_models::instruments::{ContractParams, OptionContract};

/// A priced reference scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    /// Display name
    pub name: &'static str,
    /// Contract parameters, spot included
    pub params: ContractParams,
    /// Expected call price
    pub call: f64,
    /// Expected put price
    pub put: f64,
}

impl Benchmark {
    /// European call/put pair at the batch parameters
    pub fn european(&self) -> (OptionContract, OptionContract) {
        (
            OptionContract::european(self.params, OptionType::Call),
            OptionContract::european(self.params, OptionType::Put),
        )
    }

    /// Perpetual American call/put pair at the batch parameters
    pub fn perpetual_american(&self) -> (OptionContract, OptionContract) {
        (
            OptionContract::perpetual_american(self.params, OptionType::Call),
            OptionContract::perpetual_american(self.params, OptionType::Put),
        )
    }

    /// Spot the reference prices are quoted at
    #[inline]
    pub fn spot(&self) -> f64 {
        self.params.spot
    }
}

const fn params(
    expiry: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    carry: f64,
    spot: f64,
) -> ContractParams {
    ContractParams {
        rate,
        volatility,
        strike,
        expiry,
        carry,
        spot,
    }
}

/// European batches 1 to 4
pub const EUROPEAN_BATCHES: [Benchmark; 4] = [
    Benchmark {
        name: "Batch 1",
        params: params(0.25, 65.0, 0.30, 0.08, 0.08, 60.0),
        call: 2.133368445,
        put: 5.846282210,
    },
    Benchmark {
        name: "Batch 2",
        params: params(1.0, 100.0, 0.20, 0.05, 0.05, 100.0),
        call: 10.45058357,
        put: 5.573526022,
    },
    Benchmark {
        name: "Batch 3",
        params: params(1.0, 10.0, 0.50, 0.12, 0.12, 5.0),
        call: 0.2040578815,
        put: 4.073262249,
    },
    Benchmark {
        name: "Batch 4",
        params: params(30.0, 100.0, 0.30, 0.08, 0.08, 100.0),
        call: 92.17570380,
        put: 1.247499200,
    },
];

/// Perpetual American reference (expiry unused)
pub const PERPETUAL: Benchmark = Benchmark {
    name: "Perpetual",
    params: params(1.0, 100.0, 0.10, 0.10, 0.02, 110.0),
    call: 18.50349988,
    put: 3.031060380,
};

/// Absolute tolerance for matching the references
pub const TOLERANCE: f64 = 1e-6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_european_batches_match() {
        for batch in EUROPEAN_BATCHES {
            let (call, put) = batch.european();
            assert!(
                (call.price(batch.spot()) - batch.call).abs() < TOLERANCE,
                "{} call",
                batch.name
            );
            assert!(
                (put.price(batch.spot()) - batch.put).abs() < TOLERANCE,
                "{} put",
                batch.name
            );
        }
    }

    #[test]
    fn test_perpetual_matches() {
        let (call, put) = PERPETUAL.perpetual_american();
        assert!((call.price(PERPETUAL.spot()) - PERPETUAL.call).abs() < TOLERANCE);
        assert!((put.price(PERPETUAL.spot()) - PERPETUAL.put).abs() < TOLERANCE);
    }
}
