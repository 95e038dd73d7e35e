//! Parameter rows for matrix sweeps.

use std::fmt;

use pricer_models::instruments::ContractParams;

use super::error::SweepError;

/// One row of a parameter table: `{T, K, σ, r, [b]}`.
///
/// When the fifth value is absent, the cost of carry equals the row's rate.
///
/// # Examples
/// ```
/// use pricer_risk::sweep::ParamRow;
///
/// let row = ParamRow::from_slice(0, &[0.25, 65.0, 0.30, 0.08]).unwrap();
/// assert_eq!(row.carry, 0.08);
///
/// assert!(ParamRow::from_slice(1, &[1.0, 100.0, 0.2]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamRow {
    /// Time to maturity (T)
    pub expiry: f64,
    /// Strike (K)
    pub strike: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Cost of carry (b)
    pub carry: f64,
}

impl ParamRow {
    /// Parses a positional row.
    ///
    /// # Errors
    /// `SweepError::MalformedRow` naming `index` when `values` does not hold
    /// 4 or 5 numbers.
    pub fn from_slice(index: usize, values: &[f64]) -> Result<Self, SweepError> {
        match *values {
            [expiry, strike, volatility, rate] => Ok(Self {
                expiry,
                strike,
                volatility,
                rate,
                carry: rate,
            }),
            [expiry, strike, volatility, rate, carry] => Ok(Self {
                expiry,
                strike,
                volatility,
                rate,
                carry,
            }),
            _ => Err(SweepError::MalformedRow {
                row: index,
                len: values.len(),
            }),
        }
    }

    /// Parses every row, failing on the first malformed one.
    pub fn parse_all<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Self>, SweepError> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| Self::from_slice(index, row.as_ref()))
            .collect()
    }

    /// Overwrites `T, K, σ, r, b` on `params`; `spot` is left alone.
    pub fn apply(&self, params: &mut ContractParams) {
        params.expiry = self.expiry;
        params.strike = self.strike;
        params.volatility = self.volatility;
        params.rate = self.rate;
        params.carry = self.carry;
    }
}

impl fmt::Display for ParamRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T={} K={} sig={} r={} b={}",
            self.expiry, self.strike, self.volatility, self.rate, self.carry
        )
    }
}
