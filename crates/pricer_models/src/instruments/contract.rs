//! Tagged option contract.
//!
//! `OptionContract` wraps the two closed-form variants so callers can hold
//! either one behind a single type and dispatch `price` statically.

use pricer_core::traits::Priceable;
use pricer_core::types::OptionType;

use super::exercise::ExerciseStyle;
use super::params::ContractParams;
use crate::analytical::error::AnalyticalError;
use crate::analytical::greeks::{self, Greeks};
use crate::analytical::{EuropeanOption, PerpetualAmericanOption};

/// Option contract: European or perpetual American.
///
/// Both variants carry the same [`ContractParams`] and [`OptionType`]; only
/// the pricing formula differs.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ContractParams, OptionContract};
/// use pricer_core::types::OptionType;
///
/// let mut contract = OptionContract::european(ContractParams::default(), OptionType::Call);
/// let call = contract.price(100.0);
///
/// contract.params_mut().volatility = 0.3;
/// assert!(contract.price(100.0) > call);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionContract {
    /// Finite-maturity European option
    European(EuropeanOption),
    /// Infinite-maturity American option
    PerpetualAmerican(PerpetualAmericanOption),
}

impl Default for OptionContract {
    fn default() -> Self {
        OptionContract::European(EuropeanOption::default())
    }
}

impl OptionContract {
    /// Creates a European contract.
    pub fn european(params: ContractParams, option_type: OptionType) -> Self {
        OptionContract::European(EuropeanOption::new(params, option_type))
    }

    /// Creates a perpetual American contract.
    pub fn perpetual_american(params: ContractParams, option_type: OptionType) -> Self {
        OptionContract::PerpetualAmerican(PerpetualAmericanOption::new(params, option_type))
    }

    /// Creates a contract of the given style.
    pub fn with_style(style: ExerciseStyle, params: ContractParams, option_type: OptionType) -> Self {
        match style {
            ExerciseStyle::European => Self::european(params, option_type),
            ExerciseStyle::PerpetualAmerican => Self::perpetual_american(params, option_type),
        }
    }

    /// Returns the exercise style of this contract.
    #[inline]
    pub fn style(&self) -> ExerciseStyle {
        match self {
            OptionContract::European(_) => ExerciseStyle::European,
            OptionContract::PerpetualAmerican(_) => ExerciseStyle::PerpetualAmerican,
        }
    }

    /// Returns the parameter record.
    #[inline]
    pub fn params(&self) -> &ContractParams {
        match self {
            OptionContract::European(option) => &option.params,
            OptionContract::PerpetualAmerican(option) => &option.params,
        }
    }

    /// Returns the parameter record for in-place rebinding.
    #[inline]
    pub fn params_mut(&mut self) -> &mut ContractParams {
        match self {
            OptionContract::European(option) => &mut option.params,
            OptionContract::PerpetualAmerican(option) => &mut option.params,
        }
    }

    /// Returns call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        match self {
            OptionContract::European(option) => option.option_type,
            OptionContract::PerpetualAmerican(option) => option.option_type,
        }
    }

    /// Sets call or put.
    #[inline]
    pub fn set_option_type(&mut self, option_type: OptionType) {
        match self {
            OptionContract::European(option) => option.option_type = option_type,
            OptionContract::PerpetualAmerican(option) => option.option_type = option_type,
        }
    }

    /// Switches between call and put.
    #[inline]
    pub fn toggle(&mut self) {
        self.set_option_type(self.option_type().toggle());
    }

    /// Unchecked price at `spot`.
    #[inline]
    pub fn price(&self, spot: f64) -> f64 {
        match self {
            OptionContract::European(option) => option.price(spot),
            OptionContract::PerpetualAmerican(option) => option.price(spot),
        }
    }

    /// Validated price at `spot`.
    pub fn try_price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        match self {
            OptionContract::European(option) => option.try_price(spot),
            OptionContract::PerpetualAmerican(option) => option.try_price(spot),
        }
    }

    /// Checks the parameters against this contract's closed form.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        match self {
            OptionContract::European(option) => option.validate(),
            OptionContract::PerpetualAmerican(option) => option.validate(),
        }
    }

    /// Borrows the European variant for the exact Greeks.
    ///
    /// # Errors
    /// `AnalyticalError::UnsupportedExerciseStyle` for a perpetual American
    /// contract; use the finite-difference Greeks there instead.
    pub fn as_european(&self) -> Result<&EuropeanOption, AnalyticalError> {
        match self {
            OptionContract::European(option) => Ok(option),
            OptionContract::PerpetualAmerican(_) => {
                Err(AnalyticalError::UnsupportedExerciseStyle {
                    style: format!(
                        "{} (exact Greeks need a finite-maturity contract)",
                        self.style()
                    ),
                })
            }
        }
    }

    /// Exact Greeks at `spot`; European contracts only.
    pub fn greeks(&self, spot: f64) -> Result<Greeks, AnalyticalError> {
        self.as_european().map(|option| greeks::greeks(option, spot))
    }
}

impl Priceable for OptionContract {
    #[inline]
    fn price(&self, spot: f64) -> f64 {
        OptionContract::price(self, spot)
    }
}

impl From<EuropeanOption> for OptionContract {
    fn from(option: EuropeanOption) -> Self {
        OptionContract::European(option)
    }
}

impl From<PerpetualAmericanOption> for OptionContract {
    fn from(option: PerpetualAmericanOption) -> Self {
        OptionContract::PerpetualAmerican(option)
    }
}
