//! Call/put flag for vanilla option contracts.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option right: call or put.
///
/// Replaces the `"C"` / `"P"` string flag with a closed enumeration so an
/// unknown flag is rejected at parse time instead of silently pricing a put.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "C".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.toggle(), OptionType::Put);
/// assert!("X".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for [`OptionType::Put`].
    #[inline]
    pub fn is_put(self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Returns the opposite right.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Single-letter code, `"C"` or `"P"`.
    pub fn code(self) -> &'static str {
        match self {
            OptionType::Call => "C",
            OptionType::Put => "P",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidInput(format!(
                "Unknown option type '{}': expected C or P",
                s
            ))),
        }
    }
}
