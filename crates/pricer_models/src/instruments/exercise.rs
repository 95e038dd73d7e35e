//! Option exercise style definitions.
//!
//! This module provides the two contract variants priced in closed form:
//! finite-maturity European and infinite-maturity (perpetual) American.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Option exercise style.
///
/// Both styles share the same parameter record; the style only selects
/// which closed form `price` applies.
///
/// # Variants
/// - `European`: Exercise only at expiry (Black-Scholes with cost of carry)
/// - `PerpetualAmerican`: Exercise at any time, no expiry
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// let style: ExerciseStyle = "perpetual".parse().unwrap();
/// assert!(style.is_perpetual_american());
/// assert!(!style.requires_expiry());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    #[default]
    European,

    /// Perpetual American style: exercise at any time, never expires.
    PerpetualAmerican,
}

impl ExerciseStyle {
    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is a perpetual American exercise style.
    #[inline]
    pub fn is_perpetual_american(&self) -> bool {
        matches!(self, ExerciseStyle::PerpetualAmerican)
    }

    /// Returns whether the closed form reads the expiry field.
    ///
    /// The perpetual formula is maturity-independent and ignores `expiry`.
    #[inline]
    pub fn requires_expiry(&self) -> bool {
        self.is_european()
    }

    /// Human-readable name used in error messages and reports.
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "European",
            ExerciseStyle::PerpetualAmerican => "PerpetualAmerican",
        }
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExerciseStyle {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "european" | "eu" | "e" => Ok(ExerciseStyle::European),
            "perpetual" | "american" | "perpetual-american" | "perpetualamerican" | "a" => {
                Ok(ExerciseStyle::PerpetualAmerican)
            }
            _ => Err(PricingError::InvalidInput(format!(
                "Unknown exercise style '{}': expected european or perpetual",
                s
            ))),
        }
    }
}
