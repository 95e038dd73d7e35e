//! Trait for contracts that can be priced at an explicit spot.
//!
//! Spot is always an argument rather than contract state, so a single
//! contract can be evaluated across a mesh of spot prices without mutation.

/// Trait for entities that can be priced at a given spot.
///
/// # Design Philosophy
///
/// This is the one capability the finite-difference Greeks need: any type
/// implementing `Priceable` can be bumped in spot and revalued, whatever its
/// closed form. Contract variants are dispatched through an `enum` in
/// `pricer_models`; the trait is used for static dispatch in generic code.
///
/// ```
/// use pricer_core::traits::priceable::Priceable;
///
/// struct Forward {
///     strike: f64,
/// }
///
/// impl Priceable for Forward {
///     fn price(&self, spot: f64) -> f64 {
///         spot - self.strike
///     }
/// }
///
/// let fwd = Forward { strike: 100.0 };
/// assert_eq!(fwd.price(105.0), 5.0);
/// ```
pub trait Priceable {
    /// Calculate the price of the instrument at the given spot.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - Preconditions on `spot` and on the contract parameters are the
    ///   implementor's to document; violating them yields an undefined
    ///   numeric result (NaN/Inf) rather than a panic
    fn price(&self, spot: f64) -> f64;
}

impl<P: Priceable + ?Sized> Priceable for &P {
    #[inline]
    fn price(&self, spot: f64) -> f64 {
        (**self).price(spot)
    }
}
