use std::marker::PhantomData;

use crate::convert::Conversion;
use crate::error::ConversionError;

/// A conversion built from a pair of fallible closures, one for each direction.
///
/// Constructed by [`from_fns`]. This is the escape hatch for one-off conversions that don't
/// warrant a named implementation of [`Conversion`]: the closure pair states the relationship
/// between the two domains in place. The pair is still expected to uphold the conversion
/// contract: both closures pure and deterministic, and anything the backward closure accepts
/// must be accepted by the forward closure when fed back.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = "A: Clone, U: Clone"),
    Copy(bound = "A: Copy, U: Copy")
)]
pub struct FromFns<I, O, A, U> {
    #[derivative(Debug = "ignore")]
    apply: A,
    #[derivative(Debug = "ignore")]
    unapply: U,
    directions: PhantomData<fn(I) -> O>,
}

impl<I, O, A, U> Conversion for FromFns<I, O, A, U>
where
    A: Fn(I) -> Result<O, ConversionError>,
    U: Fn(O) -> Result<I, ConversionError>,
{
    type Input = I;
    type Output = O;

    fn apply(&self, input: I) -> Result<O, ConversionError> {
        (self.apply)(input)
    }

    fn unapply(&self, output: O) -> Result<I, ConversionError> {
        (self.unapply)(output)
    }
}

/// Construct a conversion from a pair of fallible closures: a forward transform and its
/// inverse.
///
/// # Examples
///
/// ```
/// use reciprocal::prelude::*;
///
/// let percentage = from_fns(
///     |raw: u8| {
///         if raw <= 100 {
///             Ok(f64::from(raw) / 100.0)
///         } else {
///             Err(ConversionError::new("percentage out of range"))
///         }
///     },
///     |fraction: f64| {
///         if (0.0..=1.0).contains(&fraction) {
///             Ok((fraction * 100.0) as u8)
///         } else {
///             Err(ConversionError::new("fraction out of range"))
///         }
///     },
/// );
///
/// assert_eq!(percentage.apply(25).unwrap(), 0.25);
/// assert_eq!(percentage.unapply(0.25).unwrap(), 25);
/// assert!(percentage.apply(200).is_err());
/// assert!(percentage.unapply(1.5).is_err());
/// ```
pub fn from_fns<I, O, A, U>(apply: A, unapply: U) -> FromFns<I, O, A, U>
where
    A: Fn(I) -> Result<O, ConversionError>,
    U: Fn(O) -> Result<I, ConversionError>,
{
    FromFns {
        apply,
        unapply,
        directions: PhantomData,
    }
}
