use crate::convert::Conversion;
use crate::error::ConversionError;

/// A conversion that runs conversion `A`, then conversion `B`, as one conversion from
/// `A::Input` to `B::Output`.
///
/// Constructed by [`Conversion::then`]. Forward, `A` produces the intermediate value consumed by
/// `B`; backward, `B` recovers the intermediate value consumed by `A`. Evaluation stops at the
/// first failure in either direction, in that order, so a first-stage failure never invokes the
/// second stage and no partial result is exposed.
///
/// # Examples
///
/// ```
/// use reciprocal::prelude::*;
///
/// let int = from_fns(
///     |raw: String| {
///         raw.parse::<i64>()
///             .map_err(|err| ConversionError::with_source("not an integer", err))
///     },
///     |value: i64| Ok(value.to_string()),
/// );
/// let nonzero = from_fns(
///     |value: i64| Ok(value != 0),
///     |flag: bool| Ok(if flag { 1 } else { 0 }),
/// );
///
/// let truthy = int.then(nonzero);
/// assert_eq!(truthy.apply("0".to_string()).unwrap(), false);
/// assert_eq!(truthy.apply("7".to_string()).unwrap(), true);
/// assert!(truthy.apply("x".to_string()).is_err());
/// assert_eq!(truthy.unapply(true).unwrap(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Then<A, B>(pub A, pub B);

impl<A, B> Conversion for Then<A, B>
where
    A: Conversion,
    B: Conversion<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn apply(&self, input: A::Input) -> Result<B::Output, ConversionError> {
        self.1.apply(self.0.apply(input)?)
    }

    fn unapply(&self, output: B::Output) -> Result<A::Input, ConversionError> {
        self.0.unapply(self.1.unapply(output)?)
    }
}
