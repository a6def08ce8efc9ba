use crate::convert::Conversion;
use crate::error::ConversionError;

/// A conversion lifted element-wise over sequences: `Vec<C::Input>` to `Vec<C::Output>`.
///
/// Constructed by [`Conversion::many`]. Order and length are preserved in both directions. The
/// first element failure aborts the whole operation, so callers never observe a partial output
/// sequence.
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
///
/// let ints = int.many();
/// assert_eq!(ints.unapply(vec![5, 7]).unwrap(), vec!["5".to_string(), "7".to_string()]);
/// assert_eq!(ints.apply(vec![]).unwrap(), vec![]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Many<C>(pub C);

impl<C: Conversion> Conversion for Many<C> {
    type Input = Vec<C::Input>;
    type Output = Vec<C::Output>;

    fn apply(&self, input: Vec<C::Input>) -> Result<Vec<C::Output>, ConversionError> {
        input.into_iter().map(|input| self.0.apply(input)).collect()
    }

    fn unapply(&self, output: Vec<C::Output>) -> Result<Vec<C::Input>, ConversionError> {
        output
            .into_iter()
            .map(|output| self.0.unapply(output))
            .collect()
    }
}
