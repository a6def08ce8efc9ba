use crate::convert::Conversion;
use crate::error::ConversionError;

/// A conversion lifted to operate on optional values: `Option<C::Input>` to `Option<C::Output>`.
///
/// Constructed by [`Conversion::optional`]. `None` maps to `None` in both directions without
/// invoking the underlying conversion; `Some` values pass through it, and a failure inside
/// propagates as an overall failure rather than being absorbed into absence.
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
/// let int = int.optional();
/// assert_eq!(int.unapply(None).unwrap(), None);
/// assert_eq!(int.unapply(Some(12)).unwrap(), Some("12".to_string()));
/// assert!(int.apply(Some("twelve".to_string())).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Optional<C>(pub C);

impl<C: Conversion> Conversion for Optional<C> {
    type Input = Option<C::Input>;
    type Output = Option<C::Output>;

    fn apply(&self, input: Option<C::Input>) -> Result<Option<C::Output>, ConversionError> {
        input.map(|input| self.0.apply(input)).transpose()
    }

    fn unapply(&self, output: Option<C::Output>) -> Result<Option<C::Input>, ConversionError> {
        output.map(|output| self.0.unapply(output)).transpose()
    }
}
