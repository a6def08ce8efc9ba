use crate::convert::Conversion;
use crate::error::ConversionError;

/// A conversion that runs another conversion in the opposite direction: its
/// [`apply`](Conversion::apply) is the underlying [`unapply`](Conversion::unapply), and its
/// [`unapply`](Conversion::unapply) is the underlying [`apply`](Conversion::apply).
///
/// Constructed by [`Conversion::invert`]. The swap is purely structural, so the results in each
/// direction agree pointwise with the underlying conversion's opposite direction, including
/// failures.
///
/// # Examples
///
/// ```
/// use reciprocal::prelude::*;
///
/// let upper = from_fns(
///     |word: String| Ok(word.to_uppercase()),
///     |word: String| {
///         if word.chars().any(char::is_lowercase) {
///             Err(ConversionError::new("not an uppercase word"))
///         } else {
///             Ok(word.to_lowercase())
///         }
///     },
/// );
///
/// let lower = upper.invert();
/// assert_eq!(lower.apply("LOUD".to_string()).unwrap(), "loud");
/// assert!(lower.apply("quiet".to_string()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Invert<C>(pub C);

impl<C: Conversion> Conversion for Invert<C> {
    type Input = C::Output;
    type Output = C::Input;

    fn apply(&self, input: C::Output) -> Result<C::Input, ConversionError> {
        self.0.unapply(input)
    }

    fn unapply(&self, output: C::Input) -> Result<C::Output, ConversionError> {
        self.0.apply(output)
    }
}
