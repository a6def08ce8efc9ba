use crate::combinators::{Invert, Many, Optional, Then};
use crate::error::ConversionError;

/// Declares a type that can transform an [`Input`](Conversion::Input) value into an
/// [`Output`](Conversion::Output) value *and* transform an `Output` value back into an `Input`
/// value.
///
/// A parser-printer engine uses a single [`Conversion`] to post-process a parsed value into a
/// richer model and to pre-process that model back into a printable value, so the two directions
/// cannot drift apart.
///
/// # Implementing `Conversion`
///
/// Implementations supply [`apply`](Conversion::apply) and [`unapply`](Conversion::unapply) and
/// inherit the combinator methods. Both directions must be pure: the same argument produces the
/// same result, and neither success nor failure mutates shared state. A conversion need not be a
/// bijection, but every value that [`unapply`](Conversion::unapply) accepts must be accepted by
/// [`apply`](Conversion::apply) when fed back, because printing back what was parsed is always a
/// legitimate path.
///
/// ```
/// use reciprocal::prelude::*;
///
/// /// Relates a character to its Unicode scalar value.
/// struct Scalar;
///
/// impl Conversion for Scalar {
///     type Input = char;
///     type Output = u32;
///
///     fn apply(&self, input: char) -> Result<u32, ConversionError> {
///         Ok(input as u32)
///     }
///
///     fn unapply(&self, output: u32) -> Result<char, ConversionError> {
///         char::from_u32(output)
///             .ok_or_else(|| ConversionError::new("not a Unicode scalar value"))
///     }
/// }
///
/// assert_eq!(Scalar.apply('a').unwrap(), 97);
/// assert_eq!(Scalar.unapply(97).unwrap(), 'a');
/// assert!(Scalar.unapply(0xD800).is_err());
/// ```
pub trait Conversion {
    /// The type of values this conversion converts from.
    type Input;

    /// The type of values this conversion converts to.
    type Output;

    /// Attempts to transform an input into an output.
    ///
    /// Fails with a [`ConversionError`] when the input does not represent a valid value in the
    /// output domain. See [`unapply`](Conversion::unapply) for the reverse process.
    fn apply(&self, input: Self::Input) -> Result<Self::Output, ConversionError>;

    /// Attempts to transform an output back into an input.
    ///
    /// The reverse process of [`apply`](Conversion::apply). Fails analogously, when the output
    /// cannot be mapped back to a valid input.
    fn unapply(&self, output: Self::Output) -> Result<Self::Input, ConversionError>;

    /// Swap this conversion's two directions, so that [`apply`](Conversion::apply) of the result
    /// is [`unapply`](Conversion::unapply) of the original, and vice versa.
    ///
    /// Inverting is a structural swap: it introduces no fallibility beyond what the underlying
    /// conversion already has, and inverting twice restores the original orientation.
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
    /// let print = int.invert();
    /// assert_eq!(print.apply(42).unwrap(), "42");
    /// assert_eq!(print.unapply("42".to_string()).unwrap(), 42);
    /// ```
    fn invert(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert(self)
    }

    /// Run this conversion, then `next`, as a single conversion.
    ///
    /// Forward, the composite applies `self` and feeds the intermediate value to `next`;
    /// backward, it unapplies `next` and feeds the intermediate value back through `self`.
    /// Evaluation stops at the first failure in either direction, and no partial result is
    /// exposed.
    ///
    /// [`Identity`](crate::combinators::Identity) is the neutral element: composing with it on
    /// either side changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use reciprocal::prelude::*;
    ///
    /// let meters = from_fns(
    ///     |raw: String| {
    ///         raw.parse::<u64>()
    ///             .map_err(|err| ConversionError::with_source("not a length", err))
    ///     },
    ///     |meters: u64| Ok(meters.to_string()),
    /// );
    /// let millimeters = from_fns(
    ///     |meters: u64| Ok(meters * 1000),
    ///     |millimeters: u64| {
    ///         if millimeters % 1000 == 0 {
    ///             Ok(millimeters / 1000)
    ///         } else {
    ///             Err(ConversionError::new("not a whole number of meters"))
    ///         }
    ///     },
    /// );
    ///
    /// let length = meters.then(millimeters);
    /// assert_eq!(length.apply("7".to_string()).unwrap(), 7000);
    /// assert_eq!(length.unapply(7000).unwrap(), "7");
    /// assert!(length.unapply(7001).is_err());
    /// ```
    fn then<C>(self, next: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Conversion<Input = Self::Output>,
    {
        Then(self, next)
    }

    /// Lift this conversion to operate on optional values.
    ///
    /// `None` maps to `None` in both directions without invoking this conversion; `Some` values
    /// pass through it, and a failure inside propagates as an overall failure. Absence is never
    /// used to swallow an error.
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
    /// assert_eq!(int.apply(None).unwrap(), None);
    /// assert_eq!(int.apply(Some("3".to_string())).unwrap(), Some(3));
    /// assert!(int.apply(Some("x".to_string())).is_err());
    /// ```
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional(self)
    }

    /// Lift this conversion to operate element-wise on sequences.
    ///
    /// Order and length are preserved, and the first element failure aborts the whole operation
    /// in either direction: no partial sequence is ever returned.
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
    /// let raw = vec!["1".to_string(), "2".to_string(), "3".to_string()];
    /// assert_eq!(ints.apply(raw).unwrap(), vec![1, 2, 3]);
    ///
    /// let raw = vec!["1".to_string(), "x".to_string(), "3".to_string()];
    /// assert!(ints.apply(raw).is_err());
    /// ```
    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many(self)
    }
}
