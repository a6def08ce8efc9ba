use std::borrow::Cow;
use thiserror::Error;

/// The error returned when a [`Conversion`](crate::Conversion)'s forward or backward transform
/// is undefined for the value it was given.
///
/// This is the crate's single error kind: it covers any condition where a mapping has no answer
/// for a particular value, such as an out-of-range number or a malformed structure. Concrete
/// conversions may attach descriptive detail with [`with_source`](ConversionError::with_source);
/// combinators treat every failure opaquely and propagate it unchanged to the caller. There is
/// no retry, fallback, or logging in the core.
///
/// # Examples
///
/// ```
/// use reciprocal::ConversionError;
///
/// let plain = ConversionError::new("not a leap year");
/// assert_eq!(plain.to_string(), "not a leap year");
///
/// let caused = ConversionError::with_source("not an integer", "7.5".parse::<i64>().unwrap_err());
/// assert_eq!(caused.to_string(), "not an integer");
/// assert!(std::error::Error::source(&caused).is_some());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConversionError {
    message: Cow<'static, str>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ConversionError {
    /// Construct a [`ConversionError`] from a message describing why the mapping is undefined
    /// for the offending value.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ConversionError {
            message: message.into(),
            source: None,
        }
    }

    /// Construct a [`ConversionError`] from a message and the underlying error that caused it,
    /// preserved as this error's [`source`](std::error::Error::source).
    pub fn with_source(
        message: impl Into<Cow<'static, str>>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        ConversionError {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}
