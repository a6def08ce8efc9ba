use std::marker::PhantomData;

use crate::convert::Conversion;
use crate::error::ConversionError;

/// A conversion from a type to itself, in which both directions return their argument unchanged
/// and never fail.
///
/// [`Identity`] is the neutral element for [`then`](Conversion::then), and a natural default
/// when no transform is needed but a [`Conversion`] value is structurally required.
///
/// # Examples
///
/// ```
/// use reciprocal::prelude::*;
///
/// let id = identity::<String>();
/// assert_eq!(id.apply("as it was".to_string()).unwrap(), "as it was");
/// assert_eq!(id.unapply("as it was".to_string()).unwrap(), "as it was");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity<T>(PhantomData<fn(T) -> T>);

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Identity(PhantomData)
    }
}

impl<T> Conversion for Identity<T> {
    type Input = T;
    type Output = T;

    fn apply(&self, input: T) -> Result<T, ConversionError> {
        Ok(input)
    }

    fn unapply(&self, output: T) -> Result<T, ConversionError> {
        Ok(output)
    }
}

/// Construct the [`Identity`] conversion for a type.
///
/// # Examples
///
/// ```
/// use reciprocal::prelude::*;
///
/// assert_eq!(identity::<u64>().apply(57).unwrap(), 57);
/// ```
pub fn identity<T>() -> Identity<T> {
    Identity::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, const_assert_eq};

    // `Identity<T>` is a capability, not a container: it must stay zero-sized and thread-safe no
    // matter what `T` is.
    assert_impl_all!(Identity<*const u8>: Send, Sync, Copy, Default);
    const_assert_eq!(std::mem::size_of::<Identity<String>>(), 0);

    #[test]
    fn both_directions_return_the_argument() {
        let id = identity::<i64>();
        assert_eq!(id.apply(-3).unwrap(), -3);
        assert_eq!(id.unapply(-3).unwrap(), -3);
    }
}
