/*! The introductory tutorial for the crate (nothing is exported from this module).

# Getting started with conversions

The first step to relating two representations is deciding what the relationship is.

A [`Conversion`](crate::Conversion) is one value that knows how to go both ways between an
`Input` type and an `Output` type. Let's write our first conversion, relating the raw text of a
port number to the number itself:

```
use reciprocal::prelude::*;

let port = from_fns(
    |raw: String| {
        raw.parse::<u16>()
            .map_err(|err| ConversionError::with_source("not a port number", err))
    },
    |port: u16| Ok(port.to_string()),
);

assert_eq!(port.apply("8080".to_string()).unwrap(), 8080);
assert_eq!(port.unapply(8080).unwrap(), "8080");
```

The forward direction, [`apply`](crate::Conversion::apply), is what a parser-printer engine
calls after parsing succeeds; the backward direction, [`unapply`](crate::Conversion::unapply),
is what it calls before printing. Because both live in one value, they cannot drift apart: there
is no second source of truth to forget to update.

Both directions are fallible. Text that is not a port number has no counterpart in the output
domain, and `apply` says so:

```
# use reciprocal::prelude::*;
# let port = from_fns(
#     |raw: String| {
#         raw.parse::<u16>()
#             .map_err(|err| ConversionError::with_source("not a port number", err))
#     },
#     |port: u16| Ok(port.to_string()),
# );
assert!(port.apply("eighty-eighty".to_string()).is_err());
```

For conversions that deserve a name, implement the trait directly:

```
use reciprocal::prelude::*;

/// Relates a year to its distance from the first moon landing.
struct SinceApollo;

impl Conversion for SinceApollo {
    type Input = i32;
    type Output = i32;

    fn apply(&self, year: i32) -> Result<i32, ConversionError> {
        Ok(year - 1969)
    }

    fn unapply(&self, offset: i32) -> Result<i32, ConversionError> {
        Ok(offset + 1969)
    }
}

assert_eq!(SinceApollo.apply(2021).unwrap(), 52);
assert_eq!(SinceApollo.unapply(52).unwrap(), 2021);
```

# Composing conversions

Conversions form a small algebra. [`then`](crate::Conversion::then) chains two conversions, so
the output domain of the first feeds the input domain of the second, in both directions:

```
use reciprocal::prelude::*;

let int = from_fns(
    |raw: String| {
        raw.parse::<i64>()
            .map_err(|err| ConversionError::with_source("not an integer", err))
    },
    |value: i64| Ok(value.to_string()),
);
let celsius = from_fns(
    |raw: i64| Ok(raw as f64 / 10.0),
    |degrees: f64| Ok((degrees * 10.0) as i64),
);

let reading = int.then(celsius);
assert_eq!(reading.apply("215".to_string()).unwrap(), 21.5);
assert_eq!(reading.unapply(21.5).unwrap(), "215");
```

Failure short-circuits: if the first stage fails, the second is never consulted, and the error
surfaces to the caller untouched.

[`invert`](crate::Conversion::invert) swaps a conversion's two directions. This is handy when a
conversion is declared in the orientation opposite to the one a pipeline needs:

```
# use reciprocal::prelude::*;
# let int = from_fns(
#     |raw: String| {
#         raw.parse::<i64>()
#             .map_err(|err| ConversionError::with_source("not an integer", err))
#     },
#     |value: i64| Ok(value.to_string()),
# );
let format = int.invert();
assert_eq!(format.apply(99).unwrap(), "99");
```

And [`identity`](crate::identity) is the do-nothing conversion, for the places where a
`Conversion` value is structurally required but no transform is wanted:

```
use reciprocal::prelude::*;

let nothing = identity::<bool>();
assert_eq!(nothing.apply(true).unwrap(), true);
```

# Lifting over structure

A conversion between element types induces a conversion between structures of those elements.
[`optional`](crate::Conversion::optional) lifts over `Option`, and
[`many`](crate::Conversion::many) lifts element-wise over `Vec`:

```
use reciprocal::prelude::*;

let int = from_fns(
    |raw: String| {
        raw.parse::<i64>()
            .map_err(|err| ConversionError::with_source("not an integer", err))
    },
    |value: i64| Ok(value.to_string()),
);

let ints = int.many();
let raw: Vec<String> = vec!["10".into(), "20".into(), "30".into()];
assert_eq!(ints.apply(raw).unwrap(), vec![10, 20, 30]);
```

Lifting never weakens failure. `None` passes through untouched, but a failure on a present value
is an overall failure, and a failing element anywhere in a sequence aborts the whole operation
with no partial output:

```
# use reciprocal::prelude::*;
# let int = from_fns(
#     |raw: String| {
#         raw.parse::<i64>()
#             .map_err(|err| ConversionError::with_source("not an integer", err))
#     },
#     |value: i64| Ok(value.to_string()),
# );
let ints = int.many();
let raw: Vec<String> = vec!["10".into(), "twenty".into(), "30".into()];
assert!(ints.apply(raw).is_err());
```

# Round-trips, and what the contract asks of you

The abstraction enforces the *shape* of the relationship: two pure, independently fallible
directions. It does not (and cannot) enforce that your two directions agree. The contract to
uphold when writing a concrete conversion is the weak round-trip guarantee: `apply` followed by
`unapply` need not reproduce the exact original input, but anything `unapply` accepts must be
accepted by `apply` when fed back. The port conversion above satisfies this: printing a port
always yields text that parses to the same port, even though `"08080"` parses to a port that
prints back differently.

Whatever stronger guarantee your domain needs (such as byte-for-byte round-tripping) is yours to
uphold in the concrete conversion; the combinators preserve whatever your parts provide.
*/
