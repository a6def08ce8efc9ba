/*!
> **reciprocal (adjective):** Inversely related; done, given, or felt in return.
>
> **reciprocal (crate):** Bidirectional, fallible conversions for parser-printer pipelines.

When a parser turns raw input into a semantic value, a printer has to turn that semantic value
back into raw input. Writing the two directions as separate functions invites drift: the parser
learns to accept a new form, the printer never hears about it, and round-trips quietly break.

This crate provides a single capability, [`Conversion`], which pairs a forward transform
([`apply`](Conversion::apply)) with its inverse ([`unapply`](Conversion::unapply)) in one value,
and a small algebra for composing conversions into new conversions. A conversion:

- is **cheap to construct** and **immutable** once built;
- is **fallible in both directions**, returning a [`ConversionError`] whenever a value has no
  counterpart in the other domain;
- **owns its parts**: composite conversions are strictly tree-shaped, with no shared mutable
  state, so any conversion whose parts are `Send + Sync` can be used concurrently without
  synchronization.

A parser-printer engine holds one `Conversion` and calls [`apply`](Conversion::apply) after
parsing succeeds and [`unapply`](Conversion::unapply) before printing. Concrete conversions
(string to number, case transforms, and so on) are supplied by calling code; none are exported
here.

## Quick reference

The **[`prelude`]** module exports everything needed to declare and compose conversions. Most
programs using this crate should `use reciprocal::prelude::*;`.

| Constructor | Combinator Type | Conversion Performed |
| :---------- | :-------------- | :------------------- |
| [`identity()`](identity) | [`Identity<T>`](combinators::Identity) | `T` ⇄ `T`, never failing |
| [`from_fns(a, u)`](from_fns) | [`FromFns<I, O, A, U>`](combinators::FromFns) | `I` ⇄ `O`, via the closure pair |
| [`c.invert()`](Conversion::invert) | [`Invert<C>`](combinators::Invert) | `C::Output` ⇄ `C::Input` |
| [`a.then(b)`](Conversion::then) | [`Then<A, B>`](combinators::Then) | `A::Input` ⇄ `B::Output` |
| [`c.optional()`](Conversion::optional) | [`Optional<C>`](combinators::Optional) | `Option<C::Input>` ⇄ `Option<C::Output>` |
| [`c.many()`](Conversion::many) | [`Many<C>`](combinators::Many) | `Vec<C::Input>` ⇄ `Vec<C::Output>` |

## An example

```
use reciprocal::prelude::*;

let number = from_fns(
    |raw: String| {
        raw.parse::<f64>()
            .map_err(|err| ConversionError::with_source("not a decimal number", err))
    },
    |value: f64| Ok(value.to_string()),
);

assert_eq!(number.apply("3.5".to_string()).unwrap(), 3.5);
assert_eq!(number.unapply(3.5).unwrap(), "3.5");
assert!(number.apply("abc".to_string()).is_err());
```

If you are new to parser-printers, the [tutorial] module is a guided tour of the crate.

[tutorial]: tutorial
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod combinators;
pub mod tutorial;

mod convert;
mod error;

pub use combinators::{from_fns, identity};
pub use convert::Conversion;
pub use error::ConversionError;

/// The prelude module for quickly getting started with conversions.
///
/// This module is designed to be imported as `use reciprocal::prelude::*;`, which brings into
/// scope the [`Conversion`] trait, its error type, and the free constructors.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::combinators::{from_fns, identity};
    #[doc(no_inline)]
    pub use crate::convert::Conversion;
    #[doc(no_inline)]
    pub use crate::error::ConversionError;
}
