//! The combinators that build new [`Conversion`](crate::Conversion)s out of existing ones.
//!
//! Each type here is a composite conversion: it owns its constituent conversion(s) by value for
//! its whole lifetime, and its [`apply`](crate::Conversion::apply) and
//! [`unapply`](crate::Conversion::unapply) are defined purely in terms of the constituents' own
//! two directions. Composites are strictly tree-shaped, hold no state of their own, and preserve
//! `Send`, `Sync`, `Clone`, and `Copy` from their parts.
//!
//! Most code never names these types directly: [`Invert`], [`Then`], [`Optional`], and [`Many`]
//! are produced by the methods on [`Conversion`](crate::Conversion), while [`Identity`] and
//! [`FromFns`] come from the free constructors [`identity`] and [`from_fns`]. The types are
//! public so they can appear in signatures and type aliases.

mod from_fns;
mod identity;
mod invert;
mod many;
mod optional;
mod then;

pub use from_fns::{from_fns, FromFns};
pub use identity::{identity, Identity};
pub use invert::Invert;
pub use many::Many;
pub use optional::Optional;
pub use then::Then;
