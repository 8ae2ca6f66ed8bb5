//! Pattern matching over tagged-variant values.
//!
//! Three forms are provided, from most to least statically checked:
//!
//! - [`match_value`] / [`match_widen`] take a handler struct with one field
//!   per variant ([`MaybeCases`], [`EitherCases`], [`ListCases`]). Leaving a
//!   variant out does not compile.
//! - [`HandlerTable`] maps tags to handlers at runtime. A value whose tag has
//!   no handler is reported as [`UnhandledVariantError::MissingHandler`].
//! - [`match_with`] chains guard clauses over arbitrary predicates and fails
//!   with [`UnhandledVariantError::NoMatchingClause`] from
//!   [`Matcher::exhaustive`] when nothing matched.
//!
//! Every matchable value implements [`Tagged`]; user enums can derive it.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{cons, nil};
//! use adtkit::matching::{match_value, ListCases};
//!
//! let first = match_value(cons(1, cons(2, nil())), ListCases {
//!     nil: || 0,
//!     cons: |head, _tail| head,
//! });
//! assert_eq!(first, 1);
//! ```

mod cases;
mod error;
mod matcher;
mod table;
mod tagged;

pub use cases::{Cases, CasesInto, EitherCases, ListCases, MaybeCases, match_value, match_widen};
pub use error::UnhandledVariantError;
pub use matcher::{Matcher, match_with};
pub use table::HandlerTable;
pub use tagged::Tagged;

#[cfg(feature = "derive")]
pub use adtkit_derive::Tagged;
