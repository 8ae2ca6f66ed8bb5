//! # adtkit
//!
//! Algebraic data types and the combinators that operate on them uniformly.
//!
//! ## Overview
//!
//! - **ADT Core**: [`Maybe`](adt::Maybe), [`Either`](adt::Either) and the
//!   persistent [`List`](adt::List), with smart constructors and predicates
//! - **Pattern Matching**: exhaustive, statically checked dispatch over any
//!   tagged-variant value, plus an erased handler table and guard-style
//!   `match_with` chains
//! - **Combinators**: `map`, `flat_map`, `map_left`, `bimap`, `get_or_else`
//!   with per-type semantics, and explicit type-class descriptors
//!   ([`Functor`](typeclass::Functor), [`Monad`](typeclass::Monad),
//!   [`Bifunctor`](typeclass::Bifunctor)) for writing algorithms once
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`..`curry4!`,
//!   `partial!` and their function counterparts
//! - **Algebraic Structures**: Magma, Semigroup, Monoid and Group descriptors
//!   with `combine_all`
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Tagged)]` for user enums
//! - `arc`: share `List` nodes through `Arc` so lists are `Send + Sync`
//! - `serde`: serialization for `Maybe`, `Either` and `List`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use adtkit::prelude::*;
//!
//! let doubled = some(3).map(|x| x * 2);
//! assert_eq!(doubled, some(6));
//!
//! let total = combine_all(&Sum::<i32>::new(), [1, 2, 3, 4]);
//! assert_eq!(total, 10);
//!
//! let first = match_value(list![1, 2], ListCases {
//!     nil: || 0,
//!     cons: |head, _tail| head,
//! });
//! assert_eq!(first, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

extern crate self as adtkit;

/// Prelude module for convenient imports.
///
/// ```rust
/// use adtkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adt::*;
    pub use crate::algebra::*;
    pub use crate::compose::*;
    pub use crate::matching::*;
    pub use crate::typeclass::*;
}

pub mod adt;
pub mod algebra;
pub mod compose;
pub mod matching;
pub mod typeclass;
