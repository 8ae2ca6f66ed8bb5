//! Algebraic data types: [`Maybe`], [`Either`] and the persistent [`List`].
//!
//! Every type here is an immutable tagged-variant value. Transformations
//! always produce new values, and each type exposes:
//!
//! - a constructor per variant (`some`/`none`, `left`/`right`, `nil`/`cons`)
//! - a predicate per variant (`is_some`/`is_none`, ...)
//! - the uniform combinators `map`, `flat_map` and, where meaningful,
//!   `map_left`, `bimap` and `get_or_else`
//!
//! Equality is structural: two values are equal when their tags match and
//! their payloads are equal (recursively, for lists).
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{cons, left, nil, right, some, Either, Maybe};
//!
//! assert_eq!(some(3).map(|x| x * 2), some(6));
//! assert!(Maybe::<i32>::None.map(|x| x * 2).is_none());
//!
//! let failed: Either<String, i32> = left("bad input".to_string());
//! assert_eq!(failed.map_left(|e| e.to_uppercase()), left("BAD INPUT".to_string()));
//! assert_eq!(right::<String, i32>(5).map(|x| x + 1), right(6));
//!
//! let numbers = cons(1, cons(2, nil()));
//! assert_eq!(numbers.map(|x| x * 10), cons(10, cons(20, nil())));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted pointer used for shared list tails.
///
/// `std::sync::Arc` with the `arc` feature, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod either;
mod list;
mod maybe;

pub use either::{Either, left, right};
pub use list::{List, ListIntoIterator, ListIterator, cons, nil};
pub use maybe::{Maybe, from_nullable, none, some};

pub use crate::list;
