//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust has no way to abstract over a type constructor such as `Maybe<_>`
//! directly. [`TypeConstructor`] recovers it per carrier type: `Inner` names
//! the element type and `WithType<B>` names "the same container holding `B`".
//! The type-class descriptors ([`Functor`](super::Functor),
//! [`Monad`](super::Monad)) are written against these two members, so a
//! generic algorithm can rebuild the container it was given with a new
//! element type.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{Either, List, Maybe};
//! use adtkit::typeclass::TypeConstructor;
//!
//! fn assert_rebuilds<T, B>()
//! where
//!     T: TypeConstructor,
//!     T::WithType<B>: TypeConstructor<Inner = B>,
//! {
//! }
//!
//! assert_rebuilds::<Maybe<i32>, String>();
//! assert_rebuilds::<Either<String, i32>, bool>();
//! assert_rebuilds::<List<i32>, char>();
//! ```

use crate::adt::{Either, List, Maybe};

/// A type constructor applied to a single element type.
///
/// `WithType<B>` must be the same constructor re-applied to `B`, so
/// `<T::WithType<B> as TypeConstructor>::Inner == B`.
pub trait TypeConstructor {
    /// The element type currently held.
    type Inner;

    /// The same constructor holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Either` is a constructor in its right parameter; the left (error) type
/// is fixed.
impl<E, A> TypeConstructor for Either<E, A> {
    type Inner = A;
    type WithType<B> = Either<E, B>;
}

impl<A> TypeConstructor for List<A> {
    type Inner = A;
    type WithType<B> = List<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_with_type_keeps_the_error_type() {
        fn assert_with_type<E, A, B>()
        where
            Either<E, A>: TypeConstructor<Inner = A, WithType<B> = Either<E, B>>,
        {
        }
        assert_with_type::<String, i32, bool>();
    }

    #[rstest]
    fn with_type_builds_an_empty_container() {
        fn rebuild_empty<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let maybe: Maybe<String> = rebuild_empty(Maybe::Some(1));
        assert_eq!(maybe, Maybe::None);

        let list: List<String> = rebuild_empty(crate::list![1, 2]);
        assert!(list.is_nil());
    }
}
