//! Algebraic structures as explicit descriptor values.
//!
//! A descriptor is a value implementing some prefix of the hierarchy
//! [`Magma`] → [`Semigroup`] → [`Monoid`] → [`Group`] for a carrier type. The
//! same carrier can have several descriptors (`i32` is a monoid under both
//! [`Sum`] and [`Product`]), and generic code receives the one it should use
//! as an argument:
//!
//! ```rust
//! use adtkit::algebra::{combine_all, Monoid, Product, Sum};
//!
//! fn total<M: Monoid<Carrier = i32>>(monoid: &M) -> i32 {
//!     combine_all(monoid, [1, 2, 3, 4])
//! }
//!
//! assert_eq!(total(&Sum::new()), 10);
//! assert_eq!(total(&Product::new()), 24);
//! ```
//!
//! Descriptors are built in three ways: the ready-made instances in this
//! module, the combinators that derive one descriptor from others
//! ([`PairOf`], [`Dual`], [`MaybeMonoid`]), and the closure builders
//! [`magma`], [`semigroup`], [`monoid`] and [`group`].

/// Declares a zero-sized descriptor generic over its carrier, with the
/// standard trait impls written out so they do not require bounds on `T`.
macro_rules! phantom_descriptor {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        pub struct $name<T>(::std::marker::PhantomData<fn(T, T) -> T>);

        impl<T> $name<T> {
            /// Creates the descriptor.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self(::std::marker::PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> ::std::fmt::Debug for $name<T> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

mod builders;
mod combinators;
mod combine;
mod instances;
pub mod laws;
mod structure;

pub use builders::{GroupFn, MagmaFn, MonoidFn, SemigroupFn, group, magma, monoid, semigroup};
pub use combinators::{Dual, Endo, First, Last, MaybeMonoid, PairOf};
pub use combine::{combine_all, combine_n, reduce_all};
pub use instances::{All, Any, ListConcat, Max, Min, Product, StringConcat, Sum, VecConcat, Xor};
pub use laws::{has_identity, has_inverse, is_associative};
pub use structure::{Additive, Bounded, Group, Magma, Monoid, Multiplicative, Semigroup};
