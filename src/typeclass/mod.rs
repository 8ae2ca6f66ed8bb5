//! Type-class descriptors for writing algorithms once over any container.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: `fmap`, plus `replace` and `void` derived from it
//! - [`Monad`]: `pure` and `flat_map`, plus `then`
//! - [`Bifunctor`]: `bimap`, `first` and `second` for two-parameter types
//! - [`lift`] / [`lift_flat`]: point-free `fmap` / `flat_map`
//!
//! `Maybe`, `Either` and `List` each implement every descriptor that fits
//! them. A generic algorithm takes the descriptor as a trait bound and never
//! inspects which concrete container it received.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{right, some, Either};
//! use adtkit::list;
//! use adtkit::typeclass::{Functor, Monad};
//!
//! fn square_then_pair<M>(container: M) -> M::WithType<(i32, i32)>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     container.fmap(|x| (x, x * x))
//! }
//!
//! assert_eq!(square_then_pair(some(3)), some((3, 9)));
//! assert_eq!(square_then_pair(list![1, 2]), list![(1, 1), (2, 4)]);
//! assert_eq!(square_then_pair(right::<&str, i32>(4)), right((4, 16)));
//! ```

mod bifunctor;
mod functor;
mod higher;
mod monad;
mod pointfree;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use pointfree::{lift, lift_flat};
