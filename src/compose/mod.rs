//! Function composition utilities.
//!
//! Everything here works on plain functions and closures; nothing depends on
//! the ADT types.
//!
//! # Overview
//!
//! - [`compose`] / [`compose!`]: right-to-left composition (`g ∘ f`)
//! - [`pipe`] / [`pipe!`]: left-to-right composition, in source order
//! - [`compose_many`] / [`pipe_many`]: composition of a runtime sequence of
//!   [`Endomorphism`]s
//! - [`curry2!`], [`curry3!`], [`curry4!`] and [`uncurry2`], [`uncurry3`],
//!   [`uncurry4`]
//! - [`partial!`] (placeholder form), [`partial2`], [`partial3_1`],
//!   [`partial3_2`]
//! - [`identity`], [`constant`], [`flip`]
//!
//! Composing zero functions, in any of the forms above, yields [`identity`].
//!
//! # Examples
//!
//! ```rust
//! use adtkit::{compose, pipe};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! // Same result, reversed argument order.
//! assert_eq!(pipe!(add_one, double)(5), 12);
//! assert_eq!(compose!(double, add_one)(5), 12);
//! ```
//!
//! ## Currying and partial application
//!
//! ```rust
//! use adtkit::{curry3, partial};
//!
//! let between = |low: i32, high: i32, value: i32| low <= value && value <= high;
//!
//! let is_digit = curry3!(between)(0)(9);
//! assert!(is_digit(7));
//!
//! let is_percent = partial!(between, 0, 100, __);
//! assert!(!is_percent(101));
//! ```

mod chain;
mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use chain::{Endomorphism, compose_many, pipe_many};
pub use compose_macro::compose;
pub use curry_macro::{uncurry2, uncurry3, uncurry4};
pub use partial_macro::{partial2, partial3_1, partial3_2};
pub use pipe_macro::pipe;
pub use utils::{constant, flip, identity};
