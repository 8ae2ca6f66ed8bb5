//! Statically exhaustive handler sets.
//!
//! A handler set is a struct with one field per variant of the matched type.
//! Because a struct literal must name every field, leaving a variant out is a
//! compile error rather than a runtime condition:
//!
//! ```rust,compile_fail
//! use adtkit::adt::some;
//! use adtkit::matching::{match_value, MaybeCases};
//!
//! // error[E0063]: missing field `none`
//! let _ = match_value(some(1), MaybeCases { some: |x: i32| x });
//! ```

use crate::adt::{Either, List, Maybe};

/// A complete set of handlers for values of type `T`.
///
/// `dispatch` selects the handler keyed by the value's variant and invokes
/// it with the payload. No other handler runs.
pub trait Cases<T> {
    /// The common result type of every handler.
    type Output;

    /// Runs the handler for `value`'s variant.
    fn dispatch(self, value: T) -> Self::Output;
}

/// A complete set of handlers whose results may differ in type but all
/// convert into `B`.
pub trait CasesInto<T, B> {
    /// Runs the handler for `value`'s variant and widens its result.
    fn dispatch_into(self, value: T) -> B;
}

/// Matches `value` against a complete handler set.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{cons, nil};
/// use adtkit::matching::{match_value, ListCases};
///
/// let first = match_value(cons(1, cons(2, nil())), ListCases {
///     nil: || 0,
///     cons: |head, _tail| head,
/// });
/// assert_eq!(first, 1);
/// ```
#[inline]
pub fn match_value<T, C>(value: T, cases: C) -> C::Output
where
    C: Cases<T>,
{
    cases.dispatch(value)
}

/// Matches `value` where each handler may return a different type; every
/// result is converted into `B`.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{left, Either};
/// use adtkit::matching::{match_widen, EitherCases};
///
/// let value: Either<&str, u8> = left("error");
/// let widened: String = match_widen(value, EitherCases {
///     left: |message: &'static str| message,
///     right: |code: u8| code.to_string(),
/// });
/// assert_eq!(widened, "error");
/// ```
#[inline]
pub fn match_widen<B, T, C>(value: T, cases: C) -> B
where
    C: CasesInto<T, B>,
{
    cases.dispatch_into(value)
}

// =============================================================================
// Maybe
// =============================================================================

/// Handlers for [`Maybe`].
#[derive(Debug, Clone, Copy)]
pub struct MaybeCases<S, N> {
    /// Receives the payload of `Some`.
    pub some: S,
    /// Runs for `None`.
    pub none: N,
}

impl<A, B, S, N> Cases<Maybe<A>> for MaybeCases<S, N>
where
    S: FnOnce(A) -> B,
    N: FnOnce() -> B,
{
    type Output = B;

    #[inline]
    fn dispatch(self, value: Maybe<A>) -> B {
        match value {
            Maybe::Some(payload) => (self.some)(payload),
            Maybe::None => (self.none)(),
        }
    }
}

impl<A, B, X, Y, S, N> CasesInto<Maybe<A>, B> for MaybeCases<S, N>
where
    S: FnOnce(A) -> X,
    N: FnOnce() -> Y,
    X: Into<B>,
    Y: Into<B>,
{
    #[inline]
    fn dispatch_into(self, value: Maybe<A>) -> B {
        match value {
            Maybe::Some(payload) => (self.some)(payload).into(),
            Maybe::None => (self.none)().into(),
        }
    }
}

// =============================================================================
// Either
// =============================================================================

/// Handlers for [`Either`].
#[derive(Debug, Clone, Copy)]
pub struct EitherCases<L, R> {
    /// Receives the payload of `Left`.
    pub left: L,
    /// Receives the payload of `Right`.
    pub right: R,
}

impl<E, A, B, L, R> Cases<Either<E, A>> for EitherCases<L, R>
where
    L: FnOnce(E) -> B,
    R: FnOnce(A) -> B,
{
    type Output = B;

    #[inline]
    fn dispatch(self, value: Either<E, A>) -> B {
        match value {
            Either::Left(error) => (self.left)(error),
            Either::Right(payload) => (self.right)(payload),
        }
    }
}

impl<E, A, B, X, Y, L, R> CasesInto<Either<E, A>, B> for EitherCases<L, R>
where
    L: FnOnce(E) -> X,
    R: FnOnce(A) -> Y,
    X: Into<B>,
    Y: Into<B>,
{
    #[inline]
    fn dispatch_into(self, value: Either<E, A>) -> B {
        match value {
            Either::Left(error) => (self.left)(error).into(),
            Either::Right(payload) => (self.right)(payload).into(),
        }
    }
}

// =============================================================================
// List
// =============================================================================

/// Handlers for [`List`].
///
/// `cons` receives the owned head and the (shared) tail.
#[derive(Debug, Clone, Copy)]
pub struct ListCases<N, C> {
    /// Runs for the empty list.
    pub nil: N,
    /// Receives the head and tail of a non-empty list.
    pub cons: C,
}

impl<A, B, N, C> Cases<List<A>> for ListCases<N, C>
where
    A: Clone,
    N: FnOnce() -> B,
    C: FnOnce(A, List<A>) -> B,
{
    type Output = B;

    #[inline]
    fn dispatch(self, value: List<A>) -> B {
        match value.into_uncons() {
            Maybe::Some((head, tail)) => (self.cons)(head, tail),
            Maybe::None => (self.nil)(),
        }
    }
}

impl<A, B, X, Y, N, C> CasesInto<List<A>, B> for ListCases<N, C>
where
    A: Clone,
    N: FnOnce() -> X,
    C: FnOnce(A, List<A>) -> Y,
    X: Into<B>,
    Y: Into<B>,
{
    #[inline]
    fn dispatch_into(self, value: List<A>) -> B {
        match value.into_uncons() {
            Maybe::Some((head, tail)) => (self.cons)(head, tail).into(),
            Maybe::None => (self.nil)().into(),
        }
    }
}
