//! Left-to-right function composition.

/// Composes two functions left-to-right: `pipe(f, g)(x) == g(f(x))`.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose::pipe;
///
/// let add_one_then_double = pipe(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(add_one_then_double(5), 12);
/// ```
#[inline]
pub fn pipe<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Composes any number of functions left-to-right, in source order.
///
/// `pipe!(f, g, h)(x) == h(g(f(x)))`. With no functions the result is
/// [`identity`](crate::compose::identity).
///
/// # Examples
///
/// ```rust
/// use adtkit::pipe;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(pipe!(add_one, double)(5), 12);
///
/// let describe = pipe!(add_one, double, |x: i32| format!("result: {x}"));
/// assert_eq!(describe(1), "result: 4");
///
/// let unchanged = pipe!();
/// assert_eq!(unchanged("same"), "same");
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::pipe!($($rest),+);
        move |input| rest(first(input))
    }};
}
