//! Right-to-left function composition.

/// Composes two functions right-to-left: `compose(g, f)(x) == g(f(x))`.
///
/// The function applied last is listed first, as in `g ∘ f`.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose::compose;
///
/// let add_one_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(add_one_then_double(5), 12);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: G, inner: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| outer(inner(input))
}

/// Composes any number of functions right-to-left.
///
/// `compose!(f, g, h)(x) == f(g(h(x)))`. With no functions the result is
/// [`identity`](crate::compose::identity); with one it is that function.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let square = |x: i32| x * x;
///
/// assert_eq!(compose!(add_one, double, square)(3), 19);
/// assert_eq!(compose!(double, add_one)(5), 12);
///
/// let unchanged = compose!();
/// assert_eq!(unchanged(7), 7);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn compose_applies_inner_first() {
        let to_string = |x: i32| x.to_string();
        let length = |s: String| s.len();
        assert_eq!(compose(length, to_string)(12345), 5);
    }

    #[rstest]
    fn macro_matches_nested_binary_compose() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let negate = |x: i32| -x;
        let nested = compose(add_one, compose(double, negate));
        let flat = compose!(add_one, double, negate);
        for input in -3..=3 {
            assert_eq!(flat(input), nested(input));
        }
    }

    #[rstest]
    fn single_function_is_returned_as_is() {
        let double = |x: i32| x * 2;
        assert_eq!(compose!(double)(4), 8);
    }
}
