//! Small combinators used alongside composition.

/// Returns its argument unchanged.
///
/// This is the result of composing zero functions, and the unit of
/// [`compose`](super::compose) on either side.
///
/// ```rust
/// use adtkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its argument and returns `value`.
///
/// ```rust
/// use adtkit::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// ```rust
/// use adtkit::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constant_ignores_input() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(1), "hello");
        assert_eq!(always_hello(2), "hello");
    }

    #[rstest]
    fn flip_twice_is_the_original() {
        let concat = |a: String, b: &str| a + b;
        let flipped_back = flip(flip(concat));
        assert_eq!(flipped_back("ab".to_string(), "cd"), "abcd");
    }
}
