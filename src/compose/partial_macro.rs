//! Partial application.
//!
//! Unlike currying, the fixed arguments are supplied in one batch and the
//! result awaits all remaining arguments at once. Fixed arguments are cloned
//! on every call, so the returned function can be called repeatedly.

/// Fixes the first argument of a binary function.
///
/// ```rust
/// use adtkit::compose::partial2;
///
/// let add = |a: i32, b: i32| a + b;
/// let add_five = partial2(add, 5);
/// assert_eq!(add_five(3), 8);
/// ```
#[inline]
pub fn partial2<A, B, C, F>(function: F, first: A) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |second| function(first.clone(), second)
}

/// Fixes the first argument of a ternary function, leaving a binary one.
///
/// ```rust
/// use adtkit::compose::partial3_1;
///
/// let clamp = |low: i32, high: i32, value: i32| value.max(low).min(high);
/// let at_least_zero = partial3_1(clamp, 0);
/// assert_eq!(at_least_zero(10, 42), 10);
/// assert_eq!(at_least_zero(10, -5), 0);
/// ```
#[inline]
pub fn partial3_1<A, B, C, D, F>(function: F, first: A) -> impl Fn(B, C) -> D
where
    A: Clone,
    F: Fn(A, B, C) -> D,
{
    move |second, third| function(first.clone(), second, third)
}

/// Fixes the first two arguments of a ternary function, leaving a unary one.
///
/// ```rust
/// use adtkit::compose::partial3_2;
///
/// let clamp = |low: i32, high: i32, value: i32| value.max(low).min(high);
/// let percent = partial3_2(clamp, 0, 100);
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(42), 42);
/// ```
#[inline]
pub fn partial3_2<A, B, C, D, F>(function: F, first: A, second: B) -> impl Fn(C) -> D
where
    A: Clone,
    B: Clone,
    F: Fn(A, B, C) -> D,
{
    move |third| function(first.clone(), second.clone(), third)
}

/// Partial application with `__` placeholders, for functions of two to four
/// arguments.
///
/// Each `__` stays a parameter of the returned function, in order; every
/// other argument is fixed. With no placeholder the result is a thunk.
/// `__` is matched as a token and needs no import.
///
/// # Examples
///
/// ```rust
/// use adtkit::partial;
///
/// fn divide(dividend: f64, divisor: f64) -> f64 {
///     dividend / divisor
/// }
///
/// let halve = partial!(divide, __, 2.0);
/// assert_eq!(halve(10.0), 5.0);
///
/// let hundred_over = partial!(divide, 100.0, __);
/// assert_eq!(hundred_over(4.0), 25.0);
///
/// let format3 = |a: &str, b: &str, c: &str| format!("{a}-{b}-{c}");
/// let middle_fixed = partial!(format3, __, "m", __);
/// assert_eq!(middle_fixed("l", "r"), "l-m-r");
/// ```
#[macro_export]
macro_rules! partial {
    // Four arguments
    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third, fourth| function(first, second, third, fourth)
    }};
    ($function:expr, __, __, __, $fourth:expr $(,)?) => {{
        let function = $function;
        let fourth = $fourth;
        move |first, second, third| function(first, second, third, ::core::clone::Clone::clone(&fourth))
    }};
    ($function:expr, $first:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third, fourth| function(::core::clone::Clone::clone(&first), second, third, fourth)
    }};
    ($function:expr, $first:expr, $second:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third, fourth| {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                third,
                fourth,
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move |fourth| {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
                fourth,
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr, $fourth:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        let fourth = $fourth;
        move || {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
                ::core::clone::Clone::clone(&fourth),
            )
        }
    }};

    // Three arguments
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, ::core::clone::Clone::clone(&third))
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, ::core::clone::Clone::clone(&second), third)
    }};
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| {
            function(
                first,
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::core::clone::Clone::clone(&first), second, third)
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| {
            function(
                ::core::clone::Clone::clone(&first),
                second,
                ::core::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                third,
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
            )
        }
    }};

    // Two arguments
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::core::clone::Clone::clone(&second))
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::core::clone::Clone::clone(&first), second)
    }};
    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
            )
        }
    }};
}
