//! Currying and uncurrying.
//!
//! `curry2!`..`curry4!` turn an n-ary function into a chain of unary
//! functions. Each intermediate function is reusable: arguments captured so
//! far are cloned on every later call, so they must implement `Clone`.
//! `uncurry2`..`uncurry4` are the inverse transforms.

/// Curries a binary function: `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Examples
///
/// ```rust
/// use adtkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// let add_five = curry2!(add)(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::core::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a ternary function: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// ```rust
/// use adtkit::curry3;
///
/// let volume = curry3!(|w: u32, h: u32, d: u32| w * h * d);
/// let base = volume(2)(3);
/// assert_eq!(base(4), 24);
/// assert_eq!(base(5), 30);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::core::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::core::clone::Clone::clone(&first),
                        ::core::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a 4-ary function: `curry4!(f)(a)(b)(c)(d) == f(a, b, c, d)`.
///
/// ```rust
/// use adtkit::curry4;
///
/// let join = curry4!(|a: &str, b: &str, c: &str, d: &str| format!("{a}{b}{c}{d}"));
/// assert_eq!(join("w")("x")("y")("z"), "wxyz");
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::core::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::core::clone::Clone::clone(&first);
                    let second = ::core::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::core::clone::Clone::clone(&first),
                            ::core::clone::Clone::clone(&second),
                            ::core::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

/// Turns a curried binary function back into a two-argument function.
///
/// ```rust
/// use adtkit::compose::uncurry2;
/// use adtkit::curry2;
///
/// let subtract = |a: i32, b: i32| a - b;
/// let round_trip = uncurry2(curry2!(subtract));
/// assert_eq!(round_trip(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}

/// Turns a curried ternary function back into a three-argument function.
#[inline]
pub fn uncurry3<A, B, C, D, F, G, H>(function: F) -> impl Fn(A, B, C) -> D
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> H,
    H: FnOnce(C) -> D,
{
    move |first, second, third| function(first)(second)(third)
}

/// Turns a curried 4-ary function back into a four-argument function.
#[inline]
pub fn uncurry4<A, B, C, D, E, F, G, H, I>(function: F) -> impl Fn(A, B, C, D) -> E
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> H,
    H: FnOnce(C) -> I,
    I: FnOnce(D) -> E,
{
    move |first, second, third, fourth| function(first)(second)(third)(fourth)
}
