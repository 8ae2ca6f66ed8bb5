//! Composition of a runtime sequence of functions.
//!
//! `compose!` and `pipe!` fix the number of functions at compile time. When
//! the functions arrive as data (a `Vec`, an iterator) they must share one
//! type, so they are boxed endomorphisms `A -> A`.

/// A boxed function from `A` to `A`.
pub type Endomorphism<'a, A> = Box<dyn Fn(A) -> A + 'a>;

/// Applies the functions from last to first (a right fold), so
/// `compose_many([f, g, h])(x) == f(g(h(x)))`.
///
/// An empty sequence yields the identity function.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose::{compose_many, Endomorphism};
///
/// let steps: Vec<Endomorphism<i32>> = vec![Box::new(|x: i32| x * 2), Box::new(|x: i32| x + 1)];
/// assert_eq!(compose_many(steps)(5), 12);
///
/// assert_eq!(compose_many(Vec::<Endomorphism<i32>>::new())(5), 5);
/// ```
pub fn compose_many<'a, A, I>(functions: I) -> Endomorphism<'a, A>
where
    A: 'a,
    I: IntoIterator<Item = Endomorphism<'a, A>>,
{
    let functions: Vec<Endomorphism<'a, A>> = functions.into_iter().collect();
    Box::new(move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |accumulator, function| function(accumulator))
    })
}

/// Applies the functions from first to last (a left fold seeded with the
/// input), so `pipe_many([f, g, h])(x) == h(g(f(x)))`.
///
/// An empty sequence yields the identity function.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose::{pipe_many, Endomorphism};
///
/// let steps: Vec<Endomorphism<i32>> = vec![Box::new(|x: i32| x + 1), Box::new(|x: i32| x * 2)];
/// assert_eq!(pipe_many(steps)(5), 12);
/// ```
pub fn pipe_many<'a, A, I>(functions: I) -> Endomorphism<'a, A>
where
    A: 'a,
    I: IntoIterator<Item = Endomorphism<'a, A>>,
{
    let functions: Vec<Endomorphism<'a, A>> = functions.into_iter().collect();
    Box::new(move |input| {
        functions
            .iter()
            .fold(input, |accumulator, function| function(accumulator))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn steps() -> Vec<Endomorphism<'static, String>> {
        vec![
            Box::new(|s| s + "a"),
            Box::new(|s| s + "b"),
            Box::new(|s| s + "c"),
        ]
    }

    #[rstest]
    fn compose_many_runs_last_function_first() {
        assert_eq!(compose_many(steps())(String::new()), "cba");
    }

    #[rstest]
    fn pipe_many_runs_first_function_first() {
        assert_eq!(pipe_many(steps())(String::new()), "abc");
    }

    #[rstest]
    fn empty_sequences_are_identity() {
        assert_eq!(compose_many(Vec::new())("x".to_string()), "x");
        assert_eq!(pipe_many(Vec::new())("x".to_string()), "x");
    }

    #[rstest]
    fn borrowed_state_is_allowed() {
        let offset = 10;
        let add_offset: Endomorphism<'_, i32> = Box::new(|x| x + offset);
        assert_eq!(pipe_many([add_offset])(1), 11);
    }
}
