//! The tagged-variant shape shared by every matchable value.

use crate::adt::{Either, List, Maybe};

/// A value whose discriminant comes from a fixed, finite set of tags.
///
/// `TAGS` is the full variant universe of the type; `tag` names the variant
/// a particular value is in. User enums get an implementation through
/// `#[derive(Tagged)]` (tags are the snake_case variant names).
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{none, some, Maybe};
/// use adtkit::matching::Tagged;
///
/// assert_eq!(Maybe::<i32>::TAGS, &["none", "some"]);
/// assert_eq!(some(1).tag(), "some");
/// assert_eq!(none::<i32>().tag(), "none");
/// ```
pub trait Tagged {
    /// Short name of the type, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Every tag a value of this type can carry.
    const TAGS: &'static [&'static str];

    /// The tag of this value. Always a member of [`TAGS`](Self::TAGS).
    fn tag(&self) -> &'static str;
}

impl<A> Tagged for Maybe<A> {
    const TYPE_NAME: &'static str = "Maybe";
    const TAGS: &'static [&'static str] = &["none", "some"];

    fn tag(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Some(_) => "some",
        }
    }
}

impl<E, A> Tagged for Either<E, A> {
    const TYPE_NAME: &'static str = "Either";
    const TAGS: &'static [&'static str] = &["left", "right"];

    fn tag(&self) -> &'static str {
        match self {
            Self::Left(_) => "left",
            Self::Right(_) => "right",
        }
    }
}

impl<A> Tagged for List<A> {
    const TYPE_NAME: &'static str = "List";
    const TAGS: &'static [&'static str] = &["nil", "cons"];

    fn tag(&self) -> &'static str {
        if self.is_nil() { "nil" } else { "cons" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adt::{left, right};
    use crate::list;
    use rstest::rstest;

    #[rstest]
    #[case(left::<i32, i32>(1), "left")]
    #[case(right::<i32, i32>(1), "right")]
    fn either_tags(#[case] value: Either<i32, i32>, #[case] expected: &str) {
        assert_eq!(value.tag(), expected);
        assert!(Either::<i32, i32>::TAGS.contains(&value.tag()));
    }

    #[rstest]
    fn list_tags() {
        assert_eq!(List::<i32>::new().tag(), "nil");
        assert_eq!(list![1].tag(), "cons");
        assert_eq!(List::<i32>::TYPE_NAME, "List");
    }
}
