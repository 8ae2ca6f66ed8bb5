//! Persistent (immutable) singly-linked list.
//!
//! A [`List`] is either `Nil` or `Cons(head, tail)` where the tail is itself
//! a list. Tails are shared between lists: `cons` is O(1) and never copies,
//! and no node is ever mutated after construction.
//!
//! Traversals (`map`, `flat_map`, folds, equality and drop) are iterative, so
//! very long lists do not exhaust the stack even though the public contract
//! is the recursive `Nil`/`Cons` one.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{cons, nil, List};
//! use adtkit::list;
//!
//! let list = cons(1, cons(2, cons(3, nil())));
//! assert_eq!(list, list![1, 2, 3]);
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended, list![0, 1, 2, 3]);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.prepend(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use super::maybe::Maybe;

struct Node<A> {
    element: A,
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent singly-linked list.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `cons`     | O(1)       |
/// | `head`     | O(1)       |
/// | `tail`     | O(1)       |
/// | `len`      | O(1)       |
/// | `map`      | O(n)       |
/// | `append`   | O(n)       |
/// | `reverse`  | O(n)       |
pub struct List<A> {
    head: Option<ReferenceCounter<Node<A>>>,
    length: usize,
}

/// The empty list.
#[inline]
pub const fn nil<A>() -> List<A> {
    List::new()
}

/// Builds a list from a head element and a tail list.
///
/// The tail is shared, not copied.
#[inline]
pub fn cons<A>(head: A, tail: List<A>) -> List<A> {
    let mut tail = tail;
    let length = tail.length + 1;
    List {
        head: Some(ReferenceCounter::new(Node {
            element: head,
            next: tail.head.take(),
        })),
        length,
    }
}

impl<A> List<A> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: A) -> Self {
        cons(element, Self::new())
    }

    /// Builds a list from a `Vec`, keeping the element order.
    fn build_from_vec(mut elements: Vec<A>) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<A>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Prepends an element, sharing `self` as the tail.
    ///
    /// ```rust
    /// use adtkit::list;
    ///
    /// let tail = list![2, 3];
    /// assert_eq!(tail.prepend(1), list![1, 2, 3]);
    /// assert_eq!(tail, list![2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: A) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` for a non-empty list.
    #[inline]
    pub const fn is_cons(&self) -> bool {
        self.head.is_some()
    }

    /// Same as [`is_nil`](Self::is_nil).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_nil()
    }

    /// Number of elements, cached at construction.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// The first element, if any.
    #[inline]
    pub fn head(&self) -> Maybe<&A> {
        match &self.head {
            Some(node) => Maybe::Some(&node.element),
            None => Maybe::None,
        }
    }

    /// The list without its first element; `Nil` for `Nil`.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Splits the list into its head and tail without copying.
    pub fn uncons(&self) -> Maybe<(&A, Self)> {
        match &self.head {
            Some(node) => Maybe::Some((
                &node.element,
                Self {
                    head: node.next.clone(),
                    length: self.length.saturating_sub(1),
                },
            )),
            None => Maybe::None,
        }
    }

    /// Iterates over references to the elements, head first.
    #[inline]
    pub fn iter(&self) -> ListIterator<'_, A> {
        ListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Folds from the head towards the end.
    ///
    /// ```rust
    /// use adtkit::list;
    ///
    /// let digits = list![1, 2, 3];
    /// assert_eq!(digits.fold_left(0, |acc, d| acc * 10 + d), 123);
    /// ```
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.iter().fold(initial, function)
    }

    /// Folds from the end towards the head.
    ///
    /// ```rust
    /// use adtkit::list;
    ///
    /// let digits = list![1, 2, 3];
    /// assert_eq!(digits.fold_right(0, |d, acc| acc * 10 + d), 321);
    /// ```
    pub fn fold_right<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        let elements: Vec<&A> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }
}

impl<A: Clone> List<A> {
    /// Takes the list apart into an owned head and the shared tail.
    ///
    /// The head is moved out when this list is its only owner and cloned
    /// otherwise.
    pub fn into_uncons(mut self) -> Maybe<(A, Self)> {
        let Some(node) = self.head.take() else {
            return Maybe::None;
        };
        let length = self.length.saturating_sub(1);
        let (element, next) = match ReferenceCounter::try_unwrap(node) {
            Ok(Node { element, next }) => (element, next),
            Err(shared) => (shared.element.clone(), shared.next.clone()),
        };
        Maybe::Some((element, Self { head: next, length }))
    }

    /// Applies `function` to every element, preserving order and length.
    ///
    /// ```rust
    /// use adtkit::list;
    ///
    /// assert_eq!(list![1, 2, 3].map(|x| x * 2), list![2, 4, 6]);
    /// ```
    pub fn map<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> B,
    {
        List::build_from_vec(self.into_iter().map(function).collect())
    }

    /// Maps every element to a list and flattens one level, in order.
    ///
    /// ```rust
    /// use adtkit::list;
    /// use adtkit::adt::List;
    ///
    /// let repeated = list![1, 2].flat_map(|x| list![x, x]);
    /// assert_eq!(repeated, list![1, 1, 2, 2]);
    /// assert_eq!(list![1, 2].flat_map(|_| List::<i32>::new()), list![]);
    /// ```
    pub fn flat_map<B, F>(self, mut function: F) -> List<B>
    where
        B: Clone,
        F: FnMut(A) -> List<B>,
    {
        let mut elements = Vec::with_capacity(self.length);
        for element in self {
            elements.extend(function(element));
        }
        List::build_from_vec(elements)
    }

    /// Concatenates two lists; `other` is shared as the tail of the result.
    ///
    /// ```rust
    /// use adtkit::list;
    ///
    /// assert_eq!(list![1, 2].append(&list![3]), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let prefix: Vec<&A> = self.iter().collect();
        prefix
            .into_iter()
            .rev()
            .fold(other.clone(), |tail, element| cons(element.clone(), tail))
    }

    /// Reverses the list.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| cons(element.clone(), reversed))
    }

    /// Keeps the elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        Self::build_from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }
}

/// Builds a [`List`] from its elements, head first.
///
/// ```rust
/// use adtkit::list;
/// use adtkit::adt::{cons, nil, List};
///
/// assert_eq!(list![1, 2], cons(1, cons(2, nil())));
/// let empty: List<i32> = list![];
/// assert!(empty.is_nil());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::adt::List::new()
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::adt::List<_> as ::core::iter::FromIterator<_>>::from_iter([$($element),+])
    };
}

// =============================================================================
// Drop and Clone
// =============================================================================

impl<A> Drop for List<A> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one at a time; a shared tail stays alive
        // for its other owners.
        let mut next = self.head.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<A> Clone for List<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`List`].
pub struct ListIterator<'a, A> {
    current: Option<&'a ReferenceCounter<Node<A>>>,
    remaining: usize,
}

impl<'a, A> Iterator for ListIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for ListIterator<'_, A> {}

/// An owning iterator over the elements of a [`List`].
///
/// Elements are moved out of nodes this iterator owns exclusively and cloned
/// out of nodes shared with other lists.
pub struct ListIntoIterator<A> {
    list: List<A>,
}

impl<A: Clone> Iterator for ListIntoIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let list = std::mem::take(&mut self.list);
        match list.into_uncons() {
            Maybe::Some((element, rest)) => {
                self.list = rest;
                Some(element)
            }
            Maybe::None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<A: Clone> ExactSizeIterator for ListIntoIterator<A> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Default for List<A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<A: Clone> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = ListIntoIterator<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator { list: self }
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = ListIterator<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: PartialEq> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for List<A> {}

impl<A: Hash> Hash for List<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for List<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for List<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<A> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::build_from_vec)
    }
}
