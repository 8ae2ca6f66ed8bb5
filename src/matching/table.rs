//! Handler tables keyed by tag, for callers that build their handler set at
//! runtime.
//!
//! A [`HandlerTable`] erases the per-variant handler types: every handler
//! receives the whole value and the table maps tags to handlers. The compiler
//! can no longer prove coverage, so [`HandlerTable::dispatch`] reports a
//! value whose tag has no handler as [`UnhandledVariantError::MissingHandler`].
//!
//! Handlers are `Fn`, so one table can dispatch any number of values.

use std::collections::HashMap;
use std::fmt;

use super::error::UnhandledVariantError;
use super::tagged::Tagged;

type Handler<'a, T, B> = Box<dyn Fn(T) -> B + 'a>;

/// A runtime mapping from tags of `T` to handlers producing `B`.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{none, some, Maybe};
/// use adtkit::matching::{HandlerTable, UnhandledVariantError};
///
/// let table = HandlerTable::new()
///     .on("some", |value: Maybe<i32>| value.get_or_else(0) * 2);
/// assert_eq!(table.missing_tags(), vec!["none"]);
/// assert_eq!(table.dispatch(some(21)), Ok(42));
/// assert_eq!(table.dispatch(some(4)), Ok(8));
/// assert_eq!(
///     table.dispatch(none()),
///     Err(UnhandledVariantError::MissingHandler { tag: "none", type_name: "Maybe" })
/// );
/// ```
pub struct HandlerTable<'a, T, B> {
    handlers: HashMap<&'static str, Handler<'a, T, B>>,
}

impl<'a, T, B> HandlerTable<'a, T, B>
where
    T: Tagged,
{
    /// Creates a table with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `tag`, replacing any earlier handler.
    ///
    /// A tag outside `T::TAGS` is accepted but can never be dispatched to.
    #[must_use]
    pub fn on<F>(mut self, tag: &'static str, handler: F) -> Self
    where
        F: Fn(T) -> B + 'a,
    {
        if !T::TAGS.contains(&tag) {
            tracing::warn!(
                tag,
                type_name = T::TYPE_NAME,
                "handler registered for a tag outside the variant universe"
            );
        }
        if self.handlers.insert(tag, Box::new(handler)).is_some() {
            tracing::debug!(tag, type_name = T::TYPE_NAME, "handler replaced");
        }
        self
    }

    /// Tags of `T` that have no handler, in declaration order.
    pub fn missing_tags(&self) -> Vec<&'static str> {
        T::TAGS
            .iter()
            .copied()
            .filter(|tag| !self.handlers.contains_key(tag))
            .collect()
    }

    /// Returns `true` when every tag of `T` has a handler.
    pub fn is_exhaustive(&self) -> bool {
        T::TAGS.iter().all(|tag| self.handlers.contains_key(tag))
    }

    /// Runs the handler registered for `value`'s tag.
    ///
    /// # Errors
    ///
    /// Returns [`UnhandledVariantError::MissingHandler`] when no handler is
    /// registered for the tag of `value`.
    pub fn dispatch(&self, value: T) -> Result<B, UnhandledVariantError> {
        let tag = value.tag();
        match self.handlers.get(tag) {
            Some(handler) => Ok(handler(value)),
            None => {
                tracing::error!(tag, type_name = T::TYPE_NAME, "no handler for variant");
                Err(UnhandledVariantError::MissingHandler {
                    tag,
                    type_name: T::TYPE_NAME,
                })
            }
        }
    }
}

impl<T, B> Default for HandlerTable<'_, T, B>
where
    T: Tagged,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> fmt::Debug for HandlerTable<'_, T, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.handlers.keys().copied().collect();
        tags.sort_unstable();
        formatter
            .debug_struct("HandlerTable")
            .field("tags", &tags)
            .finish()
    }
}
