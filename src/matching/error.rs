//! The error raised when a handler set does not cover a value.

/// A handler set met a value it has no handler for.
///
/// This is always a programmer defect: the fix is to supply a complete
/// handler set, not to recover from the error.
///
/// # Examples
///
/// ```rust
/// use adtkit::matching::UnhandledVariantError;
///
/// let error = UnhandledVariantError::MissingHandler {
///     tag: "none",
///     type_name: "Maybe",
/// };
/// assert_eq!(error.to_string(), "no handler for variant `none` of `Maybe`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnhandledVariantError {
    /// An erased handler table has no entry for the value's tag.
    #[error("no handler for variant `{tag}` of `{type_name}`")]
    MissingHandler {
        /// The tag of the value that could not be dispatched.
        tag: &'static str,
        /// Short name of the matched type.
        type_name: &'static str,
    },

    /// A `match_with` chain ran out of clauses without a default.
    #[error("no clause matched `{value}` and no default was given")]
    NoMatchingClause {
        /// `Debug` rendering of the unmatched value.
        value: String,
    },
}

impl UnhandledVariantError {
    /// The missing tag, when the failure came from a tagged dispatch.
    pub const fn tag(&self) -> Option<&'static str> {
        match self {
            Self::MissingHandler { tag, .. } => Some(*tag),
            Self::NoMatchingClause { .. } => None,
        }
    }
}
