//! Derive macros for adtkit.
//!
//! # Available Derive Macros
//!
//! - [`Tagged`]: implements `adtkit::matching::Tagged` for an enum, so its
//!   values can be dispatched through a `HandlerTable` or matched by tag
//!
//! # Example
//!
//! ```rust,ignore
//! use adtkit::matching::Tagged;
//!
//! #[derive(Tagged)]
//! enum Event {
//!     KeyPress(char),
//!     MouseClick { x: i32, y: i32 },
//!     #[tagged(rename = "quit")]
//!     Shutdown,
//! }
//!
//! assert_eq!(Event::TAGS, &["key_press", "mouse_click", "quit"]);
//! assert_eq!(Event::KeyPress('a').tag(), "key_press");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod tagged;

use proc_macro::TokenStream;

/// Derive macro implementing `adtkit::matching::Tagged` for an enum.
///
/// Each variant's tag is its name in snake_case (`KeyPress` becomes
/// `key_press`). `TAGS` lists the tags in declaration order and
/// `TYPE_NAME` is the enum's identifier.
///
/// # Attributes
///
/// - `#[tagged(rename = "...")]` on a variant overrides its tag.
///
/// Two variants resolving to the same tag are rejected at compile time, as
/// are structs and unions.
///
/// # Example
///
/// ```rust,ignore
/// use adtkit::matching::{HandlerTable, Tagged};
///
/// #[derive(Debug, Tagged)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
/// }
///
/// let table = HandlerTable::new()
///     .on("circle", |_: Shape| "round")
///     .on("rectangle", |_: Shape| "square");
/// assert_eq!(table.dispatch(Shape::Circle(1.0)), Ok("round"));
/// ```
#[proc_macro_derive(Tagged, attributes(tagged))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    tagged::derive_tagged_impl(input)
}
