//! # Inline Rules
//!
//! Span-level markup that never crosses block structure.
//!
//! ## Modules
//!
//! - **`kinds`**: `InlineKind` owns the delimiters, pattern and output tag of
//!   every plain substitution (bold, italic, strikethrough, verbatim, marked,
//!   subscript, superscript)
//! - **`rule`**: `InlineRule`, a single global substitution driven by a kind
//! - **`link`**: `[[target|display]]` wiki links
//! - **`image`**: `{{path}}` embedded images, resolved against the root path
//!
//! Delimiters are matched non-greedily, so the first closing delimiter ends a
//! span. Nesting the same delimiter inside itself is not supported.

pub mod image;
pub mod kinds;
pub mod link;
pub mod rule;

pub use image::ImageRule;
pub use kinds::InlineKind;
pub use link::LinkRule;
pub use rule::InlineRule;
