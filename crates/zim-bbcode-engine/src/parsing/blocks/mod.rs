//! # Block Rules
//!
//! Line-anchored rules. These run before the inline rules and each consumes
//! whole lines of the working text.
//!
//! ## Modules
//!
//! - **`metadata`**: strips the page header (`Content-Type:` and friends) and
//!   returns it as extracted metadata
//! - **`heading`**: `== Title ==` lines, font size scaled by level
//! - **`list`**: tab-indented ordered/unordered/checkbox lists
//! - **`table`**: pipe tables with an optional header separator row
//!
//! ## Stateful Rules
//!
//! `list` and `table` decide what to emit for a line by looking at the line
//! that follows. Both first collect every matching line into an ordered
//! sequence and then walk it by index, so "the next line" is an explicit
//! lookup rather than a property of the regex iterator. A following line
//! only continues the block when it starts exactly where the previous match
//! ended.

pub mod heading;
pub mod list;
pub mod metadata;
pub mod table;

pub use heading::HeadingRule;
pub use list::{ListKind, ListRule};
pub use metadata::MetadataRemover;
pub use table::TableRule;
