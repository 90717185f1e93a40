//! Core data types for row key encoding.
//!
//! This module defines the byte arrays that order row keys, the tags and
//! values the codec works with, and column locators.

mod bytes;
mod column;
mod tag;
mod value;

pub use bytes::{Boundary, OrderedByteArray};
pub use column::{ColumnLocator, ColumnSpec};
pub use tag::TypeTag;
pub use value::{TypedValue, Value};
