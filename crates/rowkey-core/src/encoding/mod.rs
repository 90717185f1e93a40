//! Typed, order-preserving key encoding.
//!
//! This module turns [`Value`](crate::types::Value)s into
//! [`OrderedByteArray`](crate::types::OrderedByteArray)s whose unsigned byte
//! order matches value order, and back again.
//!
//! # Entry Points
//!
//! - [`TypedCodec`] - encode and decode single values, compose keys, compute
//!   prefix-scan boundaries under the configured policy
//! - [`KeyReader`] - decode the parts of a composite key in sequence
//!
//! # Layouts
//!
//! Each [`TypeTag`](crate::types::TypeTag) has one layout. Numeric tags are
//! fixed-width, big-endian and sign-flipped; text and raw bytes are stored
//! verbatim.
//!
//! # Example
//!
//! ```
//! use rowkey_core::encoding::TypedCodec;
//! use rowkey_core::types::{OrderedByteArray, TypeTag, Value};
//!
//! let codec = TypedCodec::default();
//!
//! let mut keys: Vec<OrderedByteArray> =
//!     [10i64, -10, 0].iter().map(|i| codec.encode(*i).unwrap()).collect();
//! keys.sort();
//!
//! let decoded: Vec<_> = keys.iter().map(|k| codec.decode(TypeTag::Long, k).unwrap()).collect();
//! assert_eq!(decoded, vec![Value::Long(-10), Value::Long(0), Value::Long(10)]);
//! ```

mod codec;
mod reader;
mod sortable;


pub use codec::TypedCodec;
pub use reader::KeyReader;
