//! Immutable, totally ordered byte arrays used as row keys.
//!
//! [`OrderedByteArray`] compares by unsigned lexicographic byte order, the same
//! order a sorted key-value store applies to its keys. Equality and hashing are
//! pure functions of the bytes, so arrays can key a `HashMap` or `BTreeMap`
//! regardless of how they were built.
//!
//! # Prefix Scans
//!
//! [`OrderedByteArray::successor_of_prefix`] computes the exclusive stop key
//! for "every key starting with this prefix":
//!
//! ```
//! use rowkey_core::{Boundary, OrderedByteArray};
//!
//! let prefix = OrderedByteArray::from("hello");
//! assert_eq!(prefix.successor_of_prefix(), Boundary::Key(OrderedByteArray::from("hellp")));
//!
//! // Nothing sorts after a prefix made only of maximal bytes
//! let max = OrderedByteArray::from(vec![127u8, 127, 127]);
//! assert_eq!(max.successor_of_prefix(), Boundary::Unbounded);
//! ```

use std::fmt;
use std::ops::{Add, Bound, Deref};
use std::sync::Arc;

use crate::config::BoundaryPolicy;

/// An immutable byte sequence ordered by unsigned lexicographic comparison.
///
/// A shorter array that is a strict prefix of a longer one sorts first.
/// Clones share the underlying buffer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderedByteArray(Arc<[u8]>);

/// Upper bound for a prefix scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The smallest key sorting after every key with the prefix (exclusive stop).
    Key(OrderedByteArray),
    /// No such key exists; the scan runs to the end of the keyspace.
    Unbounded,
}

impl Boundary {
    /// Returns the stop key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&OrderedByteArray> {
        match self {
            Self::Key(key) => Some(key),
            Self::Unbounded => None,
        }
    }

    /// Converts into an optional stop key.
    #[must_use]
    pub fn into_option(self) -> Option<OrderedByteArray> {
        match self {
            Self::Key(key) => Some(key),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` if the scan has no upper bound.
    #[inline]
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The boundary as an exclusive range bound over owned bytes.
    #[must_use]
    pub fn to_bound(&self) -> Bound<Vec<u8>> {
        match self {
            Self::Key(key) => Bound::Excluded(key.to_vec()),
            Self::Unbounded => Bound::Unbounded,
        }
    }
}

impl OrderedByteArray {
    /// Create an array from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self(Arc::from(bytes))
    }

    /// An empty array.
    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::from(Vec::<u8>::new()))
    }

    /// Concatenate several arrays into one, in order.
    pub fn concat<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a OrderedByteArray>,
    {
        let mut buf = Vec::new();
        for part in parts {
            buf.extend_from_slice(part.as_bytes());
        }
        Self::new(buf)
    }

    /// The underlying bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Copy the bytes into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Number of bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the array holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `prefix` is a byte prefix of this array.
    #[must_use]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.0.starts_with(prefix.as_ref())
    }

    /// Stop key for a scan over every key starting with this array.
    ///
    /// Uses the default [`BoundaryPolicy`].
    #[must_use]
    pub fn successor_of_prefix(&self) -> Boundary {
        self.successor_of_prefix_with(BoundaryPolicy::default())
    }

    /// Stop key for a scan over every key starting with this array.
    ///
    /// Trailing bytes equal to the policy's maximum byte are dropped and the
    /// new last byte is incremented. If that byte is `0xFF` the increment
    /// carries into the byte before it. An empty prefix, or one with nothing
    /// left to increment, yields [`Boundary::Unbounded`].
    ///
    /// The returned key always sorts after the prefix and after every key
    /// that starts with it.
    #[must_use]
    pub fn successor_of_prefix_with(&self, policy: BoundaryPolicy) -> Boundary {
        let max = policy.max_byte();
        let Some(trimmed) = self.0.iter().rposition(|&b| b != max) else {
            tracing::debug!(prefix = %self, ?policy, "prefix has no upper boundary");
            return Boundary::Unbounded;
        };

        // Older signed-byte stores wrapped 0xFF to 0x00 here, which put the
        // stop key below the prefix. 0xFF now carries instead.
        let Some(last) = self.0[..=trimmed].iter().rposition(|&b| b != u8::MAX) else {
            tracing::debug!(prefix = %self, ?policy, "prefix has no upper boundary");
            return Boundary::Unbounded;
        };
        if last < trimmed {
            tracing::debug!(prefix = %self, carried = trimmed - last, "carried past 0xFF bytes");
        }

        let mut successor = self.0[..=last].to_vec();
        successor[last] += 1;
        Boundary::Key(Self::new(successor))
    }

    /// Range bounds covering every key that starts with this array.
    ///
    /// The start is inclusive at the prefix itself; the stop is the exclusive
    /// [`successor_of_prefix_with`](Self::successor_of_prefix_with) boundary.
    #[must_use]
    pub fn prefix_range(&self, policy: BoundaryPolicy) -> (Bound<Vec<u8>>, Bound<Vec<u8>>) {
        (Bound::Included(self.to_vec()), self.successor_of_prefix_with(policy).to_bound())
    }
}

impl Default for OrderedByteArray {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for OrderedByteArray {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for OrderedByteArray {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for OrderedByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for OrderedByteArray {
    fn from(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }
}

impl<const N: usize> From<[u8; N]> for OrderedByteArray {
    fn from(bytes: [u8; N]) -> Self {
        Self(Arc::from(&bytes[..]))
    }
}

impl From<&str> for OrderedByteArray {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<String> for OrderedByteArray {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<OrderedByteArray> for Vec<u8> {
    fn from(array: OrderedByteArray) -> Self {
        array.to_vec()
    }
}

impl FromIterator<u8> for OrderedByteArray {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a OrderedByteArray {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for &OrderedByteArray {
    type Output = OrderedByteArray;

    fn add(self, rhs: Self) -> OrderedByteArray {
        OrderedByteArray::concat([self, rhs])
    }
}

impl Add for OrderedByteArray {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

/// Printable ASCII verbatim, every other byte as `\xNN`.
impl fmt::Display for OrderedByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            if b.is_ascii_graphic() || b == b' ' {
                if b == b'\\' {
                    f.write_str("\\\\")?;
                } else {
                    write!(f, "{}", char::from(b))?;
                }
            } else {
                write!(f, "\\x{b:02X}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for OrderedByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedByteArray(\"{self}\")")
    }
}
