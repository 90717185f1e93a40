//! Column locators: `family:qualifier` pairs.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, CodecResult};

/// A column within a row, identified by family and optional qualifier.
///
/// An empty qualifier (`"cf:"`) is distinct from an absent one (`"cf"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnLocator {
    /// Column family bytes. Never empty.
    pub family: Vec<u8>,
    /// Qualifier bytes, or `None` for a family-only locator.
    pub qualifier: Option<Vec<u8>>,
}

/// The accepted shapes of a column specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    /// A `"family:qualifier"` or `"family"` token.
    Token(String),
    /// A family and qualifier given separately. `None` names the whole family.
    Pair(Vec<u8>, Option<Vec<u8>>),
    /// A list of parts; only two-element lists are valid.
    Parts(Vec<Vec<u8>>),
}

impl From<&str> for ColumnSpec {
    fn from(token: &str) -> Self {
        Self::Token(token.to_owned())
    }
}

impl From<String> for ColumnSpec {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<(&str, &str)> for ColumnSpec {
    fn from((family, qualifier): (&str, &str)) -> Self {
        Self::Pair(family.as_bytes().to_vec(), Some(qualifier.as_bytes().to_vec()))
    }
}

impl From<(&str, Option<&str>)> for ColumnSpec {
    fn from((family, qualifier): (&str, Option<&str>)) -> Self {
        Self::Pair(family.as_bytes().to_vec(), qualifier.map(|q| q.as_bytes().to_vec()))
    }
}

impl From<(&[u8], &[u8])> for ColumnSpec {
    fn from((family, qualifier): (&[u8], &[u8])) -> Self {
        Self::Pair(family.to_vec(), Some(qualifier.to_vec()))
    }
}

impl From<(Vec<u8>, Vec<u8>)> for ColumnSpec {
    fn from((family, qualifier): (Vec<u8>, Vec<u8>)) -> Self {
        Self::Pair(family, Some(qualifier))
    }
}

impl From<(Vec<u8>, Option<Vec<u8>>)> for ColumnSpec {
    fn from((family, qualifier): (Vec<u8>, Option<Vec<u8>>)) -> Self {
        Self::Pair(family, qualifier)
    }
}

impl From<Vec<Vec<u8>>> for ColumnSpec {
    fn from(parts: Vec<Vec<u8>>) -> Self {
        Self::Parts(parts)
    }
}

impl ColumnLocator {
    /// A family-only locator.
    pub fn family(family: impl Into<Vec<u8>>) -> Self {
        Self { family: family.into(), qualifier: None }
    }

    /// A locator with both family and qualifier.
    pub fn new(family: impl Into<Vec<u8>>, qualifier: impl Into<Vec<u8>>) -> Self {
        Self { family: family.into(), qualifier: Some(qualifier.into()) }
    }

    /// Parse a column specifier.
    ///
    /// Tokens split on the first colon only, so qualifiers may contain colons.
    ///
    /// ```
    /// use rowkey_core::ColumnLocator;
    ///
    /// let col = ColumnLocator::parse("cf1:col1").unwrap();
    /// assert_eq!(col.family, b"cf1");
    /// assert_eq!(col.qualifier.as_deref(), Some(&b"col1"[..]));
    ///
    /// let family_only = ColumnLocator::parse("cf1").unwrap();
    /// assert_eq!(family_only.qualifier, None);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidColumnName`] if the family is empty or a
    /// parts list does not have exactly two elements.
    pub fn parse(spec: impl Into<ColumnSpec>) -> CodecResult<Self> {
        let locator = match spec.into() {
            ColumnSpec::Token(token) => match token.split_once(':') {
                Some((family, qualifier)) => Self::new(family, qualifier),
                None => Self::family(token),
            },
            ColumnSpec::Pair(family, qualifier) => Self { family, qualifier },
            ColumnSpec::Parts(parts) => {
                let [family, qualifier]: [Vec<u8>; 2] = parts.try_into().map_err(
                    |parts: Vec<Vec<u8>>| {
                        CodecError::InvalidColumnName(format!(
                            "expected [family, qualifier], got {} parts",
                            parts.len()
                        ))
                    },
                )?;
                Self::new(family, qualifier)
            }
        };

        if locator.family.is_empty() {
            return Err(CodecError::InvalidColumnName(format!("empty column family in {locator}")));
        }
        Ok(locator)
    }

    /// Returns `true` if the locator names a whole family.
    #[inline]
    #[must_use]
    pub const fn is_family_only(&self) -> bool {
        self.qualifier.is_none()
    }
}

impl FromStr for ColumnLocator {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColumnLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.family))?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, ":{}", String::from_utf8_lossy(qualifier))?;
        }
        Ok(())
    }
}
