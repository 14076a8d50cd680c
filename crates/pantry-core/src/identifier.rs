use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt::Display;
use uuid::Uuid;

/// An opaque identifier naming a domain entity (recipe, timer, list item).
///
/// Identifiers handed out by the allocator are never empty. Generated
/// identifiers may carry a caller-supplied prefix which is concatenated
/// verbatim in front of the generated body, without a separator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(SmolStr);

impl Identifier {
    /// Creates a new `Identifier` after validating the input.
    ///
    /// The value is taken as-is; it is rejected only when it is empty or
    /// consists solely of whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(CoreError::EmptyIdentifier);
        }
        Ok(Self(SmolStr::new(value)))
    }

    /// Creates an `Identifier` without validation.
    ///
    /// Use this only for values produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce non-empty output).
    pub fn new_unchecked(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value.as_ref()))
    }

    /// Concatenates `prefix` and `body` with no separator in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use pantry_core::Identifier;
    ///
    /// let body = Identifier::new("7f3a").unwrap();
    /// assert_eq!(Identifier::prefixed("recipe-", &body).as_str(), "recipe-7f3a");
    /// assert_eq!(Identifier::prefixed("", &body).as_str(), "7f3a");
    /// ```
    pub fn prefixed(prefix: &str, body: &Identifier) -> Self {
        if prefix.is_empty() {
            return body.clone();
        }
        let mut value = String::with_capacity(prefix.len() + body.len());
        value.push_str(prefix);
        value.push_str(body.as_str());
        Self(SmolStr::new(value))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the identifier in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Identifier").field(&self.0).finish()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0.into()
    }
}

impl From<Uuid> for Identifier {
    /// Renders the canonical lowercase hyphenated form, e.g.
    /// `67e55044-10b1-426f-9247-bb680e5fe0c8`.
    fn from(val: Uuid) -> Self {
        let mut buf = Uuid::encode_buffer();
        Self(SmolStr::new(val.hyphenated().encode_lower(&mut buf)))
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Identifier::new(&s).map_err(serde::de::Error::custom)
    }
}
