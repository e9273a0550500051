//! Shop identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShopId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ShopIdError {
    /// The input string is empty or whitespace-only.
    #[error("shop id cannot be empty")]
    Empty,
}

/// A shop identifier.
///
/// Shops are free-text identifiers that partition orders; no registry of
/// valid shops exists, so the only constraint is presence. Surrounding
/// whitespace is trimmed on parse.
///
/// ## Examples
///
/// ```
/// use orderdesk_core::ShopId;
///
/// assert!(ShopId::parse("S1").is_ok());
/// assert_eq!(ShopId::parse("  S1  ").unwrap().as_str(), "S1");
///
/// assert!(ShopId::parse("").is_err());
/// assert!(ShopId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    /// Parse a `ShopId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ShopIdError::Empty`] if the input is empty or
    /// whitespace-only after trimming.
    pub fn parse(s: &str) -> Result<Self, ShopIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShopIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the shop id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ShopId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ShopId {
    type Err = ShopIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ShopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with sqlite feature)
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for ShopId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for ShopId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for ShopId {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}
