//! Commit identifier
//!
//! Commit ids are opaque strings, usually 40-character hexadecimal SHA-1
//! hashes. They only need to be unique within the working set handed to the
//! layout pass.
//!
//! ## Format
//!
//! - Full: the id as supplied (e.g., "abc123...def")
//! - Short: first 7 characters (e.g., "abc123d")

use serde::{Deserialize, Serialize};

/// Number of characters kept by [`CommitId::to_short_oid`]
pub const SHORT_OID_LENGTH: usize = 7;

/// Identifier of a commit within the working set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id
    ///
    /// # Arguments
    ///
    /// * `id` - non-empty string without whitespace or control characters
    ///
    /// # Returns
    ///
    /// Validated CommitId or error if empty or malformed
    pub fn try_parse(id: impl Into<String>) -> anyhow::Result<Self> {
        let id = id.into();
        if id.is_empty() {
            anyhow::bail!("commit id cannot be empty");
        }
        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("invalid commit id characters: {:?}", id);
        }
        Ok(Self(id))
    }

    /// Get abbreviated form of the commit id
    ///
    /// # Returns
    ///
    /// First 7 characters of the id, or the whole id if it is shorter
    pub fn to_short_oid(&self) -> String {
        self.0.chars().take(SHORT_OID_LENGTH).collect()
    }
}

impl TryFrom<String> for CommitId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl From<CommitId> for String {
    fn from(value: CommitId) -> Self {
        value.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
