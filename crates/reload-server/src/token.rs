//! Session token.
//!
//! Change-detection signal for the browser client. Not a credential.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

/// Opaque identifier sent to every reload client.
///
/// Built once when the server starts and shared by every connection, so a
/// different value means the process was restarted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionToken(Arc<str>);

impl SessionToken {
    /// Generate a fresh random token (a hyphenated UUID v4, 36 characters).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string().into())
    }

    /// Wrap an existing value, e.g. a build id or a git revision.
    #[must_use]
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    /// Token as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token as raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
