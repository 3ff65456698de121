//! Session Accessor
//!
//! Bearer-token capability injected into the aggregator. Token issuance and
//! the login/logout lifecycle belong to the collaborator that owns the
//! session; the core only reads the current token.

use parking_lot::RwLock;

/// Opaque bearer token for node API pulls
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens must not land in logs whole; Debug shows a prefix only.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "SessionToken({}...)", prefix)
    }
}

/// Read access to the currently held session token
pub trait SessionAccessor: Send + Sync {
    /// Current token, or `None` when unauthenticated
    fn token(&self) -> Option<SessionToken>;
}

/// In-memory token holder owned by the login/logout collaborator
#[derive(Default)]
pub struct MemorySession {
    token: RwLock<Option<SessionToken>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: SessionToken) {
        *self.token.write() = Some(token);
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

impl SessionAccessor for MemorySession {
    fn token(&self) -> Option<SessionToken> {
        self.token.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_set_and_clear() {
        let session = MemorySession::new();
        assert!(session.token().is_none());

        session.set_token(SessionToken::new("jwt-abc123"));
        assert_eq!(session.token().unwrap().as_str(), "jwt-abc123");

        session.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_token_debug_is_truncated() {
        let token = SessionToken::new("eyJhbG.rest-of-the-secret");
        let debug = format!("{:?}", token);
        assert!(debug.contains("eyJhbG"));
        assert!(!debug.contains("rest-of-the-secret"));
    }
}
