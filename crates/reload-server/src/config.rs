//! Middleware configuration.

use std::fmt;
use std::sync::Arc;

use axum::extract::Request;

use crate::token::SessionToken;

/// Supplies the token sent in every reply frame.
pub type IdGenerator = Arc<dyn Fn() -> SessionToken + Send + Sync>;

/// Returns `true` when the reload endpoint should be bypassed for a request.
pub type SkipFn = Arc<dyn Fn(&Request) -> bool + Send + Sync>;

/// Hot reload configuration.
///
/// `Config::default()` generates a new [`SessionToken`] and replies with it
/// for as long as the config (and its clones) lives. Build it once at
/// startup and hand clones to the router.
#[derive(Clone)]
pub struct Config {
    /// Token supplier, called once per reply frame.
    pub id_generator: IdGenerator,
    /// Skip predicate. `None` never skips.
    pub next: Option<SkipFn>,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_token(SessionToken::generate())
    }
}

impl Config {
    /// Config with a freshly generated token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Config that always replies with `token`.
    #[must_use]
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            id_generator: Arc::new(move || token.clone()),
            next: None,
        }
    }

    /// Replace the token supplier.
    #[must_use]
    pub fn id_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn() -> SessionToken + Send + Sync + 'static,
    {
        self.id_generator = Arc::new(generator);
        self
    }

    /// Set the skip predicate.
    #[must_use]
    pub fn next<F>(mut self, skip: F) -> Self
    where
        F: Fn(&Request) -> bool + Send + Sync + 'static,
    {
        self.next = Some(Arc::new(skip));
        self
    }

    /// Current token, as the next reply would carry it.
    ///
    /// Calls the id generator, so a custom generator sees this as one more
    /// generation.
    #[must_use]
    pub fn token(&self) -> SessionToken {
        (self.id_generator)()
    }

    /// Whether the skip predicate bypasses `request`.
    pub(crate) fn should_skip(&self, request: &Request) -> bool {
        self.next.as_ref().is_some_and(|skip| skip(request))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("id_generator", &"<fn>")
            .field("next", &self.next.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn request(path: &str) -> Request {
        axum::http::Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_default_token_is_stable() {
        let config = Config::default();
        let first = config.token();

        assert_eq!(config.token(), first);
        assert_eq!(config.clone().token(), first);
    }

    #[test]
    fn test_rebuilt_config_changes_token() {
        assert_ne!(Config::default().token(), Config::default().token());
    }

    #[test]
    fn test_with_token() {
        let token = SessionToken::new("build-42");
        let config = Config::with_token(token.clone());

        assert_eq!(config.token(), token);
    }

    #[test]
    fn test_custom_id_generator() {
        let config = Config::new().id_generator(|| SessionToken::new("fixed"));

        assert_eq!(config.token().as_str(), "fixed");
    }

    #[test]
    fn test_never_skips_by_default() {
        let config = Config::default();

        assert!(!config.should_skip(&request("/ws/reload")));
    }

    #[test]
    fn test_skip_predicate_sees_request() {
        let config = Config::default().next(|req| req.uri().query() == Some("skip=1"));

        assert!(config.should_skip(&request("/ws/reload?skip=1")));
        assert!(!config.should_skip(&request("/ws/reload")));
    }

    #[test]
    fn test_debug_does_not_call_generator() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = Config::new().id_generator(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            SessionToken::new("abc")
        });

        let debug = format!("{config:?}");

        assert!(debug.contains("next: false"));
        assert!(!debug.contains("abc"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
