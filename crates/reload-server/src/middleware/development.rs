//! Development mode flag.
//!
//! Stores whether the server runs in development mode as a typed request
//! extension, so handlers and templates can decide whether to include the
//! reload script.

use std::convert::Infallible;

use axum::Router;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::Extensions;
use axum::http::request::Parts;
use axum::middleware::{self, Next};
use axum::response::Response;

/// Per-request development flag.
///
/// Also usable as an extractor. Absent means `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DevelopmentMode(pub bool);

/// Store the development flag on `request`.
pub fn set_development_context(request: &mut Request, development: bool) {
    request
        .extensions_mut()
        .insert(DevelopmentMode(development));
}

/// Read the development flag, `false` if it was never set.
pub fn development_context(extensions: &Extensions) -> bool {
    extensions
        .get::<DevelopmentMode>()
        .is_some_and(|mode| mode.0)
}

/// Set the development flag on every request handled by `router`.
pub fn with_development<S>(router: Router<S>, development: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(development, set_development))
}

async fn set_development(
    State(development): State<bool>,
    mut request: Request,
    next: Next,
) -> Response {
    set_development_context(&mut request, development);
    next.run(request).await
}

impl<S> FromRequestParts<S> for DevelopmentMode
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(development_context(&parts.extensions)))
    }
}
