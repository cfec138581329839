//! Browser assets for the reload middleware.
//!
//! The files under `assets/` are compiled into the binary via `rust-embed`
//! and served by `reload-server` under `/static`. In debug builds
//! `rust-embed` reads them from disk, so editing `reload.js` does not
//! require a rebuild.

use std::borrow::Cow;

/// Embedded browser assets.
#[derive(rust_embed::RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Path of the hot reload client script inside the bundle.
pub const RELOAD_SCRIPT: &str = "reload.js";

/// Get an asset by path (relative to the bundle root).
///
/// Returns the file contents if the asset exists, `None` otherwise.
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Iterate all asset paths in the bundle.
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}
