//! Middleware installed on the application router.

pub(crate) mod development;
pub(crate) mod hot_reload;
