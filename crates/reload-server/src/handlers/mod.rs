//! HTTP request handlers of the demo server.

pub(crate) mod config;
