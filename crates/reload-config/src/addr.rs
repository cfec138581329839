//! Listen address parsing.
//!
//! Accepts `host:port`, `[v6]:port` and the short `:port` form, which binds
//! every interface.

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// Host used when the address omits one (`:3000`).
const ANY_HOST: &str = "0.0.0.0";

/// A validated `host:port` pair.
///
/// The host is kept as written so that names like `localhost` are resolved
/// by the listener at bind time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenAddr {
    /// Host name or IP literal (IPv6 keeps its brackets).
    pub host: String,
    /// TCP port, never 0.
    pub port: u16,
}

impl FromStr for ListenAddr {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidAddr {
            addr: s.to_owned(),
            reason: reason.to_owned(),
        };

        let (host, port) = s
            .trim()
            .rsplit_once(':')
            .ok_or_else(|| invalid("expected host:port or :port"))?;

        let port: u16 = port.parse().map_err(|_| invalid("port is not a number"))?;
        if port == 0 {
            return Err(invalid("port cannot be 0"));
        }

        let host = if host.is_empty() { ANY_HOST } else { host };
        if host.contains(':') && !(host.starts_with('[') && host.ends_with(']')) {
            return Err(invalid("IPv6 hosts must be written in brackets"));
        }

        Ok(Self {
            host: host.to_owned(),
            port,
        })
    }
}

impl fmt::Display for ListenAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
