use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Whether the connection is wrapped in TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    /// TLS without server certificate validation (self-signed internal hosts).
    Tls,
    Plain,
}

/// Everything needed to reach one database.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub username: String,
    pub password: String,
    /// `host` or `host:port`.
    pub hostname: String,
    pub database: String,
    pub transport: TransportMode,
}

impl ConnectionTarget {
    /// Splits `hostname` into host and port, defaulting the port to 3306.
    pub fn host_and_port(&self) -> Result<(String, u16), String> {
        match self.hostname.rsplit_once(':') {
            // a bare IPv6 address has several colons and no port
            Some((host, _)) if host.contains(':') && !host.ends_with(']') => {
                Ok((self.hostname.clone(), DEFAULT_MYSQL_PORT))
            }
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port in host '{}'", self.hostname))?;
                let host = host.trim_start_matches('[').trim_end_matches(']');
                Ok((host.to_string(), port))
            }
            None => Ok((self.hostname.clone(), DEFAULT_MYSQL_PORT)),
        }
    }
}

impl fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionTarget")
            .field("username", &self.username)
            .field("password", &"***")
            .field("hostname", &self.hostname)
            .field("database", &self.database)
            .field("transport", &self.transport)
            .finish()
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}/{}", self.username, self.hostname, self.database)
    }
}
