//! Endpoint assembly for the ECSM REST API.

/// Version prefix shared by every ECSM resource path.
pub const API_PREFIX: &str = "/api/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Location of an ECSM API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub protocol: String,
    pub host: String,
    pub port: String,
}

impl Endpoint {
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port: port.into(),
        }
    }

    /// Full base URL including the API version prefix,
    /// e.g. `http://192.168.31.129:3001/api/v1`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}{}", self.protocol, self.host, self.port, API_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_includes_version_prefix() {
        let ep = Endpoint::new("http", "192.168.31.129", "3001");
        assert_eq!(ep.base_url(), "http://192.168.31.129:3001/api/v1");
    }
}
