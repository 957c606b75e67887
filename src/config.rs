use std::time::Duration;

use tonic::transport::Uri;

use crate::error::{AdminError, AdminResult};

/// Address of the proxy control API when nothing else is given.
pub const DEFAULT_ADDRESS: &str = "localhost:8080";

/// Deadline for a single call, including connection setup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host:port` or `http://host:port`
    pub address: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        ClientConfig {
            address: address.into(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Resolve the configured address into a plaintext `http://` URI.
    ///
    /// A bare `host:port` gets the `http` scheme. Any other scheme is
    /// rejected since the channel is always unauthenticated and unencrypted.
    pub fn target(&self) -> AdminResult<Uri> {
        let address = self.address.trim();
        let candidate = if address.contains("://") {
            address.to_string()
        } else {
            format!("http://{}", address)
        };

        let uri: Uri = candidate
            .parse()
            .map_err(|e| AdminError::transport(format!("invalid address {:?}: {}", self.address, e)))?;

        match uri.scheme_str() {
            Some("http") => {}
            Some(other) => {
                return Err(AdminError::transport(format!(
                    "unsupported scheme {:?}, only plaintext http is available",
                    other
                )))
            }
            None => return Err(AdminError::transport(format!("invalid address {:?}", self.address))),
        }

        if uri.host().map_or(true, str::is_empty) {
            return Err(AdminError::transport(format!(
                "address {:?} has no host",
                self.address
            )));
        }

        if uri.port().is_some() && uri.port_u16().is_none() {
            return Err(AdminError::transport(format!(
                "address {:?} has an invalid port",
                self.address
            )));
        }

        if !matches!(uri.path(), "" | "/") || uri.query().is_some() {
            return Err(AdminError::transport(format!(
                "address {:?} must not carry a path or query",
                self.address
            )));
        }

        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_local_proxy() {
        let config = ClientConfig::default();
        assert_eq!(config.address, "localhost:8080");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        let uri = config.target().unwrap();
        assert_eq!(uri.scheme_str(), Some("http"));
        assert_eq!(uri.host(), Some("localhost"));
        assert_eq!(uri.port_u16(), Some(8080));
    }

    #[test]
    fn test_explicit_http_scheme_is_kept() {
        let uri = ClientConfig::new("http://127.0.0.1:9000").target().unwrap();
        assert_eq!(uri.host(), Some("127.0.0.1"));
        assert_eq!(uri.port_u16(), Some(9000));
    }

    #[test]
    fn test_tls_scheme_rejected() {
        let err = ClientConfig::new("https://localhost:8080").target().unwrap_err();
        assert!(matches!(err, AdminError::Transport(_)));
    }

    #[test]
    fn test_malformed_address_rejected() {
        let err = ClientConfig::new("local host:8080").target().unwrap_err();
        assert!(matches!(err, AdminError::Transport(_)));

        let err = ClientConfig::new("").target().unwrap_err();
        assert!(matches!(err, AdminError::Transport(_)));

        let err = ClientConfig::new("localhost:99999").target().unwrap_err();
        assert!(matches!(err, AdminError::Transport(_)));

        let err = ClientConfig::new("localhost:8080/some/path").target().unwrap_err();
        assert!(matches!(err, AdminError::Transport(_)));

        let err = ClientConfig::new("http://localhost:8080/?debug=1").target().unwrap_err();
        assert!(matches!(err, AdminError::Transport(_)));

        let uri = ClientConfig::new("http://localhost:8080/").target().unwrap();
        assert_eq!(uri.port_u16(), Some(8080));
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("localhost:1")
            .with_timeout(Duration::from_millis(250))
            .with_connect_timeout(Duration::from_millis(100));
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.connect_timeout, Duration::from_millis(100));
    }
}
