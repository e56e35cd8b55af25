// Proxy: check a blocklist before handing the request to the real connection.

use thiserror::Error;

pub const DEFAULT_BLOCKED_SITES: [&str; 2] = ["facebook.com", "youtube.com"];

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Access denied to {site}")]
pub struct AccessDenied {
    pub site: String,
}

pub trait Internet {
    fn connect_to(&self, site: &str) -> Result<String, AccessDenied>;
}

pub struct RealInternet;

impl Internet for RealInternet {
    fn connect_to(&self, site: &str) -> Result<String, AccessDenied> {
        Ok(format!("Connecting to {}", site))
    }
}

pub struct ProxyInternet {
    inner: RealInternet,
    blocked_sites: Vec<String>,
}

impl ProxyInternet {
    pub fn new() -> Self {
        Self::with_blocklist(DEFAULT_BLOCKED_SITES.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_blocklist(blocked_sites: Vec<String>) -> Self {
        Self {
            inner: RealInternet,
            blocked_sites,
        }
    }

    pub fn is_blocked(&self, site: &str) -> bool {
        self.blocked_sites.iter().any(|blocked| blocked == site)
    }
}

impl Default for ProxyInternet {
    fn default() -> Self {
        Self::new()
    }
}

impl Internet for ProxyInternet {
    fn connect_to(&self, site: &str) -> Result<String, AccessDenied> {
        if self.is_blocked(site) {
            tracing::debug!(site, "proxy refused connection");
            return Err(AccessDenied {
                site: site.to_string(),
            });
        }
        self.inner.connect_to(site)
    }
}

pub fn demo(blocked_sites: &[String]) -> Vec<String> {
    let proxy = ProxyInternet::with_blocklist(blocked_sites.to_vec());
    let internet: Box<dyn Internet> = Box::new(proxy);
    ["google.com", "facebook.com"]
        .iter()
        .map(|site| match internet.connect_to(site) {
            Ok(line) => line,
            Err(denied) => denied.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logs_at(level: Level, f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_allowed_site_is_forwarded() {
        let proxy = ProxyInternet::new();
        assert_eq!(
            proxy.connect_to("google.com"),
            Ok("Connecting to google.com".to_string())
        );
    }

    #[test]
    fn test_blocked_site_is_denied() {
        let proxy = ProxyInternet::new();
        let err = proxy.connect_to("youtube.com").unwrap_err();
        assert_eq!(err.site, "youtube.com");
        assert_eq!(err.to_string(), "Access denied to youtube.com");
    }

    #[test]
    fn test_blocklist_is_exact_match() {
        let proxy = ProxyInternet::new();
        assert!(proxy.is_blocked("facebook.com"));
        assert!(!proxy.is_blocked("m.facebook.com"));
        assert!(!proxy.is_blocked("FACEBOOK.COM"));
    }

    #[test]
    fn test_custom_blocklist() {
        let proxy = ProxyInternet::with_blocklist(vec!["example.org".to_string()]);
        assert!(proxy.connect_to("example.org").is_err());
        assert!(proxy.connect_to("facebook.com").is_ok());
    }

    #[test]
    fn test_demo_lines() {
        let blocked: Vec<String> = DEFAULT_BLOCKED_SITES.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            demo(&blocked),
            vec!["Connecting to google.com", "Access denied to facebook.com"]
        );
    }

    #[test]
    fn test_refusal_logged_at_debug_only() {
        let proxy = ProxyInternet::new();

        let info = logs_at(Level::INFO, || {
            let _ = proxy.connect_to("facebook.com");
        });
        assert!(!info.contains("proxy refused connection"));

        let debug = logs_at(Level::DEBUG, || {
            let _ = proxy.connect_to("facebook.com");
        });
        assert!(debug.contains("proxy refused connection"));
        assert!(debug.contains("facebook.com"));
    }
}
