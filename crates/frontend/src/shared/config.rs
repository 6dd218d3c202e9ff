//! Client configuration.
//!
//! The API base URL comes from the `CRM_API_URL` environment variable at
//! build time (`CRM_API_URL=https://crm.example.com trunk build`). Without it
//! the client talks to the backend on port 8080 of the host that served it.

use once_cell::sync::OnceCell;

pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8080`
    pub api_base: String,
    /// How long success notices stay on screen
    pub notice_timeout_ms: u32,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let (protocol, hostname) = window_origin();
        Self {
            api_base: resolve_api_base(option_env!("CRM_API_URL"), &protocol, &hostname),
            notice_timeout_ms: option_env!("CRM_NOTICE_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NOTICE_TIMEOUT_MS),
        }
    }
}

static CLIENT_CONFIG: OnceCell<ClientConfig> = OnceCell::new();

/// Installs the configuration for the whole session. The first call wins;
/// later calls return the already installed value.
pub fn init(config: ClientConfig) -> &'static ClientConfig {
    CLIENT_CONFIG.get_or_init(|| config)
}

/// Session configuration, resolved from the environment on first use.
pub fn client_config() -> &'static ClientConfig {
    CLIENT_CONFIG.get_or_init(ClientConfig::from_env)
}

fn window_origin() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return ("http:".to_string(), "localhost".to_string());
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    (protocol, hostname)
}

/// Explicit URL wins (trailing slashes dropped); otherwise
/// `{protocol}//{hostname}:8080`.
pub fn resolve_api_base(explicit: Option<&str>, protocol: &str, hostname: &str) -> String {
    if let Some(url) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    let protocol = if protocol.ends_with(':') {
        protocol.to_string()
    } else {
        format!("{}:", protocol)
    };
    let hostname = if hostname.is_empty() { "localhost" } else { hostname };
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        assert_eq!(
            resolve_api_base(Some("https://crm.example.com/"), "http:", "localhost"),
            "https://crm.example.com"
        );
    }

    #[test]
    fn blank_explicit_url_is_ignored() {
        assert_eq!(
            resolve_api_base(Some("  "), "https:", "crm.local"),
            "https://crm.local:8080"
        );
    }

    #[test]
    fn falls_back_to_window_host() {
        assert_eq!(resolve_api_base(None, "http:", "127.0.0.1"), "http://127.0.0.1:8080");
        assert_eq!(resolve_api_base(None, "http", ""), "http://localhost:8080");
    }
}
