use std::net::SocketAddr;

use leptos::config::{get_configuration, LeptosOptions};

use healsphere::common::ConfigError;

/// Server settings: the leptos block of Cargo.toml, with `BIND_ADDR` taking
/// precedence over its `site-addr`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;

        let bind_addr = resolve_bind_addr(
            std::env::var("BIND_ADDR").ok(),
            leptos_options.site_addr,
        )?;

        Ok(Self {
            leptos_options,
            bind_addr,
        })
    }
}

fn resolve_bind_addr(
    value: Option<String>,
    default: SocketAddr,
) -> Result<SocketAddr, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value, source }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_addr() -> SocketAddr {
        "127.0.0.1:8080".parse().unwrap()
    }

    #[test]
    fn test_resolve_bind_addr_default_success() {
        assert_eq!(resolve_bind_addr(None, default_addr()).unwrap(), default_addr());
    }

    #[test]
    fn test_resolve_bind_addr_override_success() {
        let addr = resolve_bind_addr(Some("0.0.0.0:3000".into()), default_addr()).unwrap();
        assert_eq!(addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_resolve_bind_addr_fails_on_invalid_value() {
        let err = resolve_bind_addr(Some("localhost".into()), default_addr()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
