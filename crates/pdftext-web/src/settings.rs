use pdftext_core::DEFAULT_USER_AGENT;
use pdftext_core::config_file::ConfigFile;

pub const DEFAULT_PORT: u16 = 3000;

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    /// Skip the local listener; the hosting environment serves [`crate::router`].
    pub production: bool,
    pub user_agent: String,
}

impl Settings {
    /// Resolve settings: CLI flags > env vars > config file > defaults.
    ///
    /// `env` looks up a variable by name, so callers can pass
    /// `|k| std::env::var(k).ok()` or a fixed map in tests.
    pub fn resolve(
        cli_port: Option<u16>,
        cli_production: bool,
        env: impl Fn(&str) -> Option<String>,
        config: &ConfigFile,
    ) -> Self {
        let server = config.server.clone().unwrap_or_default();
        let fetch = config.fetch.clone().unwrap_or_default();

        let port = cli_port
            .or_else(|| env("PORT").and_then(|v| v.trim().parse().ok()))
            .or(server.port)
            .unwrap_or(DEFAULT_PORT);

        let production = cli_production
            || env("PDFTEXT_PRODUCTION")
                .map(|v| is_truthy(&v))
                .or(server.production)
                .unwrap_or(false);

        let user_agent = env("PDFTEXT_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .or(fetch.user_agent)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Self {
            port,
            production,
            user_agent,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "production"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdftext_core::config_file::{FetchConfig, ServerConfig};
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn file_config() -> ConfigFile {
        ConfigFile {
            server: Some(ServerConfig {
                port: Some(8080),
                production: Some(true),
            }),
            fetch: Some(FetchConfig {
                user_agent: Some("file-agent".into()),
            }),
        }
    }

    #[test]
    fn defaults_when_nothing_set() {
        let s = Settings::resolve(None, false, env_of(&[]), &ConfigFile::default());
        assert_eq!(s.port, DEFAULT_PORT);
        assert!(!s.production);
        assert_eq!(s.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn config_file_over_defaults() {
        let s = Settings::resolve(None, false, env_of(&[]), &file_config());
        assert_eq!(s.port, 8080);
        assert!(s.production);
        assert_eq!(s.user_agent, "file-agent");
    }

    #[test]
    fn env_over_config_file() {
        let env = env_of(&[
            ("PORT", "9000"),
            ("PDFTEXT_PRODUCTION", "false"),
            ("PDFTEXT_USER_AGENT", "env-agent"),
        ]);
        let s = Settings::resolve(None, false, env, &file_config());
        assert_eq!(s.port, 9000);
        assert!(!s.production);
        assert_eq!(s.user_agent, "env-agent");
    }

    #[test]
    fn cli_over_env() {
        let env = env_of(&[("PORT", "9000")]);
        let s = Settings::resolve(Some(7000), true, env, &ConfigFile::default());
        assert_eq!(s.port, 7000);
        assert!(s.production);
    }

    #[test]
    fn unparsable_port_falls_through() {
        let env = env_of(&[("PORT", "eighty")]);
        let s = Settings::resolve(None, false, env, &file_config());
        assert_eq!(s.port, 8080);
    }

    #[test]
    fn production_flag_values() {
        for value in ["1", "true", "YES", "production"] {
            let env = env_of(&[("PDFTEXT_PRODUCTION", value)]);
            let s = Settings::resolve(None, false, env, &ConfigFile::default());
            assert!(s.production, "{value} should enable production");
        }
        let env = env_of(&[("PDFTEXT_PRODUCTION", "0")]);
        assert!(!Settings::resolve(None, false, env, &ConfigFile::default()).production);
    }
}
