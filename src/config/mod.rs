//! Configuration management for the server binary

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_port() -> u16 {
    8080
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// Get config directory (ADMIN_CONSOLE_CONFIG_DIR or current directory)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("ADMIN_CONSOLE_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("bind", default_bind())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (ADMIN_CONSOLE_PORT, ADMIN_CONSOLE_BIND)
        .add_source(
            ::config::Environment::with_prefix("ADMIN_CONSOLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: ADMIN_CONSOLE_PORT > PORT > config file > default.
    // Unparseable values are skipped rather than failing start-up.
    if let Ok(port) = std::env::var("ADMIN_CONSOLE_PORT") {
        match port.parse::<u16>() {
            Ok(port_num) => builder = builder.set_override("port", port_num as i64)?,
            Err(_) => {
                tracing::warn!("Ignoring invalid ADMIN_CONSOLE_PORT value: {}", port);
                builder = builder.set_override("port", default_port() as i64)?;
            }
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const NO_CONFIG_DIR: &str = "/tmp/admin-console-test-nonexistent";

    fn clear_env() {
        env::remove_var("ADMIN_CONSOLE_PORT");
        env::remove_var("ADMIN_CONSOLE_BIND");
        env::remove_var("PORT");
        env::remove_var("ADMIN_CONSOLE_CONFIG_DIR");
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        env::set_var("ADMIN_CONSOLE_CONFIG_DIR", NO_CONFIG_DIR);

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.bind, "0.0.0.0");
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        env::set_var("PORT", "9100");
        env::set_var("ADMIN_CONSOLE_CONFIG_DIR", NO_CONFIG_DIR);

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9100);
    }

    #[test]
    #[serial]
    fn test_prefixed_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("ADMIN_CONSOLE_PORT", "9200");
        env::set_var("PORT", "9100");
        env::set_var("ADMIN_CONSOLE_CONFIG_DIR", NO_CONFIG_DIR);

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9200);
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        clear_env();
        env::set_var("ADMIN_CONSOLE_PORT", "not-a-port");
        env::set_var("ADMIN_CONSOLE_CONFIG_DIR", NO_CONFIG_DIR);

        let config = load_config().expect("invalid port should not fail loading");
        clear_env();

        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_bind_env_override() {
        clear_env();
        env::set_var("ADMIN_CONSOLE_BIND", "127.0.0.1");
        env::set_var("ADMIN_CONSOLE_CONFIG_DIR", NO_CONFIG_DIR);

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.bind, "127.0.0.1");
    }

    #[test]
    #[serial]
    fn test_config_file_is_read() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 7000\nbind = \"127.0.0.1\"\n",
        )
        .expect("write config");
        env::set_var("ADMIN_CONSOLE_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 7000);
        assert_eq!(config.bind, "127.0.0.1");
    }

    #[test]
    #[serial]
    fn test_env_overrides_config_file() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("config.toml"), "port = 7000\n").expect("write config");
        env::set_var("ADMIN_CONSOLE_CONFIG_DIR", dir.path());
        env::set_var("PORT", "7001");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 7001);
    }
}
