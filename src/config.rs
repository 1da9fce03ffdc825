use serde::Deserialize;

/// Runtime settings for the server and CLI.
///
/// Sources, lowest priority first: built-in defaults, an optional
/// `trivia.toml` in the working directory, `TRIVIA_*` environment variables.
/// A legacy `DB_PATH` variable (also read from `.env`) wins over all of them.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_sources(
            dotenv::var("DB_PATH").ok(),
            config::Environment::with_prefix("TRIVIA").try_parsing(true),
        )
    }

    fn from_sources(
        legacy_db_path: Option<String>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("trivia").required(false))
            .set_override_option("db_path", legacy_db_path)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn default_db_path() -> String {
    "trivia.db".to_owned()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_used_for_missing_keys() {
        let settings: Settings = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.db_path, "trivia.db");
        assert_eq!(settings.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn file_values_override_defaults() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                "listen_addr = \"127.0.0.1:5000\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.db_path, "trivia.db");
        assert_eq!(settings.listen_addr, "127.0.0.1:5000");
    }

    fn trivia_env(vars: &[(&str, &str)]) -> config::Environment {
        config::Environment::with_prefix("TRIVIA")
            .try_parsing(true)
            .source(Some(
                vars.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ))
    }

    #[test]
    fn prefixed_env_overrides_defaults() {
        let settings = Settings::from_sources(
            None,
            trivia_env(&[
                ("TRIVIA_DB_PATH", "/var/lib/trivia/env.db"),
                ("TRIVIA_LISTEN_ADDR", "127.0.0.1:9000"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.db_path, "/var/lib/trivia/env.db");
        assert_eq!(settings.listen_addr, "127.0.0.1:9000");
    }

    #[test]
    fn legacy_db_path_wins_over_prefixed_env() {
        let settings = Settings::from_sources(
            Some("legacy.db".to_owned()),
            trivia_env(&[
                ("TRIVIA_DB_PATH", "/var/lib/trivia/env.db"),
                ("TRIVIA_LISTEN_ADDR", "127.0.0.1:9000"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.db_path, "legacy.db");
        assert_eq!(settings.listen_addr, "127.0.0.1:9000");
    }

    #[test]
    fn load_without_overrides_uses_defaults() {
        let settings = Settings::from_sources(None, trivia_env(&[])).unwrap();
        assert_eq!(settings.db_path, "trivia.db");
    }
}
