//! Demo configuration parsed from environment variables.

use gqlclient::Credentials;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GRAPHQL_URL: &str = "https://graphql-pokemon.now.sh";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub port: u16,
    pub graphql_url: String,
    pub credentials: Option<Credentials>,
}

impl DemoConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GRAPHQL_URL`: default public Pokémon endpoint
    /// - `GRAPHQL_CREDENTIALS`: `omit`, `same-origin`, or `include`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unparsable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let graphql_url = lookup("GRAPHQL_URL")
            .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let credentials = match lookup("GRAPHQL_CREDENTIALS") {
            Some(raw) => {
                Some(Credentials::parse(&raw).ok_or(ConfigError::Invalid { var: "GRAPHQL_CREDENTIALS", value: raw })?)
            }
            None => None,
        };

        Ok(Self { port, graphql_url, credentials })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
