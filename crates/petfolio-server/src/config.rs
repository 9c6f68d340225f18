//! Server configuration.

use clap::ValueEnum;

/// Environment variable controlling the runtime environment.
pub const ENVIRONMENT_VAR: &str = "PETFOLIO_ENVIRONMENT";

/// Runtime environment for the server.
///
/// Controls exposure of the API documentation endpoints: they are only
/// registered when the environment is [`Environment::Development`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    /// Local development environment (documentation exposed).
    Development,
    /// Production environment (documentation hidden).
    #[default]
    Production,
}

impl Environment {
    /// Returns true when the environment is development.
    #[must_use]
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Reads the environment from `PETFOLIO_ENVIRONMENT`.
    ///
    /// Matching is case-insensitive; `development` and `dev` select the
    /// development environment. Unset or unrecognized values fall back to
    /// production, with a warning for unrecognized ones.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "development" | "dev" => Self::Development,
                "production" | "prod" | "" => Self::Production,
                other => {
                    tracing::warn!(
                        value = other,
                        "Unrecognized {} value; assuming production",
                        ENVIRONMENT_VAR
                    );
                    Self::Production
                }
            },
            Err(_) => Self::Production,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "Development"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

/// Server configuration assembled from CLI arguments and the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Runtime environment.
    pub environment: Environment,
    /// Port to listen on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_production() {
        assert_eq!(Environment::default(), Environment::Production);
        assert!(!Environment::Production.is_development());
        assert!(Environment::Development.is_development());
    }

    #[test]
    fn display_names() {
        assert_eq!(Environment::Development.to_string(), "Development");
        assert_eq!(Environment::Production.to_string(), "Production");
    }
}
