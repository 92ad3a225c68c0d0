use chrono::NaiveDate;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let snapshot_path = match env::var("APP_CATALOG_PATH") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyCatalogPath),
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(_) => None,
        };

        let reference_date = match env::var("APP_REFERENCE_DATE") {
            Ok(raw) => Some(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(
                |source| ConfigError::InvalidReferenceDate {
                    value: raw.clone(),
                    source,
                },
            )?),
            Err(_) => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig {
                snapshot_path,
                reference_date,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the catalogs come from and which day counts as "today".
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// JSON snapshot to load instead of the built-in seed catalog.
    pub snapshot_path: Option<PathBuf>,
    pub reference_date: Option<NaiveDate>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyCatalogPath,
    InvalidReferenceDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCatalogPath => {
                write!(f, "APP_CATALOG_PATH must not be blank when set")
            }
            ConfigError::InvalidReferenceDate { value, .. } => {
                write!(f, "APP_REFERENCE_DATE '{value}' must be formatted YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::EmptyCatalogPath => None,
            ConfigError::InvalidReferenceDate { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_CATALOG_PATH");
        env::remove_var("APP_REFERENCE_DATE");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert!(config.catalog.snapshot_path.is_none());
        assert!(config.catalog.reference_date.is_none());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_catalog_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_CATALOG_PATH", " fixtures/catalog.json ");
        env::set_var("APP_REFERENCE_DATE", "2025-01-14");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(
            config.catalog.snapshot_path,
            Some(PathBuf::from("fixtures/catalog.json"))
        );
        assert_eq!(
            config.catalog.reference_date,
            NaiveDate::from_ymd_opt(2025, 1, 14)
        );
    }

    #[test]
    fn rejects_blank_catalog_path_and_bad_dates() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_CATALOG_PATH", "   ");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::EmptyCatalogPath)
        ));

        reset_env();
        env::set_var("APP_REFERENCE_DATE", "14/01/2025");
        let err = AppConfig::load().expect_err("date format rejected");
        reset_env();
        assert!(err.to_string().contains("14/01/2025"));
    }
}
