use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealweek_audit::AuditConfig;
use mealweek_store::{StoreConfig, StoreKind};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_macro_tolerance")]
    pub macro_tolerance: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            macro_tolerance: default_macro_tolerance(),
        }
    }
}

fn default_macro_tolerance() -> f64 {
    mealweek_mealplan::DEFAULT_MACRO_TOLERANCE
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWEEK__STORE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("store.kind", "memory")?
            .set_default("store.url", "sqlite:mealweek.db")?
            .set_default("store.max_connections", 5)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWEEK")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy variable without prefix
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("store.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.store.max_connections < 1 {
            return Err("store max_connections must be at least 1".to_string());
        }
        if self.store.kind == StoreKind::Sqlite && self.store.url.trim().is_empty() {
            return Err("store url is required for the sqlite store".to_string());
        }

        for (name, value) in [
            ("planner.macro_tolerance", self.planner.macro_tolerance),
            ("audit.kcal_tolerance", self.audit.kcal_tolerance),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(format!("{name} must be in (0, 1], got {value}"));
            }
        }

        if self.audit.max_weekly_repetitions < 1 {
            return Err("audit max_weekly_repetitions must be at least 1".to_string());
        }

        Ok(())
    }
}
