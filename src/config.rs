use anyhow::{bail, Context, Result};
use sea_orm::{ConnectOptions, Database};
use serde::Deserialize;
use tracing::{debug, info};

use crate::auth::AuthService;
use crate::schemas::AppState;

/// Name of the optional configuration file, looked up in the working directory.
const CONFIG_FILE: &str = "matchlog";
/// Prefix of the environment variables overriding file settings.
const ENV_PREFIX: &str = "MATCHLOG";
/// Cost range accepted by bcrypt.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Runtime settings.
///
/// Loaded from built-in defaults, then `matchlog.toml`, then `MATCHLOG_*`
/// environment variables. CLI flags override the result.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    /// HS256 signing secret for access tokens. Required to serve.
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("database_url", "sqlite://matchlog.db?mode=rwc")?
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("jwt_secret", "")?
            .set_default("token_ttl_minutes", 60 * 24)?
            .set_default("bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        debug!("Configuration loaded: database_url={}, bind_address={}", config.database_url, config.bind_address);
        Ok(config)
    }

    /// Checks the settings the web server cannot run without.
    pub fn validate_for_serving(&self) -> Result<()> {
        if self.jwt_secret.is_empty() {
            bail!("JWT secret is required (set MATCHLOG_JWT_SECRET)");
        }
        if self.token_ttl_minutes <= 0 {
            bail!("token_ttl_minutes must be positive, got {}", self.token_ttl_minutes);
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            bail!(
                "bcrypt_cost must be between {} and {}, got {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end(),
                self.bcrypt_cost
            );
        }
        Ok(())
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(&self.jwt_secret, self.token_ttl_minutes, self.bcrypt_cost)
    }
}

/// Connects to the database at `database_url` and builds the shared state.
pub async fn initialize_app_state_with_url(config: &AppConfig, database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", database_url))?;

    Ok(AppState::new(db, config.auth_service()))
}
