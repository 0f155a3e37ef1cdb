use anyhow::Result;
use tracing::{debug, info, trace};

use super::{init_database, serve};
use crate::config::AppConfig;

pub async fn migrate_and_serve(config: &AppConfig) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");

    // Fail before touching the schema
    config.validate_for_serving()?;

    init_database(&config.database_url).await?;
    debug!("Database is up to date, starting server");

    serve(config).await
}
