use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use model::entities::hero;
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, info, warn};

/// What a migration run left behind.
#[derive(Debug, PartialEq, Eq)]
pub struct SchemaReport {
    /// Migrations applied by this run
    pub applied: usize,
    /// Heroes available for match logging
    pub heroes: usize,
    pub default_hero: Option<String>,
}

/// Applies all pending migrations, including the hero list seed.
pub async fn init_database(database_url: &str) -> Result<()> {
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", database_url))?;

    let report = migrate(&db).await?;
    info!(
        "Applied {} migrations, {} heroes available",
        report.applied, report.heroes
    );
    match &report.default_hero {
        Some(name) => info!("Default hero is {}", name),
        None => warn!("No default hero is flagged, match logging has no preselection"),
    }
    Ok(())
}

pub async fn migrate(db: &DatabaseConnection) -> Result<SchemaReport> {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .context("Failed to read migration status")?;
    for migration in &pending {
        debug!("Pending migration {}", migration.name());
    }

    Migrator::up(db, None)
        .await
        .context("Failed to run database migrations")?;

    let heroes = hero::Entity::all_by_name(db)
        .await
        .context("Failed to load the hero list")?;

    Ok(SchemaReport {
        applied: pending.len(),
        heroes: heroes.len(),
        default_hero: heroes
            .into_iter()
            .find(|hero| hero.is_default)
            .map(|hero| hero.name),
    })
}
