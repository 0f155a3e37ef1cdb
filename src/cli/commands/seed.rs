use anyhow::{Context, Result};
use model::entities::account;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, EntityTrait, PaginatorTrait, Set};
use tracing::{debug, info, trace};

use crate::auth::AuthService;
use crate::config::AppConfig;

/// Creates the default account unless the database already has one.
pub async fn seed(config: &AppConfig, username: &str, password: &str) -> Result<()> {
    trace!("Entering seed function");
    debug!("Database URL: {}", config.database_url);

    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", config.database_url))?;

    match seed_default_account(&db, &config.auth_service(), username, password).await? {
        Some(created) => info!("Created default account '{}' with ID {}", created.username, created.id),
        None => info!("Accounts already exist, nothing to seed"),
    }
    Ok(())
}

/// Inserts the account when the accounts table is empty. Returns the created
/// account, or `None` when the table already had rows.
pub async fn seed_default_account<C: ConnectionTrait>(
    db: &C,
    auth: &AuthService,
    username: &str,
    password: &str,
) -> Result<Option<account::Model>> {
    let existing = account::Entity::find()
        .count(db)
        .await
        .context("Failed to count accounts")?;
    if existing > 0 {
        debug!("Found {} existing accounts", existing);
        return Ok(None);
    }

    let created = account::ActiveModel {
        username: Set(username.to_string()),
        password_hash: Set(auth.hash_password(password)?),
        ..Default::default()
    }
    .insert(db)
    .await
    .context("Failed to insert default account")?;

    Ok(Some(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{setup_test_db, test_auth_service};

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = setup_test_db().await;
        let auth = test_auth_service();

        let created = seed_default_account(&db, &auth, "admin", "admin")
            .await
            .unwrap()
            .expect("first seed creates the account");
        assert_eq!(created.username, "admin");
        assert!(auth.verify_password("admin", &created.password_hash).unwrap());

        let second = seed_default_account(&db, &auth, "admin", "admin").await.unwrap();
        assert!(second.is_none());
        assert_eq!(account::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_skips_when_other_accounts_exist() {
        let db = setup_test_db().await;
        let auth = test_auth_service();
        seed_default_account(&db, &auth, "alice", "wonderland").await.unwrap();

        let result = seed_default_account(&db, &auth, "admin", "admin").await.unwrap();
        assert!(result.is_none());
        assert!(account::Model::find_by_username(&db, "admin").await.unwrap().is_none());
    }
}
