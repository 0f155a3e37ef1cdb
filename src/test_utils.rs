#[cfg(test)]
pub mod test_utils {
    use crate::auth::AuthService;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::http::HeaderValue;
    use axum::Router;
    use axum_test::TestServer;
    use common::ApiResponse;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
    use serde_json::{json, Value};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_SECRET: &str = "test-secret";

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Auth service with the cheapest bcrypt cost, tests hash a lot of passwords
    pub fn test_auth_service() -> AuthService {
        AuthService::new(TEST_SECRET, 60, 4)
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        AppState::new(setup_test_db().await, test_auth_service())
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }

    pub async fn setup_test_server() -> TestServer {
        TestServer::new(setup_test_app().await).expect("Failed to start test server")
    }

    /// Signs up `username` and returns its account id.
    pub async fn signup(server: &TestServer, username: &str, password: &str) -> i64 {
        let response = server
            .post("/api/v1/auth/signup")
            .json(&json!({ "username": username, "password": password }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: ApiResponse<Value> = response.json();
        body.data["id"].as_i64().expect("account id")
    }

    /// Logs in and returns the access token.
    pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
        let response = server
            .post("/api/v1/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .await;
        response.assert_status_ok();

        let body: ApiResponse<Value> = response.json();
        body.data["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }

    /// Signs up and logs in a fresh account, returning its bearer token.
    pub async fn signup_and_login(server: &TestServer, username: &str) -> String {
        signup(server, username, "secret-password").await;
        login(server, username, "secret-password").await
    }

    /// `Authorization` header value for a token.
    pub fn bearer(token: &str) -> HeaderValue {
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
    }
}
