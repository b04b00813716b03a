// tests/support/helpers.rs
use std::sync::Arc;

use quill_core::application::dto::AuthenticatedUser;
use quill_core::application::services::ApplicationServices;
use quill_core::domain::identity::UserId;
use quill_core::infrastructure::database;
use quill_core::infrastructure::repositories::{
    SqliteCommentReadRepository, SqliteCommentWriteRepository, SqliteLikeRepository,
    SqlitePostReadRepository, SqlitePostWriteRepository,
};
use sqlx::SqlitePool;

use super::mocks::TestClock;

pub struct TestContext {
    pub services: ApplicationServices,
    pub clock: Arc<TestClock>,
    pub pool: Arc<SqlitePool>,
}

/// Full stack against in-memory SQLite with a controllable clock. A single
/// connection keeps every query on the same in-memory database.
pub async fn test_context() -> TestContext {
    init_tracing();

    let pool = database::init_pool_with("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    let pool = Arc::new(pool);

    let clock = Arc::new(TestClock::default());

    let services = ApplicationServices::new(
        Arc::new(SqlitePostWriteRepository::new(Arc::clone(&pool))),
        Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteLikeRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteCommentWriteRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteCommentReadRepository::new(Arc::clone(&pool))),
        Arc::clone(&clock) as Arc<dyn quill_core::application::ports::time::Clock>,
    );

    TestContext {
        services,
        clock,
        pool,
    }
}

pub fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).expect("positive test user id"))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
