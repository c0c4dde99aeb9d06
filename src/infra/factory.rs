use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::availability::AssignmentFallback;
use crate::domain::services::booking_service::BookingService;
use crate::domain::services::schedule::ScheduleConfig;
use crate::infra::notification::whatsapp::WhatsAppNotifier;
use crate::infra::repositories::{
    postgres_block_repo::PostgresBlockRepo, postgres_booking_repo::PostgresBookingRepo,
    postgres_service_repo::PostgresServiceRepo, postgres_team_repo::PostgresTeamRepo,
    sqlite_block_repo::SqliteBlockRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_service_repo::SqliteServiceRepo, sqlite_team_repo::SqliteTeamRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let notifier = Arc::new(WhatsAppNotifier::new(&config.business_phone));
    let schedule = ScheduleConfig::from_config(config);
    let fallback = if config.assign_fallback_to_day_pool {
        AssignmentFallback::DayPool
    } else {
        AssignmentFallback::LeaveUnassigned
    };

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let service_repo = Arc::new(PostgresServiceRepo::new(pool.clone()));
        let team_repo = Arc::new(PostgresTeamRepo::new(pool.clone()));
        let block_repo = Arc::new(PostgresBlockRepo::new(pool.clone()));
        let booking_repo = Arc::new(PostgresBookingRepo::new(pool.clone()));

        let booking_service = Arc::new(BookingService::new(
            service_repo.clone(),
            team_repo.clone(),
            block_repo.clone(),
            booking_repo.clone(),
            notifier.clone(),
            schedule,
            fallback,
        ));

        AppState {
            config: config.clone(),
            service_repo,
            team_repo,
            block_repo,
            booking_repo,
            notifier,
            booking_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let service_repo = Arc::new(SqliteServiceRepo::new(pool.clone()));
        let team_repo = Arc::new(SqliteTeamRepo::new(pool.clone()));
        let block_repo = Arc::new(SqliteBlockRepo::new(pool.clone()));
        let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));

        let booking_service = Arc::new(BookingService::new(
            service_repo.clone(),
            team_repo.clone(),
            block_repo.clone(),
            booking_repo.clone(),
            notifier.clone(),
            schedule,
            fallback,
        ));

        AppState {
            config: config.clone(),
            service_repo,
            team_repo,
            block_repo,
            booking_repo,
            notifier,
            booking_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
