use salon_backend::{
    api::router::create_router,
    config::Config,
    domain::services::availability::AssignmentFallback,
    domain::services::booking_service::BookingService,
    domain::services::schedule::ScheduleConfig,
    infra::notification::whatsapp::WhatsAppNotifier,
    infra::repositories::{
        sqlite_block_repo::SqliteBlockRepo,
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_service_repo::SqliteServiceRepo,
        sqlite_team_repo::SqliteTeamRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::Request,
    Router,
};
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            business_phone: "34617586856".to_string(),
            salon_timezone: "Europe/Madrid".to_string(),
            open_hour: 9,
            close_hour: 19,
            slot_interval_min: 30,
            closed_weekdays: "SAT,SUN".to_string(),
            holidays: salon_backend::config::DEFAULT_HOLIDAYS.to_string(),
            assign_fallback_to_day_pool: true,
        };

        let service_repo = Arc::new(SqliteServiceRepo::new(pool.clone()));
        let team_repo = Arc::new(SqliteTeamRepo::new(pool.clone()));
        let block_repo = Arc::new(SqliteBlockRepo::new(pool.clone()));
        let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let notifier = Arc::new(WhatsAppNotifier::new(&config.business_phone));

        let booking_service = Arc::new(BookingService::new(
            service_repo.clone(),
            team_repo.clone(),
            block_repo.clone(),
            booking_repo.clone(),
            notifier.clone(),
            ScheduleConfig::from_config(&config),
            AssignmentFallback::DayPool,
        ));

        let state = Arc::new(AppState {
            config,
            service_repo,
            team_repo,
            block_repo,
            booking_repo,
            notifier,
            booking_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn post_json(app: &TestApp, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[allow(dead_code)]
pub async fn get(app: &TestApp, uri: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri)
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

#[allow(dead_code)]
pub async fn seed_service(app: &TestApp, name: &str, duration: &str, price: i64) -> String {
    let res = post_json(app, "/api/v1/services", json!({
        "name": name,
        "price": price,
        "duration": duration,
        "category": "Tratamiento Facial"
    })).await;
    assert!(res.status().is_success(), "seeding service failed: {}", res.status());
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub async fn seed_team_member(app: &TestApp, name: &str) -> String {
    let res = post_json(app, "/api/v1/team", json!({
        "name": name,
        "role": "Esteticista"
    })).await;
    assert!(res.status().is_success(), "seeding team member failed: {}", res.status());
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub async fn seed_block(app: &TestApp, professional_id: &str, date: &str) {
    let res = post_json(app, "/api/v1/blocks", json!({
        "professional_id": professional_id,
        "date": date
    })).await;
    assert!(res.status().is_success(), "seeding block failed: {}", res.status());
}

fn holiday_keys() -> Vec<String> {
    salon_backend::config::DEFAULT_HOLIDAYS
        .split(',')
        .map(|s| s.to_string())
        .collect()
}

/// Next calendar day (at least tomorrow, salon time) the salon is open.
#[allow(dead_code)]
pub fn next_open_date() -> String {
    let holidays = holiday_keys();
    let mut date = Utc::now().with_timezone(&chrono_tz::Europe::Madrid).date_naive() + Duration::days(1);
    loop {
        let closed = matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            || holidays.contains(&date.format("%m-%d").to_string());
        if !closed {
            return date.format("%Y-%m-%d").to_string();
        }
        date += Duration::days(1);
    }
}

/// Next Saturday strictly in the future (salon time).
#[allow(dead_code)]
pub fn next_saturday_date() -> String {
    let mut date = Utc::now().with_timezone(&chrono_tz::Europe::Madrid).date_naive() + Duration::days(1);
    while date.weekday() != Weekday::Sat {
        date += Duration::days(1);
    }
    date.format("%Y-%m-%d").to_string()
}

/// A guaranteed-future Christmas Day.
#[allow(dead_code)]
pub fn future_christmas_date() -> String {
    let today = Utc::now().with_timezone(&chrono_tz::Europe::Madrid).date_naive();
    NaiveDate::from_ymd_opt(today.year() + 1, 12, 25)
        .unwrap()
        .format("%Y-%m-%d")
        .to_string()
}
