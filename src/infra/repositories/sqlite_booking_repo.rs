use crate::domain::models::booking::Booking;
use crate::domain::ports::BookingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, client_name, client_phone, service_id, service_name, price, payment_method, date, time, status, professional_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.client_name).bind(&booking.client_phone)
            .bind(&booking.service_id).bind(&booking.service_name).bind(booking.price)
            .bind(&booking.payment_method).bind(booking.date).bind(&booking.time)
            .bind(&booking.status).bind(&booking.professional_id).bind(booking.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY datetime(date) ASC, time ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Booking>, AppError> {
        // Stored dates carry the salon's UTC offset; datetime() normalizes
        // both sides before comparing.
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE datetime(date) >= datetime(?) AND datetime(date) <= datetime(?)")
            .bind(start).bind(end).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET client_name=?, client_phone=?, service_id=?, service_name=?, price=?, payment_method=?, date=?, time=?, professional_id=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&booking.client_name).bind(&booking.client_phone).bind(&booking.service_id)
            .bind(&booking.service_name).bind(booking.price).bind(&booking.payment_method)
            .bind(booking.date).bind(&booking.time).bind(&booking.professional_id)
            .bind(&booking.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_status(&self, id: &str, status: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = ? WHERE id = ? RETURNING *")
            .bind(status).bind(id).fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Booking not found".into())); }
        Ok(())
    }
}
