use crate::domain::models::{
    booking::Booking,
    service::Service,
    team::{ProfessionalBlock, TeamMember},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError>;
    async fn list(&self) -> Result<Vec<Service>, AppError>;
    async fn update(&self, service: &Service) -> Result<Service, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn create(&self, member: &TeamMember) -> Result<TeamMember, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<TeamMember>, AppError>;
    async fn list(&self) -> Result<Vec<TeamMember>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BlockRepository: Send + Sync {
    async fn create(&self, block: &ProfessionalBlock) -> Result<ProfessionalBlock, AppError>;
    async fn list(&self) -> Result<Vec<ProfessionalBlock>, AppError>;
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<ProfessionalBlock>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn list_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Booking>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<Booking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Outbound confirmation channel. Failures here must never roll back a
/// committed booking.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify_booking(&self, booking: &Booking) -> Result<(), AppError>;
    /// Deep link handed back to the client so they can confirm over chat.
    fn booking_link(&self, booking: &Booking) -> String;
}
