use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    BlockRepository, BookingRepository, NotificationService, ServiceRepository, TeamRepository,
};
use crate::domain::services::booking_service::BookingService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub team_repo: Arc<dyn TeamRepository>,
    pub block_repo: Arc<dyn BlockRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub notifier: Arc<dyn NotificationService>,
    pub booking_service: Arc<BookingService>,
}
