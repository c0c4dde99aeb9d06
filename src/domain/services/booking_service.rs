use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rand::thread_rng;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::models::service::Service;
use crate::domain::models::team::{ProfessionalBlock, TeamMember};
use crate::domain::ports::{
    BlockRepository, BookingRepository, NotificationService, ServiceRepository, TeamRepository,
};
use crate::domain::services::availability::{
    has_capacity, resolve_professional, AssignmentFallback, FALLBACK_SERVICE_DURATION_MIN,
};
use crate::domain::services::schedule::{
    self, minutes_from_midnight, parse_duration, slots_for_day, ScheduleConfig,
};
use crate::error::AppError;

pub struct SubmitBookingParams {
    pub service_id: String,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub payment_method: String,
}

pub struct SubmittedBooking {
    pub booking: Booking,
    pub whatsapp_link: String,
}

/// Ties the calendar pre-checks together at the moment a client confirms:
/// re-validates the day, re-runs the capacity check against fresh data,
/// assigns a professional, and commits the pending booking.
pub struct BookingService {
    service_repo: Arc<dyn ServiceRepository>,
    team_repo: Arc<dyn TeamRepository>,
    block_repo: Arc<dyn BlockRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    notifier: Arc<dyn NotificationService>,
    schedule: ScheduleConfig,
    fallback: AssignmentFallback,
    // Serializes re-check + insert; two in-flight submissions must not both
    // observe the same free slot.
    submit_gate: Mutex<()>,
}

struct DaySnapshot {
    services: Vec<Service>,
    team: Vec<TeamMember>,
    blocks: Vec<ProfessionalBlock>,
    bookings: Vec<Booking>,
}

impl BookingService {
    pub fn new(
        service_repo: Arc<dyn ServiceRepository>,
        team_repo: Arc<dyn TeamRepository>,
        block_repo: Arc<dyn BlockRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        notifier: Arc<dyn NotificationService>,
        schedule: ScheduleConfig,
        fallback: AssignmentFallback,
    ) -> Self {
        Self {
            service_repo,
            team_repo,
            block_repo,
            booking_repo,
            notifier,
            schedule,
            fallback,
            submit_gate: Mutex::new(()),
        }
    }

    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// One consistent read of everything a resolution pass looks at.
    /// Taken before the occupancy walk begins, never mid-walk.
    async fn snapshot(&self, date: NaiveDate) -> Result<DaySnapshot, AppError> {
        let tz = self.schedule.timezone;
        let day_start = tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
            .single()
            .unwrap()
            .with_timezone(&Utc);
        let day_end = tz
            .from_local_datetime(&date.and_hms_opt(23, 59, 59).unwrap())
            .single()
            .unwrap()
            .with_timezone(&Utc);

        Ok(DaySnapshot {
            services: self.service_repo.list().await?,
            team: self.team_repo.list().await?,
            blocks: self.block_repo.list_by_date(date).await?,
            bookings: self.booking_repo.list_by_range(day_start, day_end).await?,
        })
    }

    fn requested_duration(&self, duration_text: &str) -> u32 {
        let parsed = parse_duration(duration_text);
        if parsed == 0 { FALLBACK_SERVICE_DURATION_MIN } else { parsed }
    }

    /// Start times still open on `date` for a service of the given duration.
    pub async fn available_slots(
        &self,
        date: NaiveDate,
        duration_min: u32,
    ) -> Result<Vec<String>, AppError> {
        let tz = self.schedule.timezone;
        if schedule::is_past(date, tz) {
            return Ok(Vec::new());
        }

        let grid = slots_for_day(date, &self.schedule);
        if grid.is_empty() {
            return Ok(grid);
        }

        let snap = self.snapshot(date).await?;
        let closing = self.schedule.closing_minutes();

        Ok(grid
            .into_iter()
            .filter(|slot| {
                has_capacity(
                    date,
                    minutes_from_midnight(slot),
                    duration_min,
                    &snap.bookings,
                    &snap.team,
                    &snap.blocks,
                    &snap.services,
                    closing,
                    tz,
                )
            })
            .collect())
    }

    pub async fn slot_duration_for(&self, service_id: Option<&str>) -> Result<u32, AppError> {
        match service_id {
            Some(id) => {
                let service = self
                    .service_repo
                    .find_by_id(id)
                    .await?
                    .ok_or(AppError::NotFound("Service not found".into()))?;
                Ok(self.requested_duration(&service.duration))
            }
            None => Ok(FALLBACK_SERVICE_DURATION_MIN),
        }
    }

    /// Days in `[start, end]` with at least one open slot.
    pub async fn available_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        duration_min: u32,
    ) -> Result<Vec<String>, AppError> {
        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            if !self.available_slots(current, duration_min).await?.is_empty() {
                dates.push(schedule::date_key(current));
            }
            current += Duration::days(1);
        }
        Ok(dates)
    }

    pub async fn submit(&self, params: SubmitBookingParams) -> Result<SubmittedBooking, AppError> {
        let tz = self.schedule.timezone;

        let date = NaiveDate::parse_from_str(&params.date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date format".into()))?;
        let time = NaiveTime::parse_from_str(&params.time, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;

        if params.client_name.trim().is_empty() {
            return Err(AppError::Validation("Client name is required".into()));
        }
        if params.client_phone.trim().is_empty() {
            return Err(AppError::Validation("Client phone is required".into()));
        }
        match params.payment_method.as_str() {
            "cash" | "card" => {}
            _ => return Err(AppError::Validation("Invalid payment method".into())),
        }

        if schedule::is_past(date, tz) {
            return Err(AppError::Validation("Cannot book in the past".into()));
        }

        // The set of bookable days can change between slot selection and
        // submission; a stale client must land back on date selection.
        if schedule::is_closed_weekday(date, &self.schedule.closed_weekdays) {
            return Err(AppError::Conflict("The salon is closed on the selected day".into()));
        }
        if schedule::is_holiday(date, &self.schedule.holidays) {
            return Err(AppError::Conflict("The selected date is a holiday".into()));
        }

        let service = self
            .service_repo
            .find_by_id(&params.service_id)
            .await?
            .ok_or(AppError::NotFound("Service not found".into()))?;

        if !slots_for_day(date, &self.schedule).contains(&params.time) {
            return Err(AppError::Conflict("Selected time is not a bookable slot".into()));
        }

        let start_min = minutes_from_midnight(&params.time);
        let duration_min = self.requested_duration(&service.duration);

        let booking_date = tz
            .from_local_datetime(&date.and_time(time))
            .single()
            .ok_or(AppError::Validation(
                "Invalid local time (ambiguous or skipped due to DST)".into(),
            ))?
            .fixed_offset();

        let gate = self.submit_gate.lock().await;

        // Capacity is re-checked against freshly read data right before the
        // insert; the slot the calendar showed may be gone by now.
        let snap = self.snapshot(date).await?;
        if !has_capacity(
            date,
            start_min,
            duration_min,
            &snap.bookings,
            &snap.team,
            &snap.blocks,
            &snap.services,
            self.schedule.closing_minutes(),
            tz,
        ) {
            return Err(AppError::Conflict("Selected time slot is no longer available".into()));
        }

        let professional_id = resolve_professional(
            date,
            start_min,
            duration_min,
            &snap.team,
            &snap.bookings,
            &snap.blocks,
            &snap.services,
            self.fallback,
            tz,
            &mut thread_rng(),
        );

        let booking = Booking::new(NewBookingParams {
            client_name: params.client_name.trim().to_string(),
            client_phone: params.client_phone.trim().to_string(),
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            price: service.price,
            payment_method: params.payment_method,
            date: booking_date,
            time: params.time.clone(),
            professional_id,
        });

        let created = self.booking_repo.create(&booking).await?;
        drop(gate);

        info!(
            "Booking committed: {} ({} on {} {}, professional: {})",
            created.id,
            created.service_name,
            params.date,
            params.time,
            created.professional_id.as_deref().unwrap_or("unassigned"),
        );

        let whatsapp_link = self.notifier.booking_link(&created);

        // Fire-and-forget: a failed notification never rolls back the
        // committed booking.
        let notifier = self.notifier.clone();
        let notify_copy = created.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify_booking(&notify_copy).await {
                warn!("Notification failed for booking {}: {:?}", notify_copy.id, e);
            }
        });

        Ok(SubmittedBooking { booking: created, whatsapp_link })
    }
}
