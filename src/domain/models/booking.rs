use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use sqlx::FromRow;

/// A client appointment. `date` carries the fixed UTC offset of the salon
/// timezone at booking time; `time` is the "HH:MM" wall-clock start. The
/// service name and price are snapshots taken at submission, not live links.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    pub client_phone: String,
    pub service_id: String,
    pub service_name: String,
    pub price: i64,
    pub payment_method: String,
    pub date: DateTime<FixedOffset>,
    pub time: String,
    pub status: String,
    pub professional_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub client_name: String,
    pub client_phone: String,
    pub service_id: String,
    pub service_name: String,
    pub price: i64,
    pub payment_method: String,
    pub date: DateTime<FixedOffset>,
    pub time: String,
    pub professional_id: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: params.client_name,
            client_phone: params.client_phone,
            service_id: params.service_id,
            service_name: params.service_name,
            price: params.price,
            payment_method: params.payment_method,
            date: params.date,
            time: params.time,
            status: "pending".to_string(),
            professional_id: params.professional_id,
            created_at: Utc::now(),
        }
    }

    /// Whether this booking holds a professional's time for future-looking
    /// checks. An 'absent' booking releases its slot.
    pub fn occupies(&self) -> bool {
        self.status != "absent"
    }

    /// Calendar day of this booking in the salon timezone, as YYYY-MM-DD.
    pub fn date_key(&self, tz: Tz) -> String {
        self.date.with_timezone(&tz).format("%Y-%m-%d").to_string()
    }
}

pub fn is_valid_status(status: &str) -> bool {
    matches!(status, "pending" | "confirmed" | "attended" | "absent")
}

/// pending -> confirmed -> attended | absent. Everything else is rejected.
pub fn is_valid_transition(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        ("pending", "confirmed") | ("confirmed", "attended") | ("confirmed", "absent")
    )
}
