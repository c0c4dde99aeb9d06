use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A bookable salon service. `duration` is operator-entered free text
/// ("60 min", "1h 30min") and is parsed to minutes wherever occupancy
/// is computed; see `services::schedule::parse_duration`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    pub price: i64,
    pub duration: String,
    pub category: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewServiceParams {
    pub name: String,
    pub name_en: Option<String>,
    pub price: i64,
    pub duration: String,
    pub category: String,
    pub description: Option<String>,
    pub sort_order: i32,
}

impl Service {
    pub fn new(params: NewServiceParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            name_en: params.name_en,
            price: params.price,
            duration: params.duration,
            category: params.category,
            description: params.description,
            sort_order: params.sort_order,
            created_at: Utc::now(),
        }
    }
}
