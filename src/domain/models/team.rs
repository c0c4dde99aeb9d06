use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub show_on_home: bool,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(name: String, role: String, bio: Option<String>, show_on_home: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            role,
            bio,
            show_on_home,
            created_at: Utc::now(),
        }
    }
}

/// Marks a professional fully unavailable for one calendar day
/// (vacation, day off). Whole-day granularity only.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ProfessionalBlock {
    pub id: String,
    pub professional_id: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl ProfessionalBlock {
    pub fn new(professional_id: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            professional_id,
            date,
            created_at: Utc::now(),
        }
    }
}
