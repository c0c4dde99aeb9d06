use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub name_en: Option<String>,
    pub price: i64,
    pub duration: String,
    pub category: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub price: Option<i64>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub show_on_home: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateBlockRequest {
    pub professional_id: String,
    pub date: NaiveDate,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub service_id: String,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub payment_method: String,
}

#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub payment_method: Option<String>,
    pub professional_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}
