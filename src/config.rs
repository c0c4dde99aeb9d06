use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// WhatsApp number confirmations are routed to, digits only.
    pub business_phone: String,
    /// IANA timezone the salon operates in. Every date key is computed here.
    pub salon_timezone: String,
    pub open_hour: u32,
    pub close_hour: u32,
    pub slot_interval_min: u32,
    /// Comma-separated weekday names the salon is closed on (e.g. "SAT,SUN").
    pub closed_weekdays: String,
    /// Comma-separated MM-DD holiday keys. Empty string disables the preset.
    pub holidays: String,
    /// When the exact-slot pool is empty, fall back to the day pool instead
    /// of leaving the booking unassigned. Observed legacy behavior; kept
    /// toggleable pending product-owner confirmation.
    pub assign_fallback_to_day_pool: bool,
}

/// Marbella (Málaga) fixed-date holidays, as MM-DD keys.
pub const DEFAULT_HOLIDAYS: &str =
    "01-01,01-06,02-28,05-01,06-11,08-15,10-12,10-19,11-02,12-08,12-25";

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            business_phone: env::var("BUSINESS_PHONE").unwrap_or_else(|_| "34617586856".to_string()),
            salon_timezone: env::var("SALON_TIMEZONE").unwrap_or_else(|_| "Europe/Madrid".to_string()),
            open_hour: env::var("OPEN_HOUR").unwrap_or_else(|_| "9".to_string()).parse().expect("OPEN_HOUR must be a number"),
            close_hour: env::var("CLOSE_HOUR").unwrap_or_else(|_| "19".to_string()).parse().expect("CLOSE_HOUR must be a number"),
            slot_interval_min: env::var("SLOT_INTERVAL_MIN").unwrap_or_else(|_| "30".to_string()).parse().expect("SLOT_INTERVAL_MIN must be a number"),
            closed_weekdays: env::var("CLOSED_WEEKDAYS").unwrap_or_else(|_| "SAT,SUN".to_string()),
            holidays: env::var("SALON_HOLIDAYS").unwrap_or_else(|_| DEFAULT_HOLIDAYS.to_string()),
            assign_fallback_to_day_pool: env::var("ASSIGN_FALLBACK_TO_DAY_POOL")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
        }
    }
}
