use crate::domain::models::booking::Booking;
use crate::domain::ports::NotificationService;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Datelike;
use tracing::info;
use url::Url;

const MONTHS_ES: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

/// Builds wa.me deep links carrying a pre-filled confirmation message to
/// the salon's WhatsApp number. The client taps the link; delivery itself
/// happens outside this service.
pub struct WhatsAppNotifier {
    business_phone: String,
}

impl WhatsAppNotifier {
    pub fn new(business_phone: &str) -> Self {
        Self {
            business_phone: business_phone.chars().filter(|c| c.is_ascii_digit()).collect(),
        }
    }
}

/// "29 de Diciembre" style, from the booking's salon-offset date.
fn format_date_es(booking: &Booking) -> String {
    let month = MONTHS_ES[booking.date.month0() as usize];
    format!("{} de {}", booking.date.day(), month)
}

pub fn booking_message(booking: &Booking) -> String {
    format!(
        "Hola! Me gustaría confirmar un turno:\n\n\
         🗓 *Servicio:* {}\n\
         📅 *Fecha:* {}\n\
         ⏰ *Hora:* {}\n\
         👤 *Nombre:* {}\n\n\
         Espero confirmación. Gracias!",
        booking.service_name,
        format_date_es(booking),
        booking.time,
        booking.client_name,
    )
}

#[async_trait]
impl NotificationService for WhatsAppNotifier {
    async fn notify_booking(&self, booking: &Booking) -> Result<(), AppError> {
        let link = self.booking_link(booking);
        info!("WhatsApp confirmation link ready for booking {}: {}", booking.id, link);
        Ok(())
    }

    fn booking_link(&self, booking: &Booking) -> String {
        let base = format!("https://wa.me/{}", self.business_phone);
        Url::parse_with_params(&base, &[("text", booking_message(booking))])
            .map(|url| url.to_string())
            .unwrap_or(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::NewBookingParams;

    fn sample_booking() -> Booking {
        Booking::new(NewBookingParams {
            client_name: "María García".to_string(),
            client_phone: "600111222".to_string(),
            service_id: "s1".to_string(),
            service_name: "Lifting de Pestañas".to_string(),
            price: 30,
            payment_method: "card".to_string(),
            date: "2026-12-29T14:00:00+01:00".parse().unwrap(),
            time: "14:00".to_string(),
            professional_id: None,
        })
    }

    #[test]
    fn test_phone_is_cleaned_to_digits() {
        let notifier = WhatsAppNotifier::new("+34 617-586-856");
        let link = notifier.booking_link(&sample_booking());
        assert!(link.starts_with("https://wa.me/34617586856?text="));
    }

    #[test]
    fn test_message_carries_booking_details() {
        let message = booking_message(&sample_booking());
        assert!(message.contains("Lifting de Pestañas"));
        assert!(message.contains("29 de Diciembre"));
        assert!(message.contains("14:00"));
        assert!(message.contains("María García"));
    }
}
