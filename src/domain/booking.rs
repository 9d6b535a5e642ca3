//! Booking Requests
//!
//! The public appointment form does not store anything. It composes a
//! Turkish message and hands it to WhatsApp through a `wa.me` deep link.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Sent by the "WhatsApp ile Yaz" quick-contact button
pub const QUICK_MESSAGE: &str = "Merhaba! Randevu almak istiyorum. Bilgi alabilir miyim?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingService {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    /// Minutes
    pub duration: u32,
}

impl BookingService {
    /// `Klasik Saç Kesimi - 150₺ (30 dk)`
    pub fn option_label(&self) -> String {
        format!("{} - {}₺ ({} dk)", self.name, self.price, self.duration)
    }
}

pub const BOOKING_SERVICES: &[BookingService] = &[
    BookingService { id: "klasik-kesim", name: "Klasik Saç Kesimi", price: 150, duration: 30 },
    BookingService { id: "sakal-trasi", name: "Sakal Tıraşı", price: 100, duration: 20 },
    BookingService { id: "komple-bakim", name: "Komple Bakım", price: 200, duration: 60 },
    BookingService { id: "sac-yikama", name: "Saç Yıkama", price: 50, duration: 15 },
    BookingService { id: "sac-sekillendirme", name: "Saç Şekillendirme", price: 80, duration: 25 },
    BookingService { id: "cilt-bakimi", name: "Cilt Bakımı", price: 120, duration: 40 },
];

pub fn find_service(id: &str) -> Option<&'static BookingService> {
    BOOKING_SERVICES.iter().find(|s| s.id == id)
}

/// `09:00` through `19:30` every half hour
pub fn time_slots() -> Vec<String> {
    (9..20)
        .flat_map(|hour| [format!("{:02}:00", hour), format!("{:02}:30", hour)])
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD` as the date input reports it
    pub date: String,
    pub time: String,
    pub service_id: String,
    pub notes: String,
}

impl BookingRequest {
    /// Every required field is filled in
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.date, &self.time, &self.service_id]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// Fill the booking template. Fails when the service id is not offered.
pub fn compose_message(request: &BookingRequest) -> DomainResult<String> {
    let service = find_service(&request.service_id)
        .ok_or_else(|| DomainError::InvalidInput(format!("unknown service {}", request.service_id)))?;
    let notes = if request.notes.is_empty() {
        String::new()
    } else {
        format!("Notlar: {}", request.notes)
    };
    Ok(format!(
        "Merhaba! Randevu talebim:\n\nAd Soyad: {}\nTelefon: {}\nTarih: {}\nSaat: {}\nHizmet: {} ({}₺)\n{}\n\nRandevu onayı için bekliyorum.",
        request.name, request.phone, request.date, request.time, service.name, service.price, notes
    ))
}

/// `https://wa.me/<number>?text=<message>`
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, utf8_percent_encode(message, URI_COMPONENT))
}

pub fn tel_url(number: &str) -> String {
    format!("tel:+{}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(notes: &str) -> BookingRequest {
        BookingRequest {
            name: "Ahmet Yılmaz".to_string(),
            phone: "0532 123 45 67".to_string(),
            date: "2024-01-20".to_string(),
            time: "14:30".to_string(),
            service_id: "komple-bakim".to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_time_slots() {
        let slots = time_slots();
        assert_eq!(slots.len(), 22);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("19:30"));
        assert_eq!(slots[1], "09:30");
    }

    #[test]
    fn test_compose_message() {
        let message = compose_message(&make_request("")).unwrap();
        assert_eq!(
            message,
            "Merhaba! Randevu talebim:\n\nAd Soyad: Ahmet Yılmaz\nTelefon: 0532 123 45 67\nTarih: 2024-01-20\nSaat: 14:30\nHizmet: Komple Bakım (200₺)\n\n\nRandevu onayı için bekliyorum."
        );
    }

    #[test]
    fn test_compose_message_with_notes() {
        let message = compose_message(&make_request("Sakal da")).unwrap();
        assert!(message.contains("Hizmet: Komple Bakım (200₺)\nNotlar: Sakal da\n\nRandevu"));
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        let mut request = make_request("");
        request.service_id = "boya".to_string();
        assert!(matches!(compose_message(&request), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_whatsapp_url() {
        let message = compose_message(&make_request("")).unwrap();
        let url = whatsapp_url("905314918035", &message);
        assert!(url.starts_with("https://wa.me/905314918035?text="));
        assert!(url.contains("Ahmet%20Y%C4%B1lmaz"));
        assert!(url.contains("Merhaba!%20Randevu"));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_uri_component_encoding() {
        assert_eq!(
            whatsapp_url("1", "a b&c=d/e?f:(g)*'h'~i_j.k-l!"),
            "https://wa.me/1?text=a%20b%26c%3Dd%2Fe%3Ff%3A(g)*'h'~i_j.k-l!"
        );
        assert_eq!(whatsapp_url("1", "₺"), "https://wa.me/1?text=%E2%82%BA");
    }

    #[test]
    fn test_tel_url() {
        assert_eq!(tel_url("905314918035"), "tel:+905314918035");
    }

    #[test]
    fn test_is_complete() {
        assert!(make_request("").is_complete());
        let mut request = make_request("");
        request.time = String::new();
        assert!(!request.is_complete());
        assert!(!BookingRequest::default().is_complete());
    }

    #[test]
    fn test_option_label() {
        assert_eq!(BOOKING_SERVICES[0].option_label(), "Klasik Saç Kesimi - 150₺ (30 dk)");
    }
}
