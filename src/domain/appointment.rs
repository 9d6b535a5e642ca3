//! Appointment Entity
//!
//! A booked visit with a forward-only status lifecycle.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Searchable};
use crate::util::contains_ci;

/// Appointment lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Bekliyor",
            AppointmentStatus::Confirmed => "Onaylandı",
            AppointmentStatus::Completed => "Tamamlandı",
            AppointmentStatus::Cancelled => "İptal",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "bg-yellow-100 text-yellow-800",
            AppointmentStatus::Confirmed => "bg-green-100 text-green-800",
            AppointmentStatus::Completed => "bg-blue-100 text-blue-800",
            AppointmentStatus::Cancelled => "bg-red-100 text-red-800",
        }
    }

    /// The single forward transition, if any
    pub fn next_status(&self) -> Option<Self> {
        match self {
            AppointmentStatus::Pending => Some(AppointmentStatus::Confirmed),
            AppointmentStatus::Confirmed => Some(AppointmentStatus::Completed),
            AppointmentStatus::Completed | AppointmentStatus::Cancelled => None,
        }
    }

    /// Tooltip for the button that performs `next_status`
    pub fn advance_label(&self) -> Option<&'static str> {
        match self {
            AppointmentStatus::Pending => Some("Onayla"),
            AppointmentStatus::Confirmed => Some("Tamamla"),
            _ => None,
        }
    }
}

/// Status filter options: (value, label)
pub const STATUS_FILTERS: &[(&str, &str)] = &[
    ("all", "Tüm Durumlar"),
    ("pending", "Bekleyen"),
    ("confirmed", "Onaylanan"),
    ("completed", "Tamamlanan"),
    ("cancelled", "İptal"),
];

/// Select-box filter over statuses. Unknown values mean "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    pub fn from_str(s: &str) -> Self {
        AppointmentStatus::from_str(s).map(StatusFilter::Only).unwrap_or(StatusFilter::All)
    }

    pub fn accepts(&self, status: AppointmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub customer: String,
    pub phone: String,
    pub service: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub status: AppointmentStatus,
    pub price: u32,
    pub notes: Option<String>,
}

impl Entity for Appointment {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Searchable for Appointment {
    /// Customer name ignoring case, or phone as typed
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.customer, query) || self.phone.contains(query)
    }
}

pub fn filter_appointments(items: &[Appointment], query: &str, status: StatusFilter) -> Vec<Appointment> {
    items
        .iter()
        .filter(|a| a.matches(query) && status.accepts(a.status))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppointmentStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
}

impl AppointmentStats {
    pub fn from_items(items: &[Appointment]) -> Self {
        let count = |s: AppointmentStatus| items.iter().filter(|a| a.status == s).count();
        Self {
            total: items.len(),
            pending: count(AppointmentStatus::Pending),
            confirmed: count(AppointmentStatus::Confirmed),
            completed: count(AppointmentStatus::Completed),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn make(
    id: u32,
    customer: &str,
    phone: &str,
    service: &str,
    date: &str,
    time: &str,
    status: AppointmentStatus,
    price: u32,
    notes: Option<&str>,
) -> Appointment {
    Appointment {
        id,
        customer: customer.to_string(),
        phone: phone.to_string(),
        service: service.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        status,
        price,
        notes: notes.map(str::to_string),
    }
}

/// Mock appointments for the admin panel
pub fn seed_appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    vec![
        make(1, "Ahmet Yılmaz", "0532 123 45 67", "Klasik Kesim", "2024-01-15", "14:30", Confirmed, 150, Some("Yanları kısa, üst uzun")),
        make(2, "Mehmet Kaya", "0533 234 56 78", "Sakal Tıraşı", "2024-01-15", "15:00", Pending, 100, None),
        make(3, "Ali Demir", "0534 345 67 89", "Komple Bakım", "2024-01-15", "15:30", Completed, 200, None),
        make(4, "Emre Şahin", "0535 456 78 90", "Fade Kesim", "2024-01-16", "10:00", Confirmed, 180, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemoryRepository, Repository};

    #[test]
    fn test_filter_by_name_ignores_case() {
        let items = seed_appointments();
        let found = filter_appointments(&items, "AHMET", StatusFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_filter_by_phone_fragment() {
        let items = seed_appointments();
        let found = filter_appointments(&items, "234 56", StatusFilter::All);
        assert_eq!(found.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_filter_combines_search_and_status() {
        let items = seed_appointments();
        let confirmed = filter_appointments(&items, "", StatusFilter::from_str("confirmed"));
        assert_eq!(confirmed.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 4]);
        assert!(filter_appointments(&items, "Ali", StatusFilter::Only(AppointmentStatus::Pending)).is_empty());
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let items = seed_appointments();
        assert!(filter_appointments(&items, "Zeynep", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_next_status() {
        assert_eq!(AppointmentStatus::Pending.next_status(), Some(AppointmentStatus::Confirmed));
        assert_eq!(AppointmentStatus::Confirmed.next_status(), Some(AppointmentStatus::Completed));
        assert_eq!(AppointmentStatus::Completed.next_status(), None);
        assert_eq!(AppointmentStatus::Cancelled.next_status(), None);
    }

    #[test]
    fn test_confirm_pending_changes_only_status() {
        let mut repo = MemoryRepository::seeded(seed_appointments());
        let before = repo.find_by_id(2).cloned().unwrap();
        let next = before.status.next_status().unwrap();
        let after = repo.replace_with(2, |a| a.status = next).unwrap();

        assert_eq!(after.status, AppointmentStatus::Confirmed);
        assert_eq!(Appointment { status: before.status, ..after }, before);
        // Neighbours untouched
        assert_eq!(repo.find_by_id(1).unwrap().status, AppointmentStatus::Confirmed);
        assert_eq!(repo.find_by_id(3).unwrap().status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_stats() {
        let stats = AppointmentStats::from_items(&seed_appointments());
        assert_eq!(stats, AppointmentStats { total: 4, pending: 1, confirmed: 2, completed: 1 });
    }

    #[test]
    fn test_status_filter_unknown_is_all() {
        assert_eq!(StatusFilter::from_str("all"), StatusFilter::All);
        assert_eq!(StatusFilter::from_str("nope"), StatusFilter::All);
    }
}
