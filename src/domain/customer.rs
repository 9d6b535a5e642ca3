//! Customer Entity
//!
//! Customer records with a loyalty tier derived from cumulative spend.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Searchable};
use crate::util::{contains_ci, date};

/// Loyalty tier, computed on read and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CustomerTier {
    Bronze,
    Silver,
    Gold,
    Vip,
}

pub const VIP_THRESHOLD: u32 = 3000;
pub const GOLD_THRESHOLD: u32 = 1500;
pub const SILVER_THRESHOLD: u32 = 500;

impl CustomerTier {
    /// Thresholds are inclusive
    pub fn from_spend(total_spent: u32) -> Self {
        if total_spent >= VIP_THRESHOLD {
            CustomerTier::Vip
        } else if total_spent >= GOLD_THRESHOLD {
            CustomerTier::Gold
        } else if total_spent >= SILVER_THRESHOLD {
            CustomerTier::Silver
        } else {
            CustomerTier::Bronze
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerTier::Vip => "VIP",
            CustomerTier::Gold => "Gold",
            CustomerTier::Silver => "Silver",
            CustomerTier::Bronze => "Bronze",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            CustomerTier::Vip => "bg-purple-100 text-purple-800",
            CustomerTier::Gold => "bg-yellow-100 text-yellow-800",
            CustomerTier::Silver => "bg-gray-100 text-gray-800",
            CustomerTier::Bronze => "bg-orange-100 text-orange-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSort {
    #[default]
    Name,
    TotalSpent,
    TotalAppointments,
    LastVisit,
}

/// Sort options: (value, label)
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("name", "İsme Göre"),
    ("totalSpent", "Harcamaya Göre"),
    ("totalAppointments", "Randevu Sayısına Göre"),
    ("lastVisit", "Son Ziyarete Göre"),
];

impl CustomerSort {
    pub fn from_str(s: &str) -> Self {
        match s {
            "totalSpent" => CustomerSort::TotalSpent,
            "totalAppointments" => CustomerSort::TotalAppointments,
            "lastVisit" => CustomerSort::LastVisit,
            _ => CustomerSort::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub total_appointments: u32,
    pub total_spent: u32,
    pub last_visit: NaiveDate,
    /// 0..=5 stars
    pub rating: u8,
    pub notes: Option<String>,
    pub join_date: NaiveDate,
}

impl Customer {
    pub fn tier(&self) -> CustomerTier {
        CustomerTier::from_spend(self.total_spent)
    }

    /// Visited strictly within the 30 days before `today`
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.last_visit > today - Duration::days(30)
    }
}

impl Entity for Customer {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Searchable for Customer {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || self.phone.contains(query)
            || self.email.as_deref().is_some_and(|e| contains_ci(e, query))
    }
}

pub fn filter_customers(items: &[Customer], query: &str, sort: CustomerSort) -> Vec<Customer> {
    let mut found: Vec<Customer> = items.iter().filter(|c| c.matches(query)).cloned().collect();
    match sort {
        CustomerSort::Name => found.sort_by_key(|c| c.name.to_lowercase()),
        CustomerSort::TotalSpent => found.sort_by(|a, b| b.total_spent.cmp(&a.total_spent)),
        CustomerSort::TotalAppointments => found.sort_by(|a, b| b.total_appointments.cmp(&a.total_appointments)),
        CustomerSort::LastVisit => found.sort_by(|a, b| b.last_visit.cmp(&a.last_visit)),
    }
    found
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomerStats {
    pub total: usize,
    pub vip: usize,
    /// Rounded, 0 for an empty list
    pub average_spent: u32,
    pub active: usize,
}

impl CustomerStats {
    pub fn from_items(items: &[Customer], today: NaiveDate) -> Self {
        let total_spent: u64 = items.iter().map(|c| c.total_spent as u64).sum();
        let average_spent = if items.is_empty() {
            0
        } else {
            (total_spent as f64 / items.len() as f64).round() as u32
        };
        Self {
            total: items.len(),
            vip: items.iter().filter(|c| c.tier() == CustomerTier::Vip).count(),
            average_spent,
            active: items.iter().filter(|c| c.is_active(today)).count(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn make(
    id: u32,
    name: &str,
    phone: &str,
    email: Option<&str>,
    total_appointments: u32,
    total_spent: u32,
    last_visit: NaiveDate,
    rating: u8,
    notes: Option<&str>,
    join_date: NaiveDate,
) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.map(str::to_string),
        total_appointments,
        total_spent,
        last_visit,
        rating,
        notes: notes.map(str::to_string),
        join_date,
    }
}

/// Mock customers for the admin panel
pub fn seed_customers() -> Vec<Customer> {
    vec![
        make(1, "Ahmet Yılmaz", "0532 123 45 67", Some("ahmet@email.com"), 15, 2250, date(2024, 1, 10), 5, Some("Düzenli müşteri, yanları kısa sever"), date(2023, 6, 15)),
        make(2, "Mehmet Kaya", "0533 234 56 78", Some("mehmet@email.com"), 8, 1200, date(2024, 1, 8), 4, None, date(2023, 9, 20)),
        make(3, "Ali Demir", "0534 345 67 89", None, 22, 4400, date(2024, 1, 12), 5, Some("VIP müşteri, özel ilgi göster"), date(2023, 3, 10)),
        make(4, "Emre Şahin", "0535 456 78 90", Some("emre@email.com"), 5, 750, date(2024, 1, 5), 4, None, date(2023, 11, 1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemoryRepository, Repository};

    fn make_customer(id: u32, name: &str, total_spent: u32, last_visit: NaiveDate) -> Customer {
        make(id, name, "0500 000 00 00", None, 1, total_spent, last_visit, 3, None, date(2023, 1, 1))
    }

    fn ids(items: &[Customer]) -> Vec<u32> {
        items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(CustomerTier::from_spend(3000), CustomerTier::Vip);
        assert_eq!(CustomerTier::from_spend(2999), CustomerTier::Gold);
        assert_eq!(CustomerTier::from_spend(1500), CustomerTier::Gold);
        assert_eq!(CustomerTier::from_spend(1499), CustomerTier::Silver);
        assert_eq!(CustomerTier::from_spend(500), CustomerTier::Silver);
        assert_eq!(CustomerTier::from_spend(499), CustomerTier::Bronze);
        assert_eq!(CustomerTier::from_spend(0), CustomerTier::Bronze);
    }

    #[test]
    fn test_search_fields() {
        let items = seed_customers();
        assert_eq!(ids(&filter_customers(&items, "kaya", CustomerSort::Name)), vec![2]);
        assert_eq!(ids(&filter_customers(&items, "0535", CustomerSort::Name)), vec![4]);
        assert_eq!(ids(&filter_customers(&items, "EMRE@", CustomerSort::Name)), vec![4]);
        // Ali has no email; must not panic or match on it
        assert!(filter_customers(&items, "@email.com", CustomerSort::Name).iter().all(|c| c.id != 3));
        assert!(filter_customers(&items, "xyz", CustomerSort::Name).is_empty());
    }

    #[test]
    fn test_sorting() {
        let items = seed_customers();
        assert_eq!(ids(&filter_customers(&items, "", CustomerSort::Name)), vec![1, 3, 4, 2]);
        assert_eq!(ids(&filter_customers(&items, "", CustomerSort::TotalSpent)), vec![3, 1, 2, 4]);
        assert_eq!(ids(&filter_customers(&items, "", CustomerSort::TotalAppointments)), vec![3, 1, 2, 4]);
        assert_eq!(ids(&filter_customers(&items, "", CustomerSort::LastVisit)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_stats() {
        let today = date(2024, 2, 1);
        let stats = CustomerStats::from_items(&seed_customers(), today);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.vip, 1);
        // (2250 + 1200 + 4400 + 750) / 4 = 2150
        assert_eq!(stats.average_spent, 2150);
        // Cutoff is 2024-01-02, everyone visited after it
        assert_eq!(stats.active, 4);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(CustomerStats::from_items(&[], date(2024, 1, 1)), CustomerStats::default());
    }

    #[test]
    fn test_active_window_is_exclusive() {
        let today = date(2024, 3, 31);
        assert!(!make_customer(1, "A", 0, date(2024, 3, 1)).is_active(today));
        assert!(make_customer(2, "B", 0, date(2024, 3, 2)).is_active(today));
    }

    #[test]
    fn test_average_rounds() {
        let items = vec![make_customer(1, "A", 100, date(2024, 1, 1)), make_customer(2, "B", 101, date(2024, 1, 1))];
        assert_eq!(CustomerStats::from_items(&items, date(2024, 1, 1)).average_spent, 101);
    }

    #[test]
    fn test_delete() {
        let mut repo = MemoryRepository::seeded(seed_customers());
        repo.delete(3).unwrap();
        assert_eq!(ids(repo.list()), vec![1, 2, 4]);
    }
}
