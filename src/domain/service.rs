//! Service Entity
//!
//! Priced offerings of the shop, managed from the admin panel.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Searchable};
use crate::util::{contains_ci, first_word};

/// Category filter chips. The first entry selects everything.
pub const SERVICE_CATEGORIES: &[&str] = &["Tümü", "Saç Kesimi", "Sakal", "Bakım", "Komple"];
pub const ALL_CATEGORIES: &str = "Tümü";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: u32,
    /// Minutes
    pub duration: u32,
    pub category: String,
    pub image: String,
    pub is_active: bool,
    /// 0..=100
    pub popularity: u8,
}

impl Service {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Aktif" } else { "Pasif" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_active { "Pasif Yap" } else { "Aktif Yap" }
    }
}

impl Entity for Service {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Searchable for Service {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query) || contains_ci(&self.description, query)
    }
}

pub fn filter_services(items: &[Service], query: &str, category: &str) -> Vec<Service> {
    items
        .iter()
        .filter(|s| s.matches(query) && (category == ALL_CATEGORIES || s.category == category))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceStats {
    pub total: usize,
    pub active: usize,
    /// Rounded, 0 for an empty list
    pub average_price: u32,
    /// First word of the most popular service name, `-` when empty
    pub most_popular: String,
    /// `sum(price * popularity)`
    pub estimated_revenue: u64,
}

impl ServiceStats {
    pub fn from_items(items: &[Service]) -> Self {
        let average_price = if items.is_empty() {
            0
        } else {
            (items.iter().map(|s| s.price as f64).sum::<f64>() / items.len() as f64).round() as u32
        };
        // Earliest entry wins a tie
        let most_popular = items
            .iter()
            .fold(None::<&Service>, |best, s| match best {
                Some(b) if b.popularity >= s.popularity => Some(b),
                _ => Some(s),
            })
            .map(|s| first_word(&s.name))
            .unwrap_or_else(|| "-".to_string());

        Self {
            total: items.len(),
            active: items.iter().filter(|s| s.is_active).count(),
            average_price,
            most_popular,
            estimated_revenue: items.iter().map(|s| s.price as u64 * s.popularity as u64).sum(),
        }
    }
}

/// Stock photo URL at the given width
pub fn pexels_url(photo_id: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w={width}",
        id = photo_id,
        width = width
    )
}

#[allow(clippy::too_many_arguments)]
fn make(id: u32, name: &str, description: &str, price: u32, duration: u32, category: &str, photo: u32, popularity: u8) -> Service {
    Service {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        duration,
        category: category.to_string(),
        image: pexels_url(photo, 400),
        is_active: true,
        popularity,
    }
}

/// Mock services for the admin panel
pub fn seed_services() -> Vec<Service> {
    vec![
        make(1, "Klasik Saç Kesimi", "Profesyonel saç kesimi ve şekillendirme", 150, 30, "Saç Kesimi", 1319460, 85),
        make(2, "Sakal Tıraşı", "Geleneksel ustura ile sakal tıraşı", 100, 20, "Sakal", 1570807, 70),
        make(3, "Komple Bakım", "Saç kesimi + sakal tıraşı + yüz bakımı", 200, 60, "Komple", 1570806, 90),
        make(4, "Fade Kesim", "Modern fade tekniği ile saç kesimi", 180, 40, "Saç Kesimi", 1805600, 75),
        make(5, "Saç Yıkama", "Premium şampuan ile saç yıkama", 50, 15, "Bakım", 1570808, 60),
        make(6, "Kaş Düzeltme", "Profesyonel kaş şekillendirme", 75, 15, "Bakım", 1570809, 45),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemoryRepository, Repository};

    fn ids(items: &[Service]) -> Vec<u32> {
        items.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_filter_by_description() {
        let items = seed_services();
        assert_eq!(ids(&filter_services(&items, "USTURA", ALL_CATEGORIES)), vec![2]);
    }

    #[test]
    fn test_filter_by_category() {
        let items = seed_services();
        assert_eq!(ids(&filter_services(&items, "", "Bakım")), vec![5, 6]);
        assert_eq!(ids(&filter_services(&items, "kesim", "Saç Kesimi")), vec![1, 4]);
        assert!(filter_services(&items, "kesim", "Sakal").is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = ServiceStats::from_items(&seed_services());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 6);
        // 755 / 6 = 125.83
        assert_eq!(stats.average_price, 126);
        assert_eq!(stats.most_popular, "Komple");
        assert_eq!(stats.estimated_revenue, 150 * 85 + 100 * 70 + 200 * 90 + 180 * 75 + 50 * 60 + 75 * 45);
    }

    #[test]
    fn test_stats_empty() {
        let stats = ServiceStats::from_items(&[]);
        assert_eq!(stats.average_price, 0);
        assert_eq!(stats.most_popular, "-");
    }

    #[test]
    fn test_toggle_active() {
        let mut repo = MemoryRepository::seeded(seed_services());
        let toggled = repo.replace_with(3, |s| s.is_active = !s.is_active).unwrap();
        assert!(!toggled.is_active);
        assert_eq!(toggled.toggle_label(), "Aktif Yap");
        assert_eq!(ServiceStats::from_items(repo.list()).active, 5);
    }

    #[test]
    fn test_pexels_url() {
        assert_eq!(
            pexels_url(1319460, 400),
            "https://images.pexels.com/photos/1319460/pexels-photo-1319460.jpeg?auto=compress&cs=tinysrgb&w=400"
        );
    }
}
