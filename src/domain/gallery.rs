//! Gallery Image Entity
//!
//! Admin-side photo records plus the category and lightbox helpers shared
//! with the public gallery.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Searchable};
use super::service::pexels_url;
use crate::util::{contains_ci, first_word, format_date_tr};

pub const ALL_IMAGES: &str = "all";

/// Category filters: (slug, label)
pub const GALLERY_CATEGORIES: &[(&str, &str)] = &[
    ("all", "Tümü"),
    ("saç-kesimi", "Saç Kesimi"),
    ("sakal", "Sakal"),
    ("bakım", "Bakım"),
];

/// Label for a category slug, falling back to the slug itself
pub fn category_label(slug: &str) -> &str {
    GALLERY_CATEGORIES
        .iter()
        .find(|(id, _)| *id == slug)
        .map(|(_, label)| *label)
        .unwrap_or(slug)
}

pub fn category_matches(filter: &str, category: &str) -> bool {
    filter == ALL_IMAGES || filter == category
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    /// Caption, also used as alt text
    pub alt: String,
    pub category: String,
    pub upload_date: String,
    /// Display size such as `1.2 MB` or `980 KB`
    pub size: String,
    pub views: u32,
}

impl GalleryImage {
    /// Size in megabytes; kilobyte values are divided by 1000
    pub fn size_mb(&self) -> f64 {
        let number: String = self.size.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
        let value = number.parse::<f64>().unwrap_or(0.0);
        if self.size.contains("MB") {
            value
        } else {
            value / 1000.0
        }
    }

    /// Upload date as `dd.mm.yyyy`, or as stored when it does not parse
    pub fn upload_label(&self) -> String {
        NaiveDate::parse_from_str(&self.upload_date, "%Y-%m-%d")
            .map(format_date_tr)
            .unwrap_or_else(|_| self.upload_date.clone())
    }
}

impl Entity for GalleryImage {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Searchable for GalleryImage {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.alt, query)
    }
}

pub fn filter_images(items: &[GalleryImage], query: &str, category: &str) -> Vec<GalleryImage> {
    items
        .iter()
        .filter(|i| i.matches(query) && category_matches(category, &i.category))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryStats {
    pub total: usize,
    pub total_views: u64,
    pub total_size_mb: f64,
    /// First word of the most viewed caption, `-` when empty
    pub most_viewed: String,
}

impl GalleryStats {
    pub fn from_items(items: &[GalleryImage]) -> Self {
        let most_viewed = items
            .iter()
            .fold(None::<&GalleryImage>, |best, i| match best {
                Some(b) if b.views >= i.views => Some(b),
                _ => Some(i),
            })
            .map(|i| first_word(&i.alt))
            .unwrap_or_else(|| "-".to_string());
        Self {
            total: items.len(),
            total_views: items.iter().map(|i| i.views as u64).sum(),
            total_size_mb: items.iter().map(GalleryImage::size_mb).sum(),
            most_viewed,
        }
    }

    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.total_size_mb)
    }
}

/// Lightbox: index after `current`, wrapping to the start
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Lightbox: index before `current`, wrapping to the end
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

fn make(id: u32, photo: u32, alt: &str, category: &str, upload_date: &str, size: &str, views: u32) -> GalleryImage {
    GalleryImage {
        id,
        src: pexels_url(photo, 600),
        alt: alt.to_string(),
        category: category.to_string(),
        upload_date: upload_date.to_string(),
        size: size.to_string(),
        views,
    }
}

/// Mock photos for the admin panel
pub fn seed_images() -> Vec<GalleryImage> {
    vec![
        make(1, 1319460, "Klasik saç kesimi", "saç-kesimi", "2024-01-10", "1.2 MB", 245),
        make(2, 1570807, "Sakal tıraşı", "sakal", "2024-01-09", "980 KB", 189),
        make(3, 1805600, "Fade kesim", "saç-kesimi", "2024-01-08", "1.5 MB", 312),
        make(4, 1570806, "Komple bakım", "bakım", "2024-01-07", "1.1 MB", 156),
        make(5, 1570808, "Saç yıkama", "bakım", "2024-01-06", "890 KB", 98),
        make(6, 1570809, "Kaş düzeltme", "bakım", "2024-01-05", "750 KB", 67),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemoryRepository, Repository};

    fn ids(items: &[GalleryImage]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_filter_caption_and_category() {
        let items = seed_images();
        assert_eq!(ids(&filter_images(&items, "FADE", ALL_IMAGES)), vec![3]);
        assert_eq!(ids(&filter_images(&items, "kesim", ALL_IMAGES)), vec![1, 3]);
        assert_eq!(ids(&filter_images(&items, "", "bakım")), vec![4, 5, 6]);
        assert!(filter_images(&items, "sakal", "bakım").is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut repo = MemoryRepository::seeded(seed_images());
        repo.delete(4).unwrap();
        assert_eq!(ids(repo.list()), vec![1, 2, 3, 5, 6]);
        assert_eq!(repo.list()[3], seed_images()[4]);
    }

    #[test]
    fn test_upload_label() {
        let mut image = seed_images().remove(0);
        assert_eq!(image.upload_label(), "10.01.2024");
        image.upload_date = "dün".to_string();
        assert_eq!(image.upload_label(), "dün");
    }

    #[test]
    fn test_size_mb() {
        let items = seed_images();
        assert_eq!(items[0].size_mb(), 1.2);
        assert!((items[1].size_mb() - 0.98).abs() < 1e-9);
    }

    #[test]
    fn test_stats() {
        let stats = GalleryStats::from_items(&seed_images());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.total_views, 1067);
        assert_eq!(stats.size_label(), "6.4 MB");
        assert_eq!(stats.most_viewed, "Fade");
        assert_eq!(GalleryStats::from_items(&[]).most_viewed, "-");
    }

    #[test]
    fn test_lightbox_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
        assert_eq!(next_index(0, 0), 0);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("saç-kesimi"), "Saç Kesimi");
        assert_eq!(category_label("boya"), "boya");
    }
}
