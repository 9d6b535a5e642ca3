//! Site Catalog
//!
//! Static services and photos shown on the public site.

use crate::domain::service::pexels_url;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogService {
    pub id: u32,
    pub name: &'static str,
    pub price: u32,
    /// Minutes
    pub duration: u32,
    pub description: &'static str,
    pub photo: u32,
}

impl CatalogService {
    pub fn price_label(&self) -> String {
        format!("₺{}", self.price)
    }

    pub fn duration_label(&self) -> String {
        format!("{} dk", self.duration)
    }

    pub fn image(&self) -> String {
        pexels_url(self.photo, 400)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteImage {
    pub id: u32,
    pub photo: u32,
    pub alt: &'static str,
    /// Category slug, see `domain::gallery::GALLERY_CATEGORIES`
    pub category: &'static str,
}

impl SiteImage {
    pub fn src(&self) -> String {
        pexels_url(self.photo, 600)
    }
}

pub const SERVICES: &[CatalogService] = &[
    CatalogService { id: 1, name: "Klasik Saç Kesimi", price: 150, duration: 30, description: "Profesyonel saç kesimi ve şekillendirme", photo: 1319460 },
    CatalogService { id: 2, name: "Sakal Tıraşı", price: 100, duration: 20, description: "Geleneksel ustura ile sakal tıraşı", photo: 1570807 },
    CatalogService { id: 3, name: "Komple Bakım", price: 200, duration: 60, description: "Saç kesimi + sakal tıraşı + yüz bakımı", photo: 1570806 },
    CatalogService { id: 4, name: "Fade Kesim", price: 180, duration: 40, description: "Modern fade tekniği ile saç kesimi", photo: 1805600 },
    CatalogService { id: 5, name: "Saç Yıkama", price: 50, duration: 15, description: "Premium şampuan ile saç yıkama", photo: 1570808 },
    CatalogService { id: 6, name: "Kaş Düzeltme", price: 75, duration: 15, description: "Profesyonel kaş şekillendirme", photo: 1570809 },
];

pub const GALLERY: &[SiteImage] = &[
    SiteImage { id: 1, photo: 1319460, alt: "Klasik saç kesimi", category: "saç-kesimi" },
    SiteImage { id: 2, photo: 1570807, alt: "Sakal tıraşı", category: "sakal" },
    SiteImage { id: 3, photo: 1805600, alt: "Fade kesim", category: "saç-kesimi" },
    SiteImage { id: 4, photo: 1570806, alt: "Komple bakım", category: "bakım" },
    SiteImage { id: 5, photo: 1570808, alt: "Saç yıkama", category: "bakım" },
    SiteImage { id: 6, photo: 1570809, alt: "Kaş düzeltme", category: "bakım" },
    SiteImage { id: 7, photo: 1813272, alt: "Modern kesim", category: "saç-kesimi" },
    SiteImage { id: 8, photo: 1805603, alt: "Profesyonel tıraş", category: "sakal" },
];

/// Public gallery images for a category slug (`all` for every image)
pub fn gallery_for(category: &str) -> Vec<SiteImage> {
    GALLERY
        .iter()
        .filter(|img| crate::domain::gallery::category_matches(category, img.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_for() {
        assert_eq!(gallery_for("all").len(), 8);
        let ids: Vec<u32> = gallery_for("sakal").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 8]);
        assert!(gallery_for("boya").is_empty());
    }

    #[test]
    fn test_service_labels() {
        assert_eq!(SERVICES[0].price_label(), "₺150");
        assert_eq!(SERVICES[0].duration_label(), "30 dk");
        assert!(SERVICES[0].image().ends_with("w=400"));
        assert!(GALLERY[7].src().contains("1805603"));
    }
}
