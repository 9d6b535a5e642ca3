//! Site Analytics
//!
//! Static traffic figures for the analytics panel.

use super::metric::{Metric, Share};
use crate::util::format_thousands;

/// Chart scale for weekly visitors (bar at 100%)
pub const VISITOR_MAX: f64 = 2500.0;
/// Chart scale for weekly page views (bar at 80%)
pub const PAGE_VIEW_MAX: f64 = 6000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsOverview {
    pub total_visitors: u64,
    pub page_views: u64,
    pub bounce_rate: f64,
    /// `m:ss`
    pub avg_session: &'static str,
    pub conversion_rate: f64,
}

impl AnalyticsOverview {
    pub fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::new("Toplam Ziyaretçi", format_thousands(self.total_visitors), "+12.5%", "bg-blue-500"),
            Metric::new("Sayfa Görüntüleme", format_thousands(self.page_views), "+8.3%", "bg-green-500"),
            // A falling bounce rate is good news
            Metric::new("Çıkış Oranı", format!("{}%", self.bounce_rate), "-2.1%", "bg-orange-500").favourable(),
            Metric::new("Ort. Oturum Süresi", self.avg_session, "+15s", "bg-purple-500"),
            Metric::new("Dönüşüm Oranı", format!("{}%", self.conversion_rate), "+0.8%", "bg-primary"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopPage {
    pub page: &'static str,
    pub views: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTraffic {
    pub day: &'static str,
    pub visitors: u64,
    pub page_views: u64,
}

impl WeeklyTraffic {
    pub fn visitors_height(&self) -> f64 {
        self.visitors as f64 / VISITOR_MAX * 100.0
    }

    pub fn page_views_height(&self) -> f64 {
        self.page_views as f64 / PAGE_VIEW_MAX * 80.0
    }
}

/// Live activity strip: (value, label)
pub const REALTIME: &[(&str, &str)] = &[
    ("23", "Şu anda aktif kullanıcı"),
    ("156", "Son 30 dakikada sayfa görüntüleme"),
    ("3", "Son 1 saatte randevu"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsData {
    pub overview: AnalyticsOverview,
    pub traffic: Vec<Share>,
    pub devices: Vec<Share>,
    pub top_pages: Vec<TopPage>,
    pub weekly: Vec<WeeklyTraffic>,
}

fn share(label: &'static str, percentage: f64, color: &'static str) -> Share {
    Share { label, percentage, color }
}

fn page(page: &'static str, views: u64, percentage: f64) -> TopPage {
    TopPage { page, views, percentage }
}

fn day(day: &'static str, visitors: u64, page_views: u64) -> WeeklyTraffic {
    WeeklyTraffic { day, visitors, page_views }
}

/// Mock analytics figures
pub fn seed_analytics() -> AnalyticsData {
    AnalyticsData {
        overview: AnalyticsOverview {
            total_visitors: 12547,
            page_views: 45632,
            bounce_rate: 32.5,
            avg_session: "3:24",
            conversion_rate: 4.2,
        },
        traffic: vec![
            share("Organik Arama", 45.0, "bg-green-500"),
            share("Doğrudan", 30.0, "bg-blue-500"),
            share("Sosyal Medya", 15.0, "bg-purple-500"),
            share("Referans", 10.0, "bg-orange-500"),
        ],
        devices: vec![
            share("Mobil", 65.0, "bg-primary"),
            share("Masaüstü", 30.0, "bg-primary"),
            share("Tablet", 5.0, "bg-primary"),
        ],
        top_pages: vec![
            page("Ana Sayfa", 15420, 33.8),
            page("Hizmetler", 8930, 19.6),
            page("Randevu", 7650, 16.8),
            page("Galeri", 6420, 14.1),
            page("Hakkımızda", 4210, 9.2),
        ],
        weekly: vec![
            day("Pzt", 1200, 3400),
            day("Sal", 1450, 4100),
            day("Çar", 1680, 4800),
            day("Per", 1920, 5200),
            day("Cum", 2100, 5800),
            day("Cmt", 1800, 4900),
            day("Paz", 1350, 3600),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_heights() {
        let d = day("X", 2500, 6000);
        assert_eq!(d.visitors_height(), 100.0);
        assert_eq!(d.page_views_height(), 80.0);
        assert_eq!(day("Y", 1250, 3000).visitors_height(), 50.0);
    }

    #[test]
    fn test_shares_sum_to_whole() {
        let data = seed_analytics();
        assert_eq!(data.traffic.iter().map(|s| s.percentage).sum::<f64>(), 100.0);
        assert_eq!(data.devices.iter().map(|s| s.percentage).sum::<f64>(), 100.0);
    }

    #[test]
    fn test_overview_metrics() {
        let metrics = seed_analytics().overview.metrics();
        assert_eq!(metrics.len(), 5);
        assert_eq!(metrics[0].value, "12.547");
        assert_eq!(metrics[2].value, "32.5%");
        assert!(metrics[2].positive);
    }
}
