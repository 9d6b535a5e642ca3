//! Dashboard Summary
//!
//! Fixed headline figures for the admin landing page.

use super::appointment::AppointmentStatus;
use super::metric::{Metric, Share};

pub const WEEKDAYS: [&str; 7] = ["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"];

/// Bar heights in percent, Monday first
pub const WEEKLY_TREND: [u32; 7] = [65, 45, 78, 52, 89, 67, 43];

pub fn metrics() -> Vec<Metric> {
    vec![
        Metric::new("Toplam Randevu", "1.247", "+12%", "bg-blue-500"),
        Metric::new("Aktif Müşteri", "892", "+8%", "bg-green-500"),
        Metric::new("Aylık Ciro", "₺45.230", "+15%", "bg-primary"),
        Metric::new("Müşteri Memnuniyeti", "4.9/5", "+0.2", "bg-purple-500"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayAppointment {
    pub id: u32,
    pub customer: &'static str,
    pub service: &'static str,
    pub time: &'static str,
    pub status: AppointmentStatus,
}

pub fn todays_appointments() -> Vec<TodayAppointment> {
    use AppointmentStatus::*;
    let row = |id, customer, service, time, status| TodayAppointment { id, customer, service, time, status };
    vec![
        row(1, "Ahmet Yılmaz", "Klasik Kesim", "14:30", Confirmed),
        row(2, "Mehmet Kaya", "Sakal Tıraşı", "15:00", Pending),
        row(3, "Ali Demir", "Komple Bakım", "15:30", Confirmed),
        row(4, "Emre Şahin", "Fade Kesim", "16:00", Completed),
    ]
}

/// Quick actions: (label, target panel id, icon color)
pub const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("Yeni Randevu", "appointments", "bg-blue-500"),
    ("Müşteri Ekle", "customers", "bg-green-500"),
    ("Galeri Güncelle", "gallery", "bg-purple-500"),
    ("Rapor Oluştur", "analytics", "bg-orange-500"),
];

pub fn popular_services() -> Vec<Share> {
    vec![
        Share { label: "Klasik Kesim", percentage: 45.0, color: "bg-blue-500" },
        Share { label: "Sakal Tıraşı", percentage: 30.0, color: "bg-green-500" },
        Share { label: "Komple Bakım", percentage: 15.0, color: "bg-primary" },
        Share { label: "Fade Kesim", percentage: 10.0, color: "bg-purple-500" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_trend_matches_days() {
        assert_eq!(WEEKDAYS.len(), WEEKLY_TREND.len());
        assert!(WEEKLY_TREND.iter().all(|h| *h <= 100));
    }

    #[test]
    fn test_popular_services_sum() {
        assert_eq!(popular_services().iter().map(|s| s.percentage).sum::<f64>(), 100.0);
    }
}
