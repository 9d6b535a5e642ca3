//! Finance Records
//!
//! Static revenue figures and the recent-transactions list.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::metric::{Metric, Share};
use crate::util::format_try;

/// Bar charts are scaled against this monthly maximum
pub const CHART_MAX: f64 = 60_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "nakit",
            PaymentMethod::Card => "kart",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Nakit",
            PaymentMethod::Card => "Kart",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "bg-green-100 text-green-800",
            PaymentMethod::Card => "bg-blue-100 text-blue-800",
        }
    }
}

/// Payment filter options: (value, label)
pub const PAYMENT_FILTERS: &[(&str, &str)] = &[("all", "Tüm Ödemeler"), ("nakit", "Nakit"), ("kart", "Kart")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub customer: String,
    pub service: String,
    pub amount: u32,
    pub date: chrono::NaiveDate,
    pub method: PaymentMethod,
}

impl Entity for Transaction {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// `filter` is `all` or a method slug; anything else matches nothing
pub fn filter_transactions(items: &[Transaction], filter: &str) -> Vec<Transaction> {
    items
        .iter()
        .filter(|t| filter == "all" || t.method.as_str() == filter)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceOverview {
    pub total_revenue: u64,
    pub monthly_revenue: u64,
    pub daily_average: u64,
    pub growth: f64,
    pub card_share: u32,
}

impl FinanceOverview {
    pub fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::new("Toplam Ciro", format_try(self.total_revenue), "+15.2%", "bg-green-500"),
            Metric::new("Aylık Gelir", format_try(self.monthly_revenue), "+8.3%", "bg-blue-500"),
            Metric::new("Günlük Ortalama", format_try(self.daily_average), "+12%", "bg-purple-500"),
            Metric::new("Kart Ödemeleri", format!("{}%", self.card_share), "+5%", "bg-primary"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRevenue {
    pub service: &'static str,
    pub revenue: u64,
    pub percentage: f64,
}

const BREAKDOWN_COLORS: &[&str] = &["bg-green-500", "bg-blue-500", "bg-purple-500", "bg-orange-500"];

impl ServiceRevenue {
    /// Bar color by rank; everything past the fourth is gray
    pub fn share(&self, rank: usize) -> Share {
        Share {
            label: self.service,
            percentage: self.percentage,
            color: BREAKDOWN_COLORS.get(rank).copied().unwrap_or("bg-gray-500"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFigure {
    pub month: &'static str,
    pub revenue: u64,
    pub expenses: u64,
}

impl MonthlyFigure {
    pub fn revenue_height(&self) -> f64 {
        self.revenue as f64 / CHART_MAX * 100.0
    }

    pub fn expenses_height(&self) -> f64 {
        self.expenses as f64 / CHART_MAX * 80.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceData {
    pub overview: FinanceOverview,
    pub transactions: Vec<Transaction>,
    pub service_revenue: Vec<ServiceRevenue>,
    pub monthly: Vec<MonthlyFigure>,
}

fn tx(id: u32, customer: &str, service: &str, amount: u32, day: u32, method: PaymentMethod) -> Transaction {
    Transaction {
        id,
        customer: customer.to_string(),
        service: service.to_string(),
        amount,
        date: crate::util::date(2024, 1, day),
        method,
    }
}

fn month(month: &'static str, revenue: u64, expenses: u64) -> MonthlyFigure {
    MonthlyFigure { month, revenue, expenses }
}

fn revenue(service: &'static str, revenue: u64, percentage: f64) -> ServiceRevenue {
    ServiceRevenue { service, revenue, percentage }
}

/// Mock finance figures
pub fn seed_finance() -> FinanceData {
    use PaymentMethod::*;
    FinanceData {
        overview: FinanceOverview {
            total_revenue: 45230,
            monthly_revenue: 12450,
            daily_average: 415,
            growth: 15.2,
            card_share: 68,
        },
        transactions: vec![
            tx(1, "Ahmet Yılmaz", "Klasik Kesim", 150, 15, Cash),
            tx(2, "Mehmet Kaya", "Sakal Tıraşı", 100, 15, Card),
            tx(3, "Ali Demir", "Komple Bakım", 200, 14, Cash),
            tx(4, "Emre Şahin", "Fade Kesim", 180, 14, Card),
            tx(5, "Can Özkan", "Saç Yıkama", 50, 13, Cash),
        ],
        service_revenue: vec![
            revenue("Klasik Kesim", 18750, 41.5),
            revenue("Komple Bakım", 12000, 26.5),
            revenue("Fade Kesim", 7200, 15.9),
            revenue("Sakal Tıraşı", 5280, 11.7),
            revenue("Diğer", 2000, 4.4),
        ],
        monthly: vec![
            month("Oca", 38500, 15200),
            month("Şub", 42300, 16800),
            month("Mar", 39800, 15900),
            month("Nis", 45200, 17100),
            month("May", 48900, 18200),
            month("Haz", 52100, 19500),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_method() {
        let data = seed_finance();
        let ids = |f: &str| filter_transactions(&data.transactions, f).iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids("all"), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids("nakit"), vec![1, 3, 5]);
        assert_eq!(ids("kart"), vec![2, 4]);
        assert!(ids("havale").is_empty());
    }

    #[test]
    fn test_bar_heights() {
        let m = month("X", 60000, 60000);
        assert_eq!(m.revenue_height(), 100.0);
        assert_eq!(m.expenses_height(), 80.0);
        let m = month("Y", 30000, 15000);
        assert_eq!(m.revenue_height(), 50.0);
        assert_eq!(m.expenses_height(), 20.0);
    }

    #[test]
    fn test_overview_metrics() {
        let metrics = seed_finance().overview.metrics();
        assert_eq!(metrics[0].value, "₺45.230");
        assert_eq!(metrics[3].value, "68%");
        assert!(metrics.iter().all(|m| m.positive));
    }

    #[test]
    fn test_breakdown_colors() {
        let data = seed_finance();
        assert_eq!(data.service_revenue[0].share(0).color, "bg-green-500");
        assert_eq!(data.service_revenue[4].share(4).color, "bg-gray-500");
    }
}
