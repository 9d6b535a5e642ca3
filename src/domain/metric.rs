//! Metric Cards
//!
//! Headline figures shown at the top of the dashboard, analytics and finance
//! panels.

/// Date range options: (value, label). Presentational only.
pub const DATE_RANGES: &[(&str, &str)] = &[
    ("7d", "Son 7 Gün"),
    ("30d", "Son 30 Gün"),
    ("90d", "Son 90 Gün"),
    ("1y", "Son 1 Yıl"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    /// Change against the previous period, already signed (`+12%`)
    pub change: &'static str,
    pub positive: bool,
    /// Tailwind background class for the icon tile
    pub color: &'static str,
}

impl Metric {
    pub fn new(label: &'static str, value: impl Into<String>, change: &'static str, color: &'static str) -> Self {
        Self {
            label,
            value: value.into(),
            change,
            positive: !change.starts_with('-'),
            color,
        }
    }

    /// Mark a change as favourable regardless of its sign
    pub fn favourable(mut self) -> Self {
        self.positive = true;
        self
    }

    pub fn change_class(&self) -> &'static str {
        if self.positive { "text-green-600" } else { "text-red-600" }
    }
}

/// One labelled share of a whole, drawn as a progress bar
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: &'static str,
    pub percentage: f64,
    pub color: &'static str,
}

/// Width style for a percentage bar
pub fn width_style(percentage: f64) -> String {
    format!("width: {}%;", percentage)
}

/// Height style for a chart bar
pub fn height_style(percentage: f64) -> String {
    format!("height: {:.1}%;", percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_sign() {
        assert!(Metric::new("a", "1", "+12%", "bg-blue-500").positive);
        let bounce = Metric::new("b", "32.5%", "-2.1%", "bg-orange-500");
        assert_eq!(bounce.change_class(), "text-red-600");
        assert_eq!(bounce.favourable().change_class(), "text-green-600");
    }

    #[test]
    fn test_styles() {
        assert_eq!(width_style(41.5), "width: 41.5%;");
        assert_eq!(height_style(100.0 * 52100.0 / 60000.0), "height: 86.8%;");
    }
}
