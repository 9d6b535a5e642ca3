//! Shop Settings
//!
//! Nested settings record edited from the admin settings panel.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub owner: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub appointment_reminders: bool,
    pub marketing_emails: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub language: String,
    pub timezone: String,
    pub currency: String,
    pub date_format: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    /// Minutes
    pub session_timeout: u32,
    /// Days
    pub password_expiry: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub business: BusinessInfo,
    pub notifications: NotificationSettings,
    pub system: SystemSettings,
    pub security: SecuritySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            business: BusinessInfo {
                name: "BIG BOSS Premium Kuaför".to_string(),
                owner: "Hamza Şahin".to_string(),
                phone: "0531 491 80 35".to_string(),
                email: "info@bigbosskuafor.com".to_string(),
                address: "İzmir, Buca".to_string(),
                working_hours: "Pazartesi-Cumartesi: 09:00-20:00".to_string(),
            },
            notifications: NotificationSettings {
                email_notifications: true,
                sms_notifications: true,
                appointment_reminders: true,
                marketing_emails: false,
            },
            system: SystemSettings {
                language: "tr".to_string(),
                timezone: "Europe/Istanbul".to_string(),
                currency: "TRY".to_string(),
                date_format: "DD/MM/YYYY".to_string(),
            },
            security: SecuritySettings {
                two_factor_auth: false,
                session_timeout: 30,
                password_expiry: 90,
            },
        }
    }
}

impl Settings {
    /// Serialized form written to the log on save
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Business,
    Notifications,
    System,
    Security,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Business,
        SettingsTab::Notifications,
        SettingsTab::System,
        SettingsTab::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Business => "İşletme Bilgileri",
            SettingsTab::Notifications => "Bildirimler",
            SettingsTab::System => "Sistem",
            SettingsTab::Security => "Güvenlik",
        }
    }
}

// Select options: (value, label)
pub const LANGUAGES: &[(&str, &str)] = &[("tr", "Türkçe"), ("en", "English")];
pub const TIMEZONES: &[(&str, &str)] = &[
    ("Europe/Istanbul", "İstanbul (UTC+3)"),
    ("Europe/London", "Londra (UTC+0)"),
    ("America/New_York", "New York (UTC-5)"),
];
pub const CURRENCIES: &[(&str, &str)] = &[("TRY", "Türk Lirası (₺)"), ("USD", "US Dollar ($)"), ("EUR", "Euro (€)")];
pub const DATE_FORMATS: &[(&str, &str)] = &[
    ("DD/MM/YYYY", "DD/MM/YYYY"),
    ("MM/DD/YYYY", "MM/DD/YYYY"),
    ("YYYY-MM-DD", "YYYY-MM-DD"),
];

/// Notification toggles: (key, label, description)
pub const NOTIFICATION_TOGGLES: &[(&str, &str, &str)] = &[
    ("emailNotifications", "E-posta Bildirimleri", "Yeni randevular ve güncellemeler için e-posta al"),
    ("smsNotifications", "SMS Bildirimleri", "Önemli bildirimler için SMS al"),
    ("appointmentReminders", "Randevu Hatırlatıcıları", "Müşterilere otomatik randevu hatırlatıcısı gönder"),
    ("marketingEmails", "Pazarlama E-postaları", "Promosyon ve kampanya e-postalarını al"),
];

impl NotificationSettings {
    pub fn get(&self, key: &str) -> bool {
        match key {
            "emailNotifications" => self.email_notifications,
            "smsNotifications" => self.sms_notifications,
            "appointmentReminders" => self.appointment_reminders,
            "marketingEmails" => self.marketing_emails,
            _ => false,
        }
    }

    pub fn set(&mut self, key: &str, value: bool) {
        match key {
            "emailNotifications" => self.email_notifications = value,
            "smsNotifications" => self.sms_notifications = value,
            "appointmentReminders" => self.appointment_reminders = value,
            "marketingEmails" => self.marketing_emails = value,
            _ => log::warn!("[SETTINGS] unknown notification key {}", key),
        }
    }
}

/// Number inputs that fail to parse keep the previous value
pub fn parse_number(input: &str, previous: u32) -> u32 {
    input.trim().parse().unwrap_or(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.business.owner, "Hamza Şahin");
        assert!(!settings.notifications.marketing_emails);
        assert_eq!(settings.security.session_timeout, 30);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = Settings::default().to_json().unwrap();
        assert!(json.contains("\"workingHours\""));
        assert!(json.contains("\"twoFactorAuth\": false"));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Settings::default());
    }

    #[test]
    fn test_notification_toggles() {
        let mut n = Settings::default().notifications;
        for (key, _, _) in NOTIFICATION_TOGGLES {
            let before = n.get(key);
            n.set(key, !before);
            assert_eq!(n.get(key), !before);
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("45", 30), 45);
        assert_eq!(parse_number("", 30), 30);
        assert_eq!(parse_number("abc", 90), 90);
    }
}
