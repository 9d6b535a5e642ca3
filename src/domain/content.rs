//! Site Content
//!
//! Editable text blocks and the color palette of the public site.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Html,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Slug such as `hero-title`
    pub id: String,
    pub title: String,
    pub content: String,
    pub kind: ContentKind,
    pub is_editing: bool,
}

/// Flip the editing flag of one section
pub fn toggle_edit(sections: &mut [ContentSection], slug: &str) {
    if let Some(s) = sections.iter_mut().find(|s| s.id == slug) {
        s.is_editing = !s.is_editing;
    }
}

/// Live edit while the textarea is open
pub fn edit_content(sections: &mut [ContentSection], slug: &str, text: String) {
    if let Some(s) = sections.iter_mut().find(|s| s.id == slug) {
        s.content = text;
    }
}

/// Store the text and close the editor
pub fn save_content(sections: &mut [ContentSection], slug: &str, text: String) {
    if let Some(s) = sections.iter_mut().find(|s| s.id == slug) {
        s.content = text;
        s.is_editing = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTab {
    #[default]
    Content,
    Colors,
    Fonts,
}

impl ContentTab {
    pub const ALL: [ContentTab; 3] = [ContentTab::Content, ContentTab::Colors, ContentTab::Fonts];

    pub fn label(&self) -> &'static str {
        match self {
            ContentTab::Content => "İçerik",
            ContentTab::Colors => "Renkler",
            ContentTab::Fonts => "Yazı Tipleri",
        }
    }
}

/// Site colors as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,
    pub primary_dark: String,
    pub primary_light: String,
    pub background: String,
    pub surface: String,
    pub surface_light: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
}

/// Palette keys in display order
pub const PALETTE_KEYS: &[&str] = &[
    "primary",
    "primaryDark",
    "primaryLight",
    "background",
    "surface",
    "surfaceLight",
    "textPrimary",
    "textSecondary",
    "textMuted",
];

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#F59E0B".to_string(),
            primary_dark: "#D97706".to_string(),
            primary_light: "#FCD34D".to_string(),
            background: "#000000".to_string(),
            surface: "#111827".to_string(),
            surface_light: "#1F2937".to_string(),
            text_primary: "#FFFFFF".to_string(),
            text_secondary: "#D1D5DB".to_string(),
            text_muted: "#9CA3AF".to_string(),
        }
    }
}

impl ColorPalette {
    fn slot(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "primary" => &mut self.primary,
            "primaryDark" => &mut self.primary_dark,
            "primaryLight" => &mut self.primary_light,
            "background" => &mut self.background,
            "surface" => &mut self.surface,
            "surfaceLight" => &mut self.surface_light,
            "textPrimary" => &mut self.text_primary,
            "textSecondary" => &mut self.text_secondary,
            "textMuted" => &mut self.text_muted,
            _ => return None,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "primary" => &self.primary,
            "primaryDark" => &self.primary_dark,
            "primaryLight" => &self.primary_light,
            "background" => &self.background,
            "surface" => &self.surface,
            "surfaceLight" => &self.surface_light,
            "textPrimary" => &self.text_primary,
            "textSecondary" => &self.text_secondary,
            "textMuted" => &self.text_muted,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn set(&mut self, key: &str, value: String) -> DomainResult<()> {
        let slot = self
            .slot(key)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown color key {}", key)))?;
        *slot = value;
        Ok(())
    }
}

/// `primaryDark` -> `Primary Dark`
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

fn section(id: &str, title: &str, content: &str, kind: ContentKind) -> ContentSection {
    ContentSection {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        kind,
        is_editing: false,
    }
}

/// Mock content blocks
pub fn seed_sections() -> Vec<ContentSection> {
    use ContentKind::*;
    vec![
        section("hero-title", "Ana Sayfa Başlık", "BIG BOSS Premium Erkek Kuaförlük", Text),
        section(
            "hero-subtitle",
            "Ana Sayfa Alt Başlık",
            "Profesyonel ekibimiz ve modern tekniklerimizle sizlere en iyi hizmeti sunuyoruz.",
            Text,
        ),
        section(
            "about-content",
            "Hakkımızda İçeriği",
            "BIG BOSS, HAMZA ŞAHİN tarafından İzmir Buca'da kurulmuş premium erkek kuaförlük salonudur. Modern teknikler ve geleneksel ustalık bir araya getirilerek, her müşterimize özel hizmet sunuyoruz.",
            Html,
        ),
        section("contact-phone", "İletişim Telefonu", "0531 491 80 35", Text),
        section("contact-address", "Salon Adresi", "İzmir, Buca", Text),
        section("working-hours", "Çalışma Saatleri", "Pazartesi - Cumartesi: 09:00 - 20:00\nPazar: Kapalı", Text),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(sections: &[ContentSection]) -> Vec<&str> {
        sections.iter().filter(|s| s.is_editing).map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_edit() {
        let mut sections = seed_sections();
        toggle_edit(&mut sections, "contact-phone");
        assert_eq!(editing(&sections), vec!["contact-phone"]);
        toggle_edit(&mut sections, "contact-phone");
        assert!(editing(&sections).is_empty());
    }

    #[test]
    fn test_save_sets_content_and_closes() {
        let mut sections = seed_sections();
        toggle_edit(&mut sections, "contact-address");
        edit_content(&mut sections, "contact-address", "İzmir, Bor".to_string());
        assert!(sections[4].is_editing);
        save_content(&mut sections, "contact-address", "İzmir, Buca Merkez".to_string());
        assert_eq!(sections[4].content, "İzmir, Buca Merkez");
        assert!(!sections[4].is_editing);
        assert_eq!(sections[3].content, "0531 491 80 35");
    }

    #[test]
    fn test_unknown_slug_is_ignored() {
        let mut sections = seed_sections();
        save_content(&mut sections, "missing", "x".to_string());
        assert_eq!(sections, seed_sections());
    }

    #[test]
    fn test_palette_update() {
        let mut palette = ColorPalette::default();
        palette.set("primaryDark", "#000001".to_string()).unwrap();
        assert_eq!(palette.get("primaryDark"), Some("#000001"));
        assert_eq!(palette.primary, "#F59E0B");
        assert!(palette.set("accent", "#fff".to_string()).is_err());
        assert!(PALETTE_KEYS.iter().all(|k| palette.get(k).is_some()));
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("primaryDark"), "Primary Dark");
        assert_eq!(humanize_key("textSecondary"), "Text Secondary");
        assert_eq!(humanize_key("surface"), "Surface");
    }
}
