//! Small Helpers
//!
//! Class-name merging, case-insensitive matching and Turkish display formats.

use chrono::NaiveDate;

const FONT_SIZES: &[&str] = &[
    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl", "text-4xl", "text-5xl",
    "text-6xl", "text-7xl", "text-8xl", "text-9xl",
];
const TEXT_ALIGN: &[&str] = &["text-left", "text-center", "text-right", "text-justify", "text-start", "text-end"];
const BORDER_WIDTHS: &[&str] = &["border", "border-0", "border-2", "border-4", "border-8"];
const BORDER_STYLES: &[&str] = &["border-solid", "border-dashed", "border-dotted", "border-double", "border-none"];
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l"];
const ROUNDED_SIDES: &[&str] = &["t", "r", "b", "l", "tl", "tr", "bl", "br"];

/// Utility prefixes where a later class replaces an earlier one
const PREFIX_GROUPS: &[(&str, &str)] = &[("bg-", "bg"), ("h-", "height"), ("w-", "width"), ("px-", "px"), ("py-", "py")];

/// Conflict group of a class with its variant prefix removed.
///
/// Exact lists come before prefixes so `text-sm` is not mistaken for a color
/// and `border-2` not for a border color.
fn base_group(base: &str) -> Option<String> {
    if FONT_SIZES.contains(&base) {
        return Some("font-size".to_string());
    }
    if TEXT_ALIGN.contains(&base) {
        return Some("text-align".to_string());
    }
    // Arbitrary values: `text-[13px]` is a size, `text-[#fff]` a color
    if let Some(value) = base.strip_prefix("text-[") {
        let group = if value.starts_with(|c: char| c.is_ascii_digit()) { "font-size" } else { "text-color" };
        return Some(group.to_string());
    }
    if base.starts_with("text-") {
        return Some("text-color".to_string());
    }
    if BORDER_WIDTHS.contains(&base) {
        return Some("border-width".to_string());
    }
    if BORDER_STYLES.contains(&base) {
        return Some("border-style".to_string());
    }
    if let Some(rest) = base.strip_prefix("border-") {
        let (side, width) = rest.split_once('-').unwrap_or((rest, ""));
        if BORDER_SIDES.contains(&side) && width.chars().all(|c| c.is_ascii_digit()) {
            return Some(format!("border-width-{}", side));
        }
        return Some("border-color".to_string());
    }
    if base == "rounded" {
        return Some("rounded".to_string());
    }
    if let Some(rest) = base.strip_prefix("rounded-") {
        let side = rest.split_once('-').map_or(rest, |(side, _)| side);
        if ROUNDED_SIDES.contains(&side) {
            return Some(format!("rounded-{}", side));
        }
        return Some("rounded".to_string());
    }
    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| base.starts_with(prefix))
        .map(|(_, group)| group.to_string())
}

fn conflict_group(class: &str) -> Option<String> {
    // Variants such as `hover:` or `md:` form their own namespace
    let (variant, base) = match class.rfind(':') {
        Some(i) => (&class[..=i], &class[i + 1..]),
        None => ("", class),
    };
    base_group(base).map(|group| format!("{}{}", variant, group))
}

/// Join class lists, dropping empties and letting later utilities in the
/// same group override earlier ones.
pub fn cn(parts: &[&str]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for class in parts.iter().flat_map(|p| p.split_whitespace()) {
        if let Some(group) = conflict_group(class) {
            out.retain(|existing| conflict_group(existing).as_deref() != Some(group.as_str()));
        }
        out.retain(|existing| *existing != class);
        out.push(class);
    }
    out.join(" ")
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `45230` -> `45.230`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `₺45.230`
pub fn format_try(value: u64) -> String {
    format!("₺{}", format_thousands(value))
}

/// `dd.mm.yyyy`
pub fn format_date_tr(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Infallible date constructor for seed literals
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// First letter of each word: "Ahmet Yılmaz" -> "AY"
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).collect()
}

/// First whitespace-separated word, or `-` for an empty string
pub fn first_word(text: &str) -> String {
    text.split_whitespace().next().unwrap_or("-").to_string()
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_later_class_wins() {
        assert_eq!(cn(&["h-11 px-6", "h-9 px-3"]), "h-9 px-3");
        assert_eq!(cn(&["bg-primary text-black", "bg-white"]), "text-black bg-white");
    }

    #[test]
    fn test_cn_keeps_size_and_color_apart() {
        assert_eq!(cn(&["text-sm text-white", "text-lg"]), "text-white text-lg");
        assert_eq!(cn(&["text-black", "text-primary"]), "text-primary");
        assert_eq!(cn(&["text-center text-white"]), "text-center text-white");
    }

    #[test]
    fn test_cn_skips_empty_and_keeps_variants_apart() {
        assert_eq!(cn(&["", "  rounded-lg ", ""]), "rounded-lg");
        assert_eq!(cn(&["hover:bg-primary", "bg-black"]), "hover:bg-primary bg-black");
        assert_eq!(cn(&["flex", "flex"]), "flex");
    }

    #[test]
    fn test_cn_variant_classes_override_within_variant() {
        assert_eq!(
            cn(&["bg-primary hover:bg-primary-dark", "bg-green-600 hover:bg-green-700"]),
            "bg-green-600 hover:bg-green-700"
        );
        assert_eq!(cn(&["hover:text-primary", "md:text-lg"]), "hover:text-primary md:text-lg");
    }

    #[test]
    fn test_cn_large_and_arbitrary_sizes_keep_color() {
        assert_eq!(cn(&["text-white", "text-5xl"]), "text-white text-5xl");
        assert_eq!(cn(&["text-white text-9xl"]), "text-white text-9xl");
        assert_eq!(cn(&["text-white", "text-[13px]"]), "text-white text-[13px]");
        assert_eq!(cn(&["text-white", "text-[#f59e0b]"]), "text-[#f59e0b]");
    }

    #[test]
    fn test_cn_border_width_and_color_are_separate() {
        assert_eq!(cn(&["border-2 border-gray-300"]), "border-2 border-gray-300");
        assert_eq!(cn(&["border border-border", "border-gray-300"]), "border border-gray-300");
        assert_eq!(cn(&["border-t", "border-t-2"]), "border-t-2");
        assert_eq!(cn(&["border-t border-b"]), "border-t border-b");
        assert_eq!(cn(&["border-dashed border-primary"]), "border-dashed border-primary");
    }

    #[test]
    fn test_cn_rounded_sides() {
        assert_eq!(cn(&["rounded-lg", "rounded-t-none"]), "rounded-lg rounded-t-none");
        assert_eq!(cn(&["rounded", "rounded-xl"]), "rounded-xl");
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Ahmet Yılmaz", "ahmet"));
        assert!(contains_ci("Ahmet Yılmaz", ""));
        assert!(!contains_ci("Ahmet Yılmaz", "mehmet"));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(415), "415");
        assert_eq!(format_thousands(4400), "4.400");
        assert_eq!(format_thousands(45230), "45.230");
        assert_eq!(format_thousands(1234567), "1.234.567");
        assert_eq!(format_try(12450), "₺12.450");
    }

    #[test]
    fn test_format_date_tr() {
        assert_eq!(format_date_tr(date(2024, 1, 5)), "05.01.2024");
    }

    #[test]
    fn test_initials_and_first_word() {
        assert_eq!(initials("Ahmet Yılmaz"), "AY");
        assert_eq!(initials("Emre  Şahin"), "EŞ");
        assert_eq!(first_word("Komple Bakım"), "Komple");
        assert_eq!(first_word(""), "-");
    }
}
