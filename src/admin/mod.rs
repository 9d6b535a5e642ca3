//! Admin Console
//!
//! Nine mock-data panels behind a sidebar layout. Each panel owns its own
//! state; nothing is shared between panels or persisted.

mod analytics;
mod appointments;
mod content;
mod customers;
mod dashboard;
mod finance;
mod gallery;
mod layout;
mod services;
mod settings;

use leptos::prelude::*;

use crate::context::AdminContext;
use crate::domain::metric::height_style;
use crate::domain::appointment::seed_appointments;
use crate::domain::customer::seed_customers;
use crate::domain::gallery::seed_images;
use crate::domain::service::seed_services;
use crate::domain::{DomainResult, Entity, MemoryRepository};

/// Admin panels in sidebar order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdminPage {
    #[default]
    Dashboard,
    Appointments,
    Customers,
    Services,
    Gallery,
    Content,
    Analytics,
    Finance,
    Settings,
}

impl AdminPage {
    pub const ALL: [AdminPage; 9] = [
        AdminPage::Dashboard,
        AdminPage::Appointments,
        AdminPage::Customers,
        AdminPage::Services,
        AdminPage::Gallery,
        AdminPage::Content,
        AdminPage::Analytics,
        AdminPage::Finance,
        AdminPage::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "dashboard",
            AdminPage::Appointments => "appointments",
            AdminPage::Customers => "customers",
            AdminPage::Services => "services",
            AdminPage::Gallery => "gallery",
            AdminPage::Content => "content",
            AdminPage::Analytics => "analytics",
            AdminPage::Finance => "finance",
            AdminPage::Settings => "settings",
        }
    }

    /// Unknown ids fall back to the dashboard
    pub fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|p| p.id() == id).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "Dashboard",
            AdminPage::Appointments => "Randevular",
            AdminPage::Customers => "Müşteriler",
            AdminPage::Services => "Hizmetler",
            AdminPage::Gallery => "Galeri",
            AdminPage::Content => "İçerik Yönetimi",
            AdminPage::Analytics => "Analitik",
            AdminPage::Finance => "Finansal",
            AdminPage::Settings => "Ayarlar",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "▦",
            AdminPage::Appointments => "📅",
            AdminPage::Customers => "👥",
            AdminPage::Services => "✂",
            AdminPage::Gallery => "🖼",
            AdminPage::Content => "📝",
            AdminPage::Analytics => "📊",
            AdminPage::Finance => "₺",
            AdminPage::Settings => "⚙",
        }
    }
}

/// Root of the admin console
#[component]
pub fn AdminPanel() -> impl IntoView {
    let ctx = AdminContext::new(signal(AdminPage::Dashboard), signal(false));
    provide_context(ctx);

    view! {
        <layout::AdminLayout>
            {move || match ctx.current_page.get() {
                AdminPage::Dashboard => view! { <dashboard::Dashboard /> }.into_any(),
                AdminPage::Appointments => view! { <appointments::Appointments repository=MemoryRepository::seeded(seed_appointments()) /> }.into_any(),
                AdminPage::Customers => view! { <customers::Customers repository=MemoryRepository::seeded(seed_customers()) /> }.into_any(),
                AdminPage::Services => view! { <services::Services repository=MemoryRepository::seeded(seed_services()) /> }.into_any(),
                AdminPage::Gallery => view! { <gallery::Gallery repository=MemoryRepository::seeded(seed_images()) /> }.into_any(),
                AdminPage::Content => view! { <content::ContentManagement /> }.into_any(),
                AdminPage::Analytics => view! { <analytics::Analytics /> }.into_any(),
                AdminPage::Finance => view! { <finance::Finance /> }.into_any(),
                AdminPage::Settings => view! { <settings::SettingsPanel /> }.into_any(),
            }}
        </layout::AdminLayout>
    }
}

/// Title and subtitle at the top of a panel
#[component]
fn PanelHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
                <p class="text-gray-600">{subtitle}</p>
            </div>
            {children.map(|c| c())}
        </div>
    }
}

/// One column of a two-series bar chart
struct PairedBar {
    label: &'static str,
    primary: (f64, String),
    secondary: (f64, String),
}

/// Two stacked bars per column, heights in percent of the chart
#[component]
fn PairedBarChart(
    bars: Vec<PairedBar>,
    /// (color class, legend label) for the upper and lower series
    legend: [(&'static str, &'static str); 2],
) -> impl IntoView {
    let [(upper, upper_label), (lower, lower_label)] = legend;
    view! {
        <div class="h-64 flex items-end justify-between space-x-2">
            {bars
                .into_iter()
                .map(|bar| view! {
                    <div class="flex-1 flex flex-col items-center h-full justify-end">
                        <div class="w-full h-full flex flex-col justify-end space-y-1">
                            <div
                                class=format!("w-full rounded-t-lg transition-all duration-500 {}", upper)
                                style=height_style(bar.primary.0)
                                title=bar.primary.1
                            ></div>
                            <div
                                class=format!("w-full transition-all duration-500 {}", lower)
                                style=height_style(bar.secondary.0)
                                title=bar.secondary.1
                            ></div>
                        </div>
                        <span class="text-xs text-gray-600 mt-2">{bar.label}</span>
                    </div>
                })
                .collect_view()}
        </div>
        <div class="flex items-center justify-center space-x-6 mt-4">
            <div class="flex items-center space-x-2">
                <div class=format!("w-3 h-3 rounded {}", upper)></div>
                <span class="text-sm text-gray-600">{upper_label}</span>
            </div>
            <div class="flex items-center space-x-2">
                <div class=format!("w-3 h-3 rounded {}", lower)></div>
                <span class="text-sm text-gray-600">{lower_label}</span>
            </div>
        </div>
    }
}

/// Run a repository mutation, logging the outcome
fn mutate<T, R>(
    repo: RwSignal<MemoryRepository<T>>,
    action: &str,
    f: impl FnOnce(&mut MemoryRepository<T>) -> DomainResult<R>,
) where
    T: Entity + Send + Sync + 'static,
{
    repo.update(|r| match f(r) {
        Ok(_) => log::info!("[ADMIN] {}", action),
        Err(e) => log::warn!("[ADMIN] {} failed: {}", action, e),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_round_trip() {
        for page in AdminPage::ALL {
            assert_eq!(AdminPage::from_id(page.id()), page);
        }
    }

    #[test]
    fn test_unknown_page_falls_back_to_dashboard() {
        assert_eq!(AdminPage::from_id("reports"), AdminPage::Dashboard);
        assert_eq!(AdminPage::from_id(""), AdminPage::Dashboard);
    }

    #[test]
    fn test_labels_are_turkish() {
        assert_eq!(AdminPage::Content.label(), "İçerik Yönetimi");
        assert_eq!(AdminPage::Finance.label(), "Finansal");
    }
}
