//! Analytics Panel

use leptos::prelude::*;

use super::{PairedBar, PairedBarChart, PanelHeader};
use crate::components::{MetricCard, SelectInput, ShareBar};
use crate::domain::analytics::{seed_analytics, REALTIME};
use crate::domain::metric::{Share, DATE_RANGES};
use crate::util::format_thousands;

fn device_glyph(label: &str) -> &'static str {
    match label {
        "Mobil" => "📱",
        "Masaüstü" => "🖥",
        _ => "🌐",
    }
}

#[component]
fn DeviceRow(share: Share) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <div class="p-3 bg-gray-100 rounded-lg text-xl">{device_glyph(share.label)}</div>
            <div class="flex-1">
                <ShareBar share=share />
            </div>
        </div>
    }
}

#[component]
pub fn Analytics() -> impl IntoView {
    let data = seed_analytics();
    // Only the selector reacts; the figures are fixed
    let range = RwSignal::new("7d".to_string());

    let weekly = data
        .weekly
        .iter()
        .map(|d| PairedBar {
            label: d.day,
            primary: (d.visitors_height(), format!("Ziyaretçi: {}", format_thousands(d.visitors))),
            secondary: (d.page_views_height(), format!("Sayfa Görüntüleme: {}", format_thousands(d.page_views))),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-6">
            <PanelHeader title="Analitik" subtitle="Website performansını ve ziyaretçi davranışlarını analiz edin">
                <SelectInput selected=range options=DATE_RANGES class="w-auto" />
            </PanelHeader>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4">
                {data
                    .overview
                    .metrics()
                    .into_iter()
                    .enumerate()
                    .map(|(index, metric)| view! { <MetricCard metric=metric index=index /> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"Haftalık Trafik"</h3>
                    <PairedBarChart bars=weekly legend=[("bg-primary", "Ziyaretçi"), ("bg-blue-300", "Sayfa Görüntüleme")] />
                </div>

                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"Trafik Kaynakları"</h3>
                    <div class="space-y-4">
                        {data.traffic.into_iter().map(|share| view! { <ShareBar share=share /> }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"En Çok Ziyaret Edilen Sayfalar"</h3>
                    <div class="space-y-4">
                        {data
                            .top_pages
                            .into_iter()
                            .enumerate()
                            .map(|(i, page)| view! {
                                <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                    <div class="flex items-center space-x-3">
                                        <span class="w-6 h-6 bg-primary text-black rounded-full flex items-center justify-center text-sm font-medium">
                                            {i + 1}
                                        </span>
                                        <span class="font-medium text-gray-900">{page.page}</span>
                                    </div>
                                    <div class="text-right">
                                        <div class="font-medium text-gray-900">{format_thousands(page.views)}</div>
                                        <div class="text-sm text-gray-600">{format!("{}%", page.percentage)}</div>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"Cihaz Dağılımı"</h3>
                    <div class="space-y-6">
                        {data.devices.into_iter().map(|share| view! { <DeviceRow share=share /> }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="admin-card">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-lg font-semibold text-gray-900">"Gerçek Zamanlı Aktivite"</h3>
                    <div class="flex items-center space-x-2">
                        <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                        <span class="text-sm text-gray-600">"Canlı"</span>
                    </div>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {REALTIME
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="text-center">
                                <div class="text-3xl font-bold text-gray-900 mb-2">{*value}</div>
                                <div class="text-sm text-gray-600">{*label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_glyph() {
        assert_eq!(device_glyph("Mobil"), "📱");
        assert_eq!(device_glyph("Tablet"), "🌐");
    }
}
