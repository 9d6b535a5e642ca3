//! Finance Panel

use leptos::prelude::*;

use super::{PairedBar, PairedBarChart, PanelHeader};
use crate::components::{Button, ButtonVariant, EmptyState, MetricCard, SelectInput, ShareBar};
use crate::domain::finance::{filter_transactions, seed_finance, PAYMENT_FILTERS};
use crate::domain::metric::DATE_RANGES;
use crate::util::{format_date_tr, format_thousands, format_try, initials};

const COLUMNS: [&str; 5] = ["Müşteri", "Hizmet", "Tutar", "Ödeme Yöntemi", "Tarih"];

#[component]
pub fn Finance() -> impl IntoView {
    let data = seed_finance();
    let range = RwSignal::new("30d".to_string());
    let payment = RwSignal::new("all".to_string());

    let transactions = StoredValue::new(data.transactions);
    let visible = Memo::new(move |_| transactions.with_value(|all| filter_transactions(all, &payment.get())));

    let monthly = data
        .monthly
        .iter()
        .map(|m| PairedBar {
            label: m.month,
            primary: (m.revenue_height(), format!("Gelir: {}", format_try(m.revenue))),
            secondary: (m.expenses_height(), format!("Gider: {}", format_try(m.expenses))),
        })
        .collect::<Vec<_>>();

    let report = Callback::new(|_: web_sys::MouseEvent| log::info!("[FINANCE] report download requested"));

    view! {
        <div class="space-y-6">
            <PanelHeader title="Finansal Yönetim" subtitle="Gelir, gider ve finansal raporları görüntüleyin">
                <div class="flex gap-2">
                    <SelectInput selected=range options=DATE_RANGES class="w-auto" />
                    <Button variant=ButtonVariant::Outline class="text-gray-700 border-gray-300" on_click=report>
                        <span class="mr-2">"⬇"</span>
                        "Rapor İndir"
                    </Button>
                </div>
            </PanelHeader>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
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
                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"Aylık Gelir Trendi"</h3>
                    <PairedBarChart bars=monthly legend=[("bg-green-500", "Gelir"), ("bg-red-300", "Gider")] />
                </div>

                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-6">"Hizmet Bazında Gelir"</h3>
                    <div class="space-y-4">
                        {data
                            .service_revenue
                            .iter()
                            .enumerate()
                            .map(|(rank, item)| {
                                let detail = format!("₺{} ({}%)", format_thousands(item.revenue), item.percentage);
                                view! { <ShareBar share=item.share(rank) detail=detail /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200">
                <div class="p-6 border-b border-gray-200">
                    <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                        <h3 class="text-lg font-semibold text-gray-900">"Son İşlemler"</h3>
                        <SelectInput selected=payment options=PAYMENT_FILTERS class="w-auto" />
                    </div>
                </div>
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <EmptyState title="İşlem bulunamadı" message="Seçilen ödeme yöntemiyle işlem yok." /> }
                >
                    <div class="overflow-x-auto">
                        <table class="w-full">
                            <thead class="bg-gray-50">
                                <tr>
                                    {COLUMNS
                                        .iter()
                                        .map(|c| view! {
                                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{*c}</th>
                                        })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                <For
                                    each=move || visible.get()
                                    key=|t| t.id
                                    children=|t| view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <div class="flex items-center">
                                                    <div class="w-8 h-8 bg-primary rounded-full flex items-center justify-center">
                                                        <span class="text-black font-medium text-sm">{initials(&t.customer)}</span>
                                                    </div>
                                                    <div class="ml-3 text-sm font-medium text-gray-900">{t.customer.clone()}</div>
                                                </div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{t.service.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                                {format_try(t.amount as u64)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <span class=format!("inline-flex px-2 py-1 text-xs font-semibold rounded-full {}", t.method.badge_class())>
                                                    {t.method.label()}
                                                </span>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_date_tr(t.date)}</td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}
