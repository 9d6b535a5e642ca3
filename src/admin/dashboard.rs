use leptos::prelude::*;

use super::AdminPage;
use crate::components::{MetricCard, ShareBar};
use crate::context::use_admin;
use crate::domain::dashboard::{self, QUICK_ACTIONS, WEEKDAYS, WEEKLY_TREND};
use crate::util::initials;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_admin();

    view! {
        <div class="space-y-6">
            <div class="bg-gradient-to-r from-primary to-primary-dark rounded-xl p-6 text-black fade-up">
                <h1 class="text-2xl font-bold mb-2">"Hoş Geldiniz, Hamza Şahin!"</h1>
                <p class="text-black/80">"BIG BOSS kuaför yönetim paneline hoş geldiniz. Bugün 8 randevunuz var."</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {dashboard::metrics()
                    .into_iter()
                    .enumerate()
                    .map(|(index, metric)| view! { <MetricCard metric=metric index=index /> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 admin-card">
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-semibold text-gray-900">"Bugünkü Randevular"</h3>
                        <button
                            type="button"
                            class="text-sm text-primary-dark hover:underline"
                            on:click=move |_| ctx.navigate(AdminPage::Appointments)
                        >
                            "Tümünü Gör"
                        </button>
                    </div>
                    <div class="space-y-4">
                        {dashboard::todays_appointments()
                            .into_iter()
                            .map(|row| view! {
                                <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
                                    <div class="flex items-center space-x-4">
                                        <div class="w-10 h-10 bg-primary rounded-full flex items-center justify-center">
                                            <span class="text-black font-semibold text-sm">{initials(row.customer)}</span>
                                        </div>
                                        <div>
                                            <p class="font-medium text-gray-900">{row.customer}</p>
                                            <p class="text-sm text-gray-600">{row.service}</p>
                                        </div>
                                    </div>
                                    <div class="text-right">
                                        <p class="font-medium text-gray-900">{row.time}</p>
                                        <span class=format!("inline-flex px-2 py-1 text-xs font-medium rounded-full {}", row.status.badge_class())>
                                            {row.status.label()}
                                        </span>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-4">"Hızlı İşlemler"</h3>
                    <div class="space-y-3">
                        {QUICK_ACTIONS
                            .iter()
                            .map(|(label, target, color)| {
                                let page = AdminPage::from_id(target);
                                view! {
                                    <button
                                        type="button"
                                        class="w-full flex items-center space-x-3 p-3 rounded-lg hover:bg-gray-50 transition-colors text-left"
                                        on:click=move |_| ctx.navigate(page)
                                    >
                                        <div class=format!("p-2 rounded-lg text-white text-sm leading-none {}", color)>{page.glyph()}</div>
                                        <span class="font-medium text-gray-900">{*label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-4">"Haftalık Randevu Trendi"</h3>
                    <div class="h-64 flex items-end justify-between space-x-2">
                        {WEEKLY_TREND
                            .iter()
                            .zip(WEEKDAYS)
                            .map(|(height, day)| view! {
                                <div class="flex-1 h-full flex flex-col items-center justify-end">
                                    <div
                                        class="w-full bg-primary rounded-t-lg transition-all duration-500"
                                        style=format!("height: {}%;", height)
                                    ></div>
                                    <span class="text-xs text-gray-600 mt-2">{day}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="admin-card">
                    <h3 class="text-lg font-semibold text-gray-900 mb-4">"Popüler Hizmetler"</h3>
                    <div class="space-y-4">
                        {dashboard::popular_services()
                            .into_iter()
                            .map(|share| view! { <ShareBar share=share /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
