use leptos::prelude::*;

use super::{mutate, PanelHeader};
use crate::components::{Button, CountCard, DeleteConfirmButton, EmptyState, SearchInput, SelectInput};
use crate::domain::appointment::{filter_appointments, Appointment, AppointmentStats, AppointmentStatus, StatusFilter, STATUS_FILTERS};
use crate::domain::{MemoryRepository, Repository};
use crate::util::initials;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

#[component]
pub fn Appointments(repository: MemoryRepository<Appointment>) -> impl IntoView {
    let repo = RwSignal::new(repository);
    let query = RwSignal::new(String::new());
    let status = RwSignal::new("all".to_string());

    let stats = Memo::new(move |_| repo.with(|r| AppointmentStats::from_items(r.list())));
    let visible = Memo::new(move |_| {
        let filter = StatusFilter::from_str(&status.get());
        query.with(|q| repo.with(|r| filter_appointments(r.list(), q, filter)))
    });

    let advance = move |id: u32| {
        mutate(repo, "advance appointment status", |r| {
            r.replace_with(id, |a| {
                if let Some(next) = a.status.next_status() {
                    a.status = next;
                }
            })
        })
    };
    let remove = move |id: u32| mutate(repo, "delete appointment", |r| r.delete(id));
    let add = Callback::new(|_: web_sys::MouseEvent| log::info!("[ADMIN] new appointment form requested"));

    view! {
        <div class="space-y-6">
            <PanelHeader title="Randevu Yönetimi" subtitle="Tüm randevuları görüntüleyin ve yönetin">
                <Button on_click=add>
                    <span class="mr-2">"+"</span>
                    "Yeni Randevu"
                </Button>
            </PanelHeader>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <CountCard label="Toplam Randevu" value=Signal::derive(move || stats.get().total.to_string()) color="bg-blue-500" index=0 />
                <CountCard label="Bekleyen" value=Signal::derive(move || stats.get().pending.to_string()) color="bg-yellow-500" index=1 />
                <CountCard label="Onaylanan" value=Signal::derive(move || stats.get().confirmed.to_string()) color="bg-green-500" index=2 />
                <CountCard label="Tamamlanan" value=Signal::derive(move || stats.get().completed.to_string()) color="bg-purple-500" index=3 />
            </div>

            <div class="admin-card">
                <div class="flex flex-col sm:flex-row gap-4">
                    <div class="flex-1">
                        <SearchInput query=query placeholder="Müşteri adı veya telefon ara..." />
                    </div>
                    <div class="sm:w-48">
                        <SelectInput selected=status options=STATUS_FILTERS />
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead class="bg-gray-50">
                            <tr>
                                {["Müşteri", "Hizmet", "Tarih & Saat", "Durum", "Fiyat", "İşlemler"]
                                    .into_iter()
                                    .map(|h| view! { <th class=TH_CLASS>{h}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || visible.get()
                                key=|a| (a.id, a.status)
                                children=move |a| {
                                    let id = a.id;
                                    let advance_button = a.status.advance_label().map(|label| {
                                        let color = match a.status {
                                            AppointmentStatus::Pending => "text-green-600 hover:text-green-900",
                                            _ => "text-blue-600 hover:text-blue-900",
                                        };
                                        view! {
                                            <button type="button" class=color title=label on:click=move |_| advance(id)>"✔"</button>
                                        }
                                    });
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <div class="flex items-center">
                                                    <div class="w-10 h-10 bg-primary rounded-full flex items-center justify-center">
                                                        <span class="text-black font-medium text-sm">{initials(&a.customer)}</span>
                                                    </div>
                                                    <div class="ml-4">
                                                        <div class="text-sm font-medium text-gray-900">{a.customer.clone()}</div>
                                                        <div class="text-sm text-gray-500">{a.phone.clone()}</div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <div class="text-sm text-gray-900">{a.service.clone()}</div>
                                                {a.notes.clone().map(|n| view! { <div class="text-sm text-gray-500">{n}</div> })}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <div class="text-sm text-gray-900">{a.date.clone()}</div>
                                                <div class="text-sm text-gray-500">{a.time.clone()}</div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <span class=format!("inline-flex px-2 py-1 text-xs font-semibold rounded-full {}", a.status.badge_class())>
                                                    {a.status.label()}
                                                </span>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format!("₺{}", a.price)}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                                                <div class="flex items-center space-x-2">
                                                    {advance_button}
                                                    <DeleteConfirmButton on_confirm=Callback::new(move |_| remove(id)) />
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <EmptyState title="Randevu bulunamadı" message="Arama kriterlerinize uygun randevu bulunmuyor." />
            </Show>
        </div>
    }
}
