use leptos::prelude::*;

use super::{mutate, PanelHeader};
use crate::components::{Button, CountCard, DeleteConfirmButton, EmptyState, FilterChips, SearchInput};
use crate::domain::metric::width_style;
use crate::domain::service::{filter_services, Service, ServiceStats, ALL_CATEGORIES, SERVICE_CATEGORIES};
use crate::domain::{MemoryRepository, Repository};
use crate::util::format_try;

#[component]
fn ServiceCard(service: Service, on_toggle: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    let status_class = if service.is_active { "bg-green-100 text-green-800" } else { "bg-red-100 text-red-800" };
    let toggle_class = if service.is_active {
        "bg-red-100 text-red-800 hover:bg-red-200"
    } else {
        "bg-green-100 text-green-800 hover:bg-green-200"
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden hover:shadow-md transition-shadow fade-up">
            <div class="relative h-48">
                <img src=service.image.clone() alt=service.name.clone() class="w-full h-full object-cover" />
                <div class="absolute top-4 right-4 flex gap-2">
                    <span class="bg-primary text-black px-2 py-1 rounded-full text-sm font-medium">{format!("₺{}", service.price)}</span>
                    <span class=format!("px-2 py-1 rounded-full text-sm font-medium {}", status_class)>{service.status_label()}</span>
                </div>
            </div>

            <div class="p-6">
                <div class="mb-3">
                    <h3 class="text-lg font-semibold text-gray-900 mb-1">{service.name.clone()}</h3>
                    <span class="inline-block px-2 py-1 bg-gray-100 text-gray-700 rounded-full text-xs">{service.category.clone()}</span>
                </div>
                <p class="text-gray-600 text-sm mb-4">{service.description.clone()}</p>

                <div class="flex items-center justify-between mb-4 text-sm text-gray-600">
                    <span>{format!("🕘 {} dk", service.duration)}</span>
                    <span>
                        <span class="text-yellow-400 mr-1">"★"</span>
                        {format!("%{} popüler", service.popularity)}
                    </span>
                </div>

                <div class="mb-4">
                    <div class="flex justify-between text-sm text-gray-600 mb-1">
                        <span>"Popülerlik"</span>
                        <span>{format!("{}%", service.popularity)}</span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-2">
                        <div class="bg-primary h-2 rounded-full transition-all duration-300" style=width_style(service.popularity as f64)></div>
                    </div>
                </div>

                <div class="flex items-center justify-between">
                    <button
                        type="button"
                        class=format!("px-3 py-1 rounded-lg text-sm font-medium transition-colors {}", toggle_class)
                        on:click=move |_| on_toggle.run(())
                    >
                        {service.toggle_label()}
                    </button>
                    <DeleteConfirmButton button_class="text-gray-600 hover:text-red-600" on_confirm=on_delete />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Services(repository: MemoryRepository<Service>) -> impl IntoView {
    let repo = RwSignal::new(repository);
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_string());

    let stats = Memo::new(move |_| repo.with(|r| ServiceStats::from_items(r.list())));
    let visible = Memo::new(move |_| {
        category.with(|c| query.with(|q| repo.with(|r| filter_services(r.list(), q, c))))
    });

    let chips = SERVICE_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect::<Vec<_>>();
    let add = Callback::new(|_: web_sys::MouseEvent| log::info!("[ADMIN] new service form requested"));

    view! {
        <div class="space-y-6">
            <PanelHeader title="Hizmet Yönetimi" subtitle="Salon hizmetlerini görüntüleyin ve yönetin">
                <Button on_click=add>
                    <span class="mr-2">"+"</span>
                    "Yeni Hizmet"
                </Button>
            </PanelHeader>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <CountCard label="Toplam Hizmet" value=Signal::derive(move || stats.get().total.to_string()) color="bg-blue-500" index=0 />
                <CountCard label="Aktif Hizmet" value=Signal::derive(move || stats.get().active.to_string()) color="bg-green-500" index=1 />
                <CountCard label="Ortalama Fiyat" value=Signal::derive(move || format!("₺{}", stats.get().average_price)) color="bg-primary" index=2 />
                <CountCard label="En Popüler" value=Signal::derive(move || stats.get().most_popular) color="bg-purple-500" index=3 />
            </div>

            <div class="admin-card">
                <div class="flex flex-col lg:flex-row gap-4">
                    <div class="flex-1">
                        <SearchInput query=query placeholder="Hizmet adı veya açıklama ara..." />
                    </div>
                    <FilterChips options=chips selected=category />
                </div>
                <p class="mt-4 text-sm text-gray-500">
                    {move || format!("Tahmini gelir: {}", format_try(stats.get().estimated_revenue))}
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || visible.get()
                    key=|s| (s.id, s.is_active)
                    children=move |service| {
                        let id = service.id;
                        let on_toggle = Callback::new(move |_| {
                            mutate(repo, "toggle service", |r| r.replace_with(id, |s| s.is_active = !s.is_active))
                        });
                        let on_delete = Callback::new(move |_| mutate(repo, "delete service", |r| r.delete(id)));
                        view! { <ServiceCard service=service on_toggle=on_toggle on_delete=on_delete /> }
                    }
                />
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <EmptyState title="Hizmet bulunamadı" message="Arama kriterlerinize uygun hizmet bulunmuyor." />
            </Show>
        </div>
    }
}
