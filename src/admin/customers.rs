use leptos::prelude::*;

use super::{mutate, PanelHeader};
use crate::components::{Button, CountCard, DeleteConfirmButton, EmptyState, SearchInput, SelectInput};
use crate::domain::customer::{filter_customers, Customer, CustomerSort, CustomerStats, SORT_OPTIONS};
use crate::domain::{MemoryRepository, Repository};
use crate::util::{format_date_tr, initials, today};

/// Five stars, the first `rating` filled
fn stars(rating: u8) -> impl IntoView {
    (0..5u8)
        .map(|i| {
            let class = if i < rating { "text-yellow-400" } else { "text-gray-300" };
            view! { <span class=class>"★"</span> }
        })
        .collect_view()
}

#[component]
fn CustomerCard(customer: Customer, on_delete: Callback<()>) -> impl IntoView {
    let tier = customer.tier();
    view! {
        <div class="admin-card hover:shadow-md transition-shadow fade-up">
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <div class="w-12 h-12 bg-primary rounded-full flex items-center justify-center">
                        <span class="text-black font-medium">{initials(&customer.name)}</span>
                    </div>
                    <div>
                        <h3 class="font-semibold text-gray-900">{customer.name.clone()}</h3>
                        <span class=format!("inline-block px-2 py-1 rounded-full text-xs font-medium {}", tier.badge_class())>
                            {tier.label()}
                        </span>
                    </div>
                </div>
                <DeleteConfirmButton button_class="text-gray-400 hover:text-red-600" on_confirm=on_delete />
            </div>

            <div class="space-y-2 mb-4">
                <div class="flex items-center text-sm text-gray-600">
                    <span class="mr-2">"📞"</span>
                    {customer.phone.clone()}
                </div>
                {customer.email.clone().map(|email| view! {
                    <div class="flex items-center text-sm text-gray-600">
                        <span class="mr-2">"✉"</span>
                        {email}
                    </div>
                })}
            </div>

            <div class="grid grid-cols-2 gap-4 mb-4">
                <div class="text-center">
                    <div class="text-lg font-bold text-gray-900">{customer.total_appointments}</div>
                    <div class="text-xs text-gray-600">"Randevu"</div>
                </div>
                <div class="text-center">
                    <div class="text-lg font-bold text-gray-900">{format!("₺{}", customer.total_spent)}</div>
                    <div class="text-xs text-gray-600">"Toplam"</div>
                </div>
            </div>

            <div class="flex items-center mb-4">
                {stars(customer.rating)}
                <span class="ml-2 text-sm text-gray-600">{format!("({}/5)", customer.rating)}</span>
            </div>

            <div class="text-sm text-gray-600 mb-4">{format!("Son ziyaret: {}", format_date_tr(customer.last_visit))}</div>

            {customer.notes.clone().map(|notes| view! {
                <div class="bg-gray-50 rounded-lg p-3">
                    <p class="text-sm text-gray-700">{notes}</p>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn Customers(repository: MemoryRepository<Customer>) -> impl IntoView {
    let repo = RwSignal::new(repository);
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new("name".to_string());
    let today = today();

    let stats = Memo::new(move |_| repo.with(|r| CustomerStats::from_items(r.list(), today)));
    let visible = Memo::new(move |_| {
        let order = CustomerSort::from_str(&sort.get());
        query.with(|q| repo.with(|r| filter_customers(r.list(), q, order)))
    });

    let add = Callback::new(|_: web_sys::MouseEvent| log::info!("[ADMIN] new customer form requested"));

    view! {
        <div class="space-y-6">
            <PanelHeader title="Müşteri Yönetimi" subtitle="Müşteri bilgilerini görüntüleyin ve yönetin">
                <Button on_click=add>
                    <span class="mr-2">"+"</span>
                    "Yeni Müşteri"
                </Button>
            </PanelHeader>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <CountCard label="Toplam Müşteri" value=Signal::derive(move || stats.get().total.to_string()) color="bg-blue-500" index=0 />
                <CountCard label="VIP Müşteri" value=Signal::derive(move || stats.get().vip.to_string()) color="bg-purple-500" index=1 />
                <CountCard label="Ortalama Harcama" value=Signal::derive(move || format!("₺{}", stats.get().average_spent)) color="bg-green-500" index=2 />
                <CountCard label="Aktif Müşteri" value=Signal::derive(move || stats.get().active.to_string()) color="bg-orange-500" index=3 />
            </div>

            <div class="admin-card">
                <div class="flex flex-col sm:flex-row gap-4">
                    <div class="flex-1">
                        <SearchInput query=query placeholder="Müşteri adı, telefon veya email ara..." />
                    </div>
                    <div class="sm:w-48">
                        <SelectInput selected=sort options=SORT_OPTIONS />
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || visible.get()
                    key=|c| c.id
                    children=move |customer| {
                        let id = customer.id;
                        let on_delete = Callback::new(move |_| mutate(repo, "delete customer", |r| r.delete(id)));
                        view! { <CustomerCard customer=customer on_delete=on_delete /> }
                    }
                />
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <EmptyState title="Müşteri bulunamadı" message="Arama kriterlerinize uygun müşteri bulunmuyor." />
            </Show>
        </div>
    }
}
