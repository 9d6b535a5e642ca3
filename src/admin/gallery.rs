use leptos::prelude::*;

use super::{mutate, PanelHeader};
use crate::components::{Button, CountCard, DeleteConfirmButton, EmptyState, FilterChips, SearchInput};
use crate::domain::gallery::{category_label, filter_images, GalleryImage, GalleryStats, ViewMode, ALL_IMAGES, GALLERY_CATEGORIES};
use crate::domain::{MemoryRepository, Repository};
use crate::util::format_thousands;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

fn view_toggle_class(active: bool) -> &'static str {
    if active {
        "p-2 rounded-lg bg-primary text-black"
    } else {
        "p-2 rounded-lg bg-gray-100 text-gray-700"
    }
}

#[component]
pub fn Gallery(repository: MemoryRepository<GalleryImage>) -> impl IntoView {
    let repo = RwSignal::new(repository);
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_IMAGES.to_string());
    let mode = RwSignal::new(ViewMode::Grid);
    let preview = RwSignal::new(None::<GalleryImage>);

    let stats = Memo::new(move |_| repo.with(|r| GalleryStats::from_items(r.list())));
    let visible = Memo::new(move |_| {
        category.with(|c| query.with(|q| repo.with(|r| filter_images(r.list(), q, c))))
    });

    let remove = move |id: u32| {
        mutate(repo, "delete gallery image", |r| r.delete(id));
        if preview.with_untracked(|p| p.as_ref().is_some_and(|img| img.id == id)) {
            preview.set(None);
        }
    };

    let chips = GALLERY_CATEGORIES
        .iter()
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .collect::<Vec<_>>();
    let upload = Callback::new(|_: web_sys::MouseEvent| log::info!("[ADMIN] photo upload requested"));

    let grid = move || {
        view! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                <For
                    each=move || visible.get()
                    key=|img| img.id
                    children=move |image| {
                        let id = image.id;
                        let shown = image.clone();
                        let shown_again = image.clone();
                        view! {
                            <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden hover:shadow-md transition-shadow fade-up">
                                <div class="relative group">
                                    <img
                                        src=image.src.clone()
                                        alt=image.alt.clone()
                                        class="w-full h-48 object-cover cursor-pointer"
                                        on:click=move |_| preview.set(Some(shown.clone()))
                                    />
                                    <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center pointer-events-none">
                                        <div class="flex gap-2 pointer-events-auto">
                                            <button
                                                type="button"
                                                class="p-2 bg-white rounded-full text-gray-700 hover:text-primary"
                                                title="Önizle"
                                                on:click=move |_| preview.set(Some(shown_again.clone()))
                                            >
                                                "👁"
                                            </button>
                                            <span class="p-2 bg-white rounded-full">
                                                <DeleteConfirmButton
                                                    button_class="text-gray-700 hover:text-red-600"
                                                    on_confirm=Callback::new(move |_| remove(id))
                                                />
                                            </span>
                                        </div>
                                    </div>
                                </div>
                                <div class="p-4">
                                    <h3 class="font-medium text-gray-900 mb-2">{image.alt.clone()}</h3>
                                    <div class="flex items-center justify-between text-sm text-gray-600">
                                        <span class="bg-gray-100 px-2 py-1 rounded">{category_label(&image.category).to_string()}</span>
                                        <span>{format!("{} görüntüleme", image.views)}</span>
                                    </div>
                                    <div class="flex items-center justify-between text-xs text-gray-500 mt-2">
                                        <span>{image.size.clone()}</span>
                                        <span>{image.upload_label()}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        }
    };

    let list = move || {
        view! {
            <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead class="bg-gray-50">
                            <tr>
                                {["Fotoğraf", "Kategori", "Boyut", "Görüntüleme", "Tarih", "İşlemler"]
                                    .into_iter()
                                    .map(|h| view! { <th class=TH_CLASS>{h}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || visible.get()
                                key=|img| img.id
                                children=move |image| {
                                    let id = image.id;
                                    let shown = image.clone();
                                    view! {
                                        <tr class="hover:bg-gray-50">
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <div class="flex items-center">
                                                    <img src=image.src.clone() alt=image.alt.clone() class="w-12 h-12 object-cover rounded-lg" />
                                                    <div class="ml-4 text-sm font-medium text-gray-900">{image.alt.clone()}</div>
                                                </div>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap">
                                                <span class="inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-gray-100 text-gray-800">
                                                    {category_label(&image.category).to_string()}
                                                </span>
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{image.size.clone()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{image.views}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{image.upload_label()}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                                                <div class="flex items-center space-x-2">
                                                    <button
                                                        type="button"
                                                        class="text-blue-600 hover:text-blue-900"
                                                        title="Önizle"
                                                        on:click=move |_| preview.set(Some(shown.clone()))
                                                    >
                                                        "👁"
                                                    </button>
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
        }
    };

    view! {
        <div class="space-y-6">
            <PanelHeader title="Galeri Yönetimi" subtitle="Salon fotoğraflarını görüntüleyin ve yönetin">
                <Button on_click=upload>
                    <span class="mr-2">"⇪"</span>
                    "Fotoğraf Yükle"
                </Button>
            </PanelHeader>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <CountCard label="Toplam Fotoğraf" value=Signal::derive(move || stats.get().total.to_string()) color="bg-blue-500" index=0 />
                <CountCard label="Toplam Görüntüleme" value=Signal::derive(move || format_thousands(stats.get().total_views)) color="bg-green-500" index=1 />
                <CountCard label="Toplam Boyut" value=Signal::derive(move || stats.get().size_label()) color="bg-purple-500" index=2 />
                <CountCard label="En Popüler" value=Signal::derive(move || stats.get().most_viewed) color="bg-orange-500" index=3 />
            </div>

            <div class="admin-card">
                <div class="flex flex-col lg:flex-row gap-4 items-center">
                    <div class="flex-1 w-full">
                        <SearchInput query=query placeholder="Fotoğraf ara..." />
                    </div>
                    <FilterChips options=chips selected=category />
                    <div class="flex gap-2">
                        <button
                            type="button"
                            title="Izgara"
                            class=move || view_toggle_class(mode.get() == ViewMode::Grid)
                            on:click=move |_| mode.set(ViewMode::Grid)
                        >
                            "▦"
                        </button>
                        <button
                            type="button"
                            title="Liste"
                            class=move || view_toggle_class(mode.get() == ViewMode::List)
                            on:click=move |_| mode.set(ViewMode::List)
                        >
                            "☰"
                        </button>
                    </div>
                </div>
            </div>

            {move || match mode.get() {
                ViewMode::Grid => grid().into_any(),
                ViewMode::List => list().into_any(),
            }}

            <Show when=move || visible.with(|v| v.is_empty())>
                <EmptyState title="Fotoğraf bulunamadı" message="Arama kriterlerinize uygun fotoğraf bulunmuyor." />
            </Show>

            {move || preview.get().map(|image| view! {
                <div class="fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4" on:click=move |_| preview.set(None)>
                    <div class="relative max-w-4xl max-h-full" on:click=|ev| ev.stop_propagation()>
                        <img src=image.src.clone() alt=image.alt.clone() class="max-w-full max-h-full object-contain rounded-lg" />
                        <button
                            type="button"
                            class="absolute top-4 right-4 bg-black/50 text-white w-10 h-10 rounded-full hover:bg-black/70 transition-colors"
                            on:click=move |_| preview.set(None)
                        >
                            "✕"
                        </button>
                        <div class="absolute bottom-4 left-4 right-4 bg-black/50 text-white p-4 rounded-lg">
                            <h3 class="text-lg font-semibold">{image.alt.clone()}</h3>
                            <div class="flex items-center justify-between text-sm opacity-80 mt-2">
                                <span>{category_label(&image.category).to_string()}</span>
                                <span>{format!("{} görüntüleme", image.views)}</span>
                                <span>{image.size.clone()}</span>
                            </div>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
