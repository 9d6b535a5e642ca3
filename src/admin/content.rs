//! Content Management Panel
//!
//! Text blocks with inline editors, the color palette with a live preview,
//! and a static font reference.

use leptos::prelude::*;
use reactive_stores::Store;

use super::PanelHeader;
use crate::commands;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::domain::content::{humanize_key, ContentKind, ContentSection, ContentTab, PALETTE_KEYS};
use crate::store::{
    store_edit_content, store_publish_content, store_save_content, store_toggle_edit, store_update_color, ContentState,
    ContentStore, ContentStateStoreFields,
};

fn section_content(store: ContentStore, slug: &str) -> String {
    store
        .sections()
        .with(|all| all.iter().find(|s| s.id == slug).map(|s| s.content.clone()))
        .unwrap_or_default()
}

fn palette_value(store: ContentStore, key: &str) -> String {
    store.palette().with(|p| p.get(key).map(str::to_string)).unwrap_or_default()
}

#[component]
fn SectionEditor(store: ContentStore, section: ContentSection) -> impl IntoView {
    let slug = StoredValue::new(section.id.clone());
    // Text at the moment editing started, restored on cancel
    let snapshot = StoredValue::new(section.content.clone());
    let editing = section.is_editing;
    let kind = section.kind;

    let current = move || slug.with_value(|s| section_content(store, s));
    let toggle = Callback::new(move |_: web_sys::MouseEvent| {
        slug.with_value(|s| {
            if editing {
                store_save_content(&store, s, section_content(store, s));
            } else {
                snapshot.set_value(section_content(store, s));
                store_toggle_edit(&store, s);
            }
        })
    });
    let cancel = Callback::new(move |_: web_sys::MouseEvent| {
        slug.with_value(|s| {
            store_edit_content(&store, s, snapshot.get_value());
            store_toggle_edit(&store, s);
        })
    });
    let save = Callback::new(move |_: web_sys::MouseEvent| {
        slug.with_value(|s| store_save_content(&store, s, section_content(store, s)))
    });
    let on_input = move |ev: web_sys::Event| slug.with_value(|s| store_edit_content(&store, s, event_target_value(&ev)));

    let editor = move || {
        let textarea_class = if kind == ContentKind::Text { "admin-input p-3" } else { "admin-input p-3 font-mono text-sm" };
        let rows = if kind == ContentKind::Text { "3" } else { "6" };
        view! {
            <div class="space-y-4">
                <div class="space-y-2">
                    {(kind != ContentKind::Text).then(|| view! {
                        <label class="block text-sm font-medium text-gray-700">"HTML İçerik"</label>
                    })}
                    <textarea class=textarea_class rows=rows prop:value=current on:input=on_input></textarea>
                </div>
                <div class="flex justify-end space-x-2">
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="text-gray-700 border-gray-300" on_click=cancel>
                        "İptal"
                    </Button>
                    <Button size=ButtonSize::Sm on_click=save>"Kaydet"</Button>
                </div>
            </div>
        }
    };

    let preview = move || match kind {
        ContentKind::Html => view! { <div class="bg-gray-50 rounded-lg p-4" inner_html=current></div> }.into_any(),
        _ => view! {
            <div class="bg-gray-50 rounded-lg p-4">
                <p class="text-gray-700 whitespace-pre-wrap">{current}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="border border-gray-200 rounded-lg p-6 fade-up">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-gray-900">{section.title.clone()}</h3>
                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="text-gray-700 border-gray-300" on_click=toggle>
                    {if editing { "💾 Kaydet" } else { "✎ Düzenle" }}
                </Button>
            </div>
            {if editing { editor().into_any() } else { preview().into_any() }}
        </div>
    }
}

#[component]
fn ColorsTab(store: ContentStore) -> impl IntoView {
    let color = move |key: &'static str| move || palette_value(store, key);

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PALETTE_KEYS
                    .iter()
                    .map(|&key| {
                        view! {
                            <div class="border border-gray-200 rounded-lg p-4 fade-up">
                                <div class="flex items-center space-x-3 mb-3">
                                    <div
                                        class="w-8 h-8 rounded-lg border border-gray-300"
                                        style=move || format!("background-color: {};", palette_value(store, key))
                                    ></div>
                                    <div>
                                        <h4 class="font-medium text-gray-900">{humanize_key(key)}</h4>
                                        <p class="text-sm text-gray-500">{color(key)}</p>
                                    </div>
                                </div>
                                <input
                                    type="color"
                                    class="w-full h-10 rounded-lg border border-gray-300 cursor-pointer"
                                    prop:value=color(key)
                                    on:input=move |ev| store_update_color(&store, key, event_target_value(&ev))
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="bg-gray-50 rounded-lg p-6">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Renk Önizlemesi"</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div
                        class="p-6 rounded-lg"
                        style=move || format!("background-color: {}; color: {};", color("background")(), color("textPrimary")())
                    >
                        <h4 class="text-xl font-bold mb-2" style=move || format!("color: {};", color("primary")())>"BIG BOSS"</h4>
                        <p style=move || format!("color: {};", color("textSecondary")())>"Premium Erkek Kuaförlük"</p>
                        <button
                            type="button"
                            class="mt-4 px-4 py-2 rounded-lg font-medium"
                            style=move || format!("background-color: {}; color: {};", color("primary")(), color("background")())
                        >
                            "Randevu Al"
                        </button>
                    </div>
                    <div
                        class="p-6 rounded-lg"
                        style=move || format!("background-color: {}; color: {};", color("surface")(), color("textPrimary")())
                    >
                        <h4 class="text-lg font-semibold mb-2">"Hizmetlerimiz"</h4>
                        <p class="mb-4" style=move || format!("color: {};", color("textSecondary")())>
                            "Profesyonel saç kesimi ve bakım hizmetleri"
                        </p>
                        <div
                            class="p-3 rounded border"
                            style=move || format!("background-color: {}; border-color: {}40;", color("surfaceLight")(), color("primary")())
                        >
                            <span style=move || format!("color: {};", color("primary")())>"Klasik Kesim - ₺150"</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

const FONT_SIZES: &[(&str, &str)] = &[
    ("text-xs", "12px - Çok küçük metin"),
    ("text-sm", "14px - Küçük metin"),
    ("text-base", "16px - Normal metin"),
    ("text-lg", "18px - Büyük metin"),
    ("text-xl", "20px - Çok büyük metin"),
    ("text-2xl", "24px - Küçük başlık"),
    ("text-3xl", "30px - Orta başlık"),
    ("text-4xl", "36px - Büyük başlık"),
];

#[component]
fn FontSample(title: &'static str, family: &'static str, weights: [(&'static str, &'static str); 4]) -> impl IntoView {
    view! {
        <div class="border border-gray-200 rounded-lg p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">{title}</h3>
            <div class=format!("space-y-3 {}", family)>
                {weights
                    .into_iter()
                    .map(|(class, name)| view! { <div class=class>{format!("{}: The quick brown fox", name)}</div> })
                    .collect_view()}
            </div>
            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="mt-4 text-gray-700 border-gray-300">
                "Font Değiştir"
            </Button>
        </div>
    }
}

#[component]
fn FontsTab() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FontSample
                    title="Ana Font (Inter)"
                    family="font-sans"
                    weights=[("font-normal", "Normal"), ("font-medium", "Medium"), ("font-semibold", "Semibold"), ("font-bold", "Bold")]
                />
                <FontSample
                    title="Başlık Fontu (Playfair Display)"
                    family="font-serif"
                    weights=[("font-normal", "Normal"), ("font-semibold", "Semibold"), ("font-bold", "Bold"), ("font-black", "Black")]
                />
            </div>
            <div class="bg-gray-50 rounded-lg p-6">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Font Boyutları"</h3>
                <div class="space-y-4">
                    {FONT_SIZES.iter().map(|(class, text)| view! { <div class=*class>{*text}</div> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ContentManagement() -> impl IntoView {
    let store: ContentStore = Store::new(ContentState::default());
    let tab = store.tab();

    let publish = Callback::new(move |_: web_sys::MouseEvent| {
        commands::run("publish content", store_publish_content(&store))
    });

    view! {
        <div class="space-y-6">
            <PanelHeader title="İçerik Yönetimi" subtitle="Website içeriklerini ve tasarımını yönetin">
                <Button on_click=publish>
                    <span class="mr-2">"💾"</span>
                    "Değişiklikleri Kaydet"
                </Button>
            </PanelHeader>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200">
                <div class="border-b border-gray-200">
                    <nav class="flex space-x-8 px-6">
                        {ContentTab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if tab.get() == t {
                                            "py-4 border-b-2 font-medium text-sm border-primary text-primary-dark"
                                        } else {
                                            "py-4 border-b-2 font-medium text-sm border-transparent text-gray-500 hover:text-gray-700"
                                        }
                                    }
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            })
                            .collect_view()}
                    </nav>
                </div>

                <div class="p-6">
                    {move || match tab.get() {
                        ContentTab::Content => view! {
                            <div class="space-y-6">
                                <For
                                    each=move || store.sections().get()
                                    key=|s| (s.id.clone(), s.is_editing)
                                    children=move |section| view! { <SectionEditor store=store section=section /> }
                                />
                            </div>
                        }
                        .into_any(),
                        ContentTab::Colors => view! { <ColorsTab store=store /> }.into_any(),
                        ContentTab::Fonts => view! { <FontsTab /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
