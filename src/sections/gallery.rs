use leptos::ev;
use leptos::prelude::*;
use leptos_motion::Reveal;

use super::{scroll_to, SectionHeading};
use crate::catalog::gallery_for;
use crate::components::{Button, ButtonSize, FilterChips};
use crate::domain::gallery::{next_index, prev_index, ALL_IMAGES, GALLERY_CATEGORIES};

#[component]
pub fn Gallery() -> impl IntoView {
    let filter = RwSignal::new(ALL_IMAGES.to_string());
    let selected = RwSignal::new(None::<usize>);
    let images = Memo::new(move |_| gallery_for(&filter.get()));

    // A new filter changes the list under an open lightbox
    Effect::new(move |_| {
        filter.track();
        selected.set(None);
    });

    let count = move || images.with(|list| list.len());
    let next = move || selected.update(|s| *s = s.map(|i| next_index(i, count())));
    let prev = move || selected.update(|s| *s = s.map(|i| prev_index(i, count())));
    let close = move || selected.set(None);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if selected.get_untracked().is_none() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => close(),
            "ArrowRight" => next(),
            "ArrowLeft" => prev(),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    let options = GALLERY_CATEGORIES
        .iter()
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .collect::<Vec<_>>();

    let current = move || selected.get().and_then(|i| images.with(|list| list.get(i).cloned().map(|img| (i, img))));

    view! {
        <section id="galeri" class="section-padding bg-surface">
            <div class="container-custom">
                <Reveal>
                    <SectionHeading
                        title="Galeri"
                        lead="Yaptığımız çalışmaları ve salon atmosferini keşfedin. Her kesim bir sanat eseri, her müşteri bir başarı hikayesi."
                    />
                </Reveal>

                <FilterChips
                    options=options
                    selected=filter
                    idle_class="bg-background text-text-secondary hover:text-primary border border-border hover:border-primary"
                    class="justify-center gap-4 mb-12"
                />

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 mb-16">
                    <For
                        each=move || images.get().into_iter().enumerate()
                        key=|(i, img)| (*i, img.id)
                        children=move |(i, img)| view! {
                            <div
                                class="relative group cursor-pointer rounded-lg overflow-hidden fade-up"
                                style=format!("animation-delay: {}ms;", i * 100)
                                on:click=move |_| selected.set(Some(i))
                            >
                                <img
                                    src=img.src()
                                    alt=img.alt
                                    class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-500"
                                />
                                <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                                    <div class="text-white text-center">
                                        <div class="text-lg font-semibold mb-2">{img.alt}</div>
                                        <div class="text-sm opacity-80">"Büyütmek için tıklayın"</div>
                                    </div>
                                </div>
                            </div>
                        }
                    />
                </div>

                <Reveal class="text-center bg-background rounded-2xl p-12">
                    <h3 class="text-3xl font-bold text-text-primary mb-4 font-serif">"Siz de Bu Kaliteli Hizmeti Deneyimleyin"</h3>
                    <p class="text-text-secondary text-lg mb-8 max-w-2xl mx-auto">
                        "Profesyonel ekibimiz ve modern tekniklerimizle sizin de hikayenizi yazmaya hazırız. Randevunuzu hemen alın!"
                    </p>
                    <Button size=ButtonSize::Lg on_click=scroll_to("#randevu")>"Randevu Al"</Button>
                </Reveal>
            </div>

            // Lightbox
            {move || current().map(|(i, img)| view! {
                <div class="fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4" on:click=move |_| close()>
                    <div class="relative max-w-4xl max-h-full" on:click=|ev| ev.stop_propagation()>
                        <img src=img.src() alt=img.alt class="max-w-full max-h-full object-contain rounded-lg" />
                        <button
                            type="button"
                            class="absolute top-4 right-4 bg-black/50 text-white w-10 h-10 rounded-full hover:bg-black/70 transition-colors"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                        <button
                            type="button"
                            class="absolute left-4 top-1/2 -translate-y-1/2 bg-black/50 text-white w-10 h-10 rounded-full hover:bg-black/70 transition-colors"
                            on:click=move |_| prev()
                        >
                            "‹"
                        </button>
                        <button
                            type="button"
                            class="absolute right-4 top-1/2 -translate-y-1/2 bg-black/50 text-white w-10 h-10 rounded-full hover:bg-black/70 transition-colors"
                            on:click=move |_| next()
                        >
                            "›"
                        </button>
                        <div class="absolute bottom-4 left-4 right-4 bg-black/50 text-white p-4 rounded-lg">
                            <h3 class="text-lg font-semibold">{img.alt}</h3>
                            <p class="text-sm opacity-80">{format!("{} / {}", i + 1, count())}</p>
                        </div>
                    </div>
                </div>
            })}
        </section>
    }
}
