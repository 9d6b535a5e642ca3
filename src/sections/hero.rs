use leptos::prelude::*;
use leptos_motion::TypewriterText;

use super::scroll_to;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::domain::service::pexels_url;

const TYPEWRITER_TEXTS: [&str; 3] = ["Premium Erkek Kuaförlük", "Profesyonel Saç Kesimi", "Kaliteli Hizmet"];

/// Headline figures: (glyph, value, label)
const HERO_STATS: &[(&str, &str, &str)] = &[
    ("★", "5.0", "Müşteri Puanı"),
    ("👥", "1000+", "Mutlu Müşteri"),
    ("🏆", "5+", "Yıl Deneyim"),
    ("🕘", "7/24", "Randevu"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let texts = TYPEWRITER_TEXTS.iter().map(|t| t.to_string()).collect::<Vec<_>>();

    view! {
        <section id="ana-sayfa" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <img src=pexels_url(1319460, 1920) alt="Kuaför salonu" class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-black/60"></div>
            </div>

            <div class="relative z-10 container-custom text-center">
                <div class="max-w-4xl mx-auto fade-up">
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6 font-serif">
                        <span class="text-primary">"BIG BOSS"</span>
                        <br />
                        <TypewriterText texts=texts class="text-text-primary" />
                    </h1>

                    <p class="text-xl md:text-2xl text-text-secondary mb-8 leading-relaxed">
                        "Profesyonel ekibimiz ve modern tekniklerimizle sizlere en iyi hizmeti sunuyoruz."
                        <br />
                        "İzmir'in en prestijli erkek kuaförlük deneyimi."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                        <Button size=ButtonSize::Lg class="px-8 py-4" on_click=scroll_to("#randevu")>
                            "Randevu Al"
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Lg
                            class="px-8 py-4"
                            on_click=scroll_to("#hizmetler")
                        >
                            "Hizmetlerimiz"
                        </Button>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-3xl mx-auto">
                        {HERO_STATS
                            .iter()
                            .map(|(glyph, value, label)| view! {
                                <div class="text-center transition-transform duration-300 hover:scale-105 hover:-translate-y-1">
                                    <div class="bg-primary/20 p-3 rounded-full w-16 h-16 flex items-center justify-center mx-auto mb-2 text-2xl text-primary">
                                        {*glyph}
                                    </div>
                                    <div class="text-2xl font-bold text-primary">{*value}</div>
                                    <div class="text-sm text-text-secondary">{*label}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                <div class="w-6 h-10 border-2 border-primary rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-primary rounded-full mt-2"></div>
                </div>
            </div>
        </section>
    }
}
