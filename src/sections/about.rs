use leptos::prelude::*;
use leptos_motion::Reveal;

use crate::domain::service::pexels_url;

const HIGHLIGHTS: [&str; 4] = [
    "5+ yıllık sektör deneyimi",
    "1000+ memnun müşteri",
    "Premium kalite ürünler",
    "Hijyen ve temizlik önceliği",
];

/// (glyph, title, description)
const FEATURES: &[(&str, &str, &str)] = &[
    ("👥", "Uzman Kuaförler", "Yılların deneyimine sahip profesyonel kuaförlerimiz"),
    ("🕘", "Esnek Çalışma Saatleri", "Pazartesi-Cumartesi 09:00-20:00 arası hizmetinizdeyiz"),
    ("🏆", "Premium Ürünler", "Sadece en kaliteli saç ve sakal bakım ürünlerini kullanıyoruz"),
    ("★", "Memnun Müşteriler", "Binlerce memnun müşteri ile hizmet vermeye devam ediyoruz"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="hakkimizda" class="section-padding bg-surface">
            <div class="container-custom">
                <Reveal amount=0.3 class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-4xl md:text-5xl font-bold mb-6 font-serif">
                            <span class="text-primary">"Hakkımızda"</span>
                        </h2>
                        <p class="text-lg text-text-secondary mb-6 leading-relaxed">
                            "BIG BOSS, HAMZA ŞAHİN tarafından İzmir Buca'da kurulmuş premium erkek kuaförlük salonudur. "
                            "Modern teknikler ve geleneksel ustalık bir araya getirilerek, her müşterimize özel hizmet sunuyoruz."
                        </p>
                        <p class="text-lg text-text-secondary mb-8 leading-relaxed">
                            "Kaliteli ürünler, deneyimli ekibimiz ve müşteri memnuniyeti odaklı yaklaşımımızla "
                            "İzmir'in en güvenilir kuaförlük markası olmayı hedefliyoruz."
                        </p>
                        <div class="space-y-4">
                            {HIGHLIGHTS
                                .iter()
                                .enumerate()
                                .map(|(i, item)| view! {
                                    <Reveal delay_ms=(i as u32) * 100 class="flex items-center space-x-3">
                                        <span class="text-primary">"✔"</span>
                                        <span class="text-text-secondary">{*item}</span>
                                    </Reveal>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative">
                        <div class="relative rounded-2xl overflow-hidden">
                            <img
                                src=pexels_url(1570807, 800)
                                alt="Kuaför salonu iç mekan"
                                class="w-full h-[500px] object-cover"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent"></div>
                        </div>
                        <div class="absolute -bottom-6 -left-6 bg-background border border-border rounded-xl p-6 shadow-2xl">
                            <div class="text-center">
                                <div class="text-3xl font-bold text-primary mb-1">"5.0"</div>
                                <div class="text-sm text-text-secondary">"Google Puanı"</div>
                                <div class="flex justify-center mt-2 text-primary">"★★★★★"</div>
                            </div>
                        </div>
                    </div>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mt-20">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, (glyph, title, description))| view! {
                            <Reveal delay_ms=(i as u32) * 100 class="card text-center group cursor-pointer">
                                <div class="bg-primary/20 p-4 rounded-full w-16 h-16 flex items-center justify-center mx-auto mb-4 group-hover:bg-primary/30 transition-colors text-2xl text-primary">
                                    {*glyph}
                                </div>
                                <h3 class="text-lg font-semibold text-text-primary mb-2">{*title}</h3>
                                <p class="text-text-secondary text-sm leading-relaxed">{*description}</p>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
