use leptos::prelude::*;
use leptos_motion::Reveal;

use super::{scroll_to, SectionHeading};
use crate::catalog::SERVICES;
use crate::commands;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::config::use_config;
use crate::domain::booking::tel_url;

#[component]
pub fn Services() -> impl IntoView {
    let config = use_config();
    let call = Callback::new(move |_: web_sys::MouseEvent| {
        commands::run("call salon", commands::navigate_to(&tel_url(&config.whatsapp_number)))
    });

    view! {
        <section id="hizmetler" class="section-padding bg-background">
            <div class="container-custom">
                <Reveal>
                    <SectionHeading
                        title="Hizmetlerimiz"
                        lead="Profesyonel ekibimiz ve kaliteli ürünlerimizle size en iyi hizmeti sunuyoruz. Her hizmetimiz özenle planlanmış ve müşteri memnuniyeti odaklıdır."
                    />
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| view! {
                            <Reveal delay_ms=(i as u32) * 100 class="card card-hover group overflow-hidden">
                                <div class="relative mb-6 rounded-lg overflow-hidden">
                                    <img
                                        src=service.image()
                                        alt=service.name
                                        class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                                    />
                                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                                    <div class="absolute top-4 right-4 bg-primary text-black px-3 py-1 rounded-full font-semibold text-sm">
                                        {service.price_label()}
                                    </div>
                                </div>

                                <div class="space-y-4">
                                    <h3 class="text-xl font-semibold text-text-primary group-hover:text-primary transition-colors">
                                        {service.name}
                                    </h3>
                                    <p class="text-text-secondary text-sm leading-relaxed">{service.description}</p>
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center space-x-2 text-text-secondary text-sm">
                                            <span>"🕘"</span>
                                            <span>{service.duration_label()}</span>
                                        </div>
                                        <div class="text-primary text-sm">"★★★★★"</div>
                                    </div>
                                    <Button variant=ButtonVariant::Secondary class="w-full" on_click=scroll_to("#randevu")>
                                        "Randevu Al"
                                    </Button>
                                </div>
                            </Reveal>
                        })
                        .collect_view()}
                </div>

                <Reveal class="text-center bg-surface rounded-2xl p-12">
                    <h3 class="text-3xl font-bold text-text-primary mb-4 font-serif">"Özel Bir Hizmet Mi Arıyorsunuz?"</h3>
                    <p class="text-text-secondary text-lg mb-8 max-w-2xl mx-auto">
                        "Size özel paket hizmetler ve kombinasyonlar için bizimle iletişime geçin. "
                        "İhtiyaçlarınıza göre özel çözümler sunuyoruz."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button size=ButtonSize::Lg on_click=scroll_to("#randevu")>"Randevu Al"</Button>
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Lg on_click=call>
                            "Bizi Arayın"
                        </Button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
