//! Appointment Section
//!
//! Booking form that hands the request to WhatsApp, plus quick-contact
//! buttons and working hours.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_motion::Reveal;

use crate::commands;
use crate::components::Button;
use crate::config::use_config;
use crate::domain::booking::{compose_message, tel_url, time_slots, whatsapp_url, BookingRequest, BOOKING_SERVICES, QUICK_MESSAGE};
use crate::util::today;

const FIELD_CLASS: &str = "w-full px-4 py-3 bg-surface-light border border-border rounded-lg text-text-primary focus:border-primary focus:outline-none transition-colors";

/// Where the booking form is in its submit cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[component]
fn FieldLabel(glyph: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <label class="block text-text-secondary mb-2 font-medium">
            <span class="inline-block mr-2 text-primary">{glyph}</span>
            {text}
        </label>
    }
}

#[component]
pub fn Appointment() -> impl IntoView {
    let config = use_config();
    let form = RwSignal::new(BookingRequest::default());
    let state = RwSignal::new(SubmitState::Idle);

    let submit_delay = config.submit_delay_ms;
    let banner_delay = config.success_banner_ms;
    let number = StoredValue::new(config.whatsapp_number.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() != SubmitState::Idle {
            return;
        }
        let request = form.get_untracked();
        if !request.is_complete() {
            log::warn!("[BOOKING] incomplete form ignored");
            return;
        }
        state.set(SubmitState::Submitting);

        spawn_local(async move {
            TimeoutFuture::new(submit_delay).await;

            match compose_message(&request) {
                Ok(message) => {
                    let url = whatsapp_url(&number.get_value(), &message);
                    log::info!("[BOOKING] {} {} {} {}", request.service_id, request.date, request.time, request.name);
                    commands::run("open booking link", commands::open_in_new_tab(&url));
                }
                Err(e) => log::warn!("[BOOKING] {}", e),
            }

            state.set(SubmitState::Sent);
            TimeoutFuture::new(banner_delay).await;
            state.set(SubmitState::Idle);
            form.set(BookingRequest::default());
        });
    };

    let quick_call = Callback::new(move |_: web_sys::MouseEvent| {
        commands::run("call salon", commands::navigate_to(&tel_url(&number.get_value())));
    });
    let quick_whatsapp = Callback::new(move |_: web_sys::MouseEvent| {
        let url = whatsapp_url(&number.get_value(), QUICK_MESSAGE);
        commands::run("open WhatsApp", commands::open_in_new_tab(&url));
    });

    let min_date = today().format("%Y-%m-%d").to_string();
    let submitting = Signal::derive(move || state.get() == SubmitState::Submitting);

    view! {
        <section id="randevu" class="section-padding bg-background relative overflow-hidden">
            <div class="container-custom">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-text-primary mb-6 font-serif">
                        "Randevu " <span class="text-primary">"Al"</span>
                    </h2>
                    <p class="text-xl text-text-secondary max-w-2xl mx-auto">
                        "Profesyonel hizmetimizden yararlanmak için hemen randevu alın"
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <Reveal class="bg-surface rounded-2xl p-8 border border-border">
                        <h3 class="text-2xl font-bold text-text-primary mb-6 flex items-center">
                            <span class="mr-3 text-primary">"📅"</span>
                            "Randevu Formu"
                        </h3>

                        <Show when=move || state.get() == SubmitState::Sent>
                            <div class="mb-6 p-4 bg-green-600 text-white rounded-lg flex items-center fade-up">
                                <span class="mr-3">"✔"</span>
                                "WhatsApp'a yönlendiriliyorsunuz..."
                            </div>
                        </Show>

                        <form class="space-y-6" on:submit=on_submit>
                            <div>
                                <FieldLabel glyph="👤" text="Ad Soyad *" />
                                <input
                                    type="text"
                                    required
                                    class=FIELD_CLASS
                                    placeholder="Adınız ve soyadınız"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>

                            <div>
                                <FieldLabel glyph="📞" text="Telefon *" />
                                <input
                                    type="tel"
                                    required
                                    class=FIELD_CLASS
                                    placeholder="05XX XXX XX XX"
                                    prop:value=move || form.with(|f| f.phone.clone())
                                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                                />
                            </div>

                            <div class="grid md:grid-cols-2 gap-4">
                                <div>
                                    <FieldLabel glyph="📅" text="Tarih *" />
                                    <input
                                        type="date"
                                        required
                                        min=min_date
                                        class=FIELD_CLASS
                                        prop:value=move || form.with(|f| f.date.clone())
                                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <FieldLabel glyph="🕘" text="Saat *" />
                                    <select
                                        required
                                        class=FIELD_CLASS
                                        prop:value=move || form.with(|f| f.time.clone())
                                        on:change=move |ev| form.update(|f| f.time = event_target_value(&ev))
                                    >
                                        <option value="">"Saat seçin"</option>
                                        {time_slots()
                                            .into_iter()
                                            .map(|slot| view! { <option value=slot.clone()>{slot.clone()}</option> })
                                            .collect_view()}
                                    </select>
                                </div>
                            </div>

                            <div>
                                <FieldLabel glyph="✂" text="Hizmet *" />
                                <select
                                    required
                                    class=FIELD_CLASS
                                    prop:value=move || form.with(|f| f.service_id.clone())
                                    on:change=move |ev| form.update(|f| f.service_id = event_target_value(&ev))
                                >
                                    <option value="">"Hizmet seçin"</option>
                                    {BOOKING_SERVICES
                                        .iter()
                                        .map(|s| view! { <option value=s.id>{s.option_label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <FieldLabel glyph="💬" text="Notlar (Opsiyonel)" />
                                <textarea
                                    rows="3"
                                    class=format!("{} resize-none", FIELD_CLASS)
                                    placeholder="Özel istekleriniz varsa belirtebilirsiniz"
                                    prop:value=move || form.with(|f| f.notes.clone())
                                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                                ></textarea>
                            </div>

                            <Button button_type="submit" disabled=submitting class="w-full font-bold py-4 text-lg h-14">
                                {move || if submitting.get() { "Gönderiliyor..." } else { "WhatsApp ile Randevu Al" }}
                            </Button>
                        </form>
                    </Reveal>

                    <Reveal delay_ms=400 class="space-y-8">
                        <div class="bg-surface rounded-2xl p-8 border border-border">
                            <h3 class="text-2xl font-bold text-text-primary mb-6">"İletişim Bilgileri"</h3>
                            <div class="space-y-4 mb-8">
                                <div class="flex items-center text-text-secondary">
                                    <span class="mr-3 text-primary">"📞"</span>
                                    <span>{config.display_phone.clone()}</span>
                                </div>
                                <div class="flex items-center text-text-secondary">
                                    <span class="mr-3 text-primary">"💬"</span>
                                    <span>"WhatsApp ile 7/24 iletişim"</span>
                                </div>
                            </div>
                            <div class="space-y-4">
                                <Button class="w-full bg-green-600 hover:bg-green-700 text-white" on_click=quick_call>
                                    <span class="mr-2">"📞"</span>
                                    "Hemen Ara"
                                </Button>
                                <Button class="w-full bg-green-500 hover:bg-green-600 text-white" on_click=quick_whatsapp>
                                    <span class="mr-2">"💬"</span>
                                    "WhatsApp ile Yaz"
                                </Button>
                            </div>
                        </div>

                        <div class="bg-surface rounded-2xl p-8 border border-border">
                            <h3 class="text-xl font-bold text-text-primary mb-4">"Çalışma Saatleri"</h3>
                            <div class="space-y-2 text-text-secondary">
                                <div class="flex justify-between">
                                    <span>"Pazartesi - Cumartesi"</span>
                                    <span>"09:00 - 20:00"</span>
                                </div>
                                <div class="flex justify-between">
                                    <span>"Pazar"</span>
                                    <span class="text-red-400">"Kapalı"</span>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
