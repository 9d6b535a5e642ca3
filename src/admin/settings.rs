//! Settings Panel
//!
//! Four tabs over one nested settings record. Any edit reveals the save
//! button; saving logs the record and hides it again.

use leptos::prelude::*;
use reactive_stores::Store;

use super::PanelHeader;
use crate::commands;
use crate::components::Button;
use crate::domain::settings::{
    parse_number, Settings, SettingsTab, CURRENCIES, DATE_FORMATS, LANGUAGES, NOTIFICATION_TOGGLES, TIMEZONES,
};
use crate::store::{store_save_settings, store_update_settings, SettingsState, SettingsStateStoreFields, SettingsStore};

const SECURITY_TIPS: [&str; 4] = [
    "Güçlü bir şifre kullanın (en az 8 karakter, büyük/küçük harf, sayı ve özel karakter)",
    "İki faktörlü kimlik doğrulamayı etkinleştirin",
    "Şifrenizi düzenli olarak değiştirin",
    "Şüpheli aktiviteleri takip edin",
];

/// Reactive read of one value from the settings record
fn read<T>(
    store: SettingsStore,
    f: impl Fn(&Settings) -> T + Copy + Send + Sync + 'static,
) -> impl Fn() -> T + Copy + Send + Sync + 'static
where
    T: Send + Sync + 'static,
{
    move || store.settings().with(f)
}

#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <input
                type=input_type
                class="admin-input"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <select class="admin-input" prop:value=move || value.get() on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options.iter().map(|(v, l)| view! { <option value=*v>{*l}</option> }).collect_view()}
            </select>
        </div>
    }
}

/// Labelled switch row
#[component]
fn ToggleRow(
    title: &'static str,
    description: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 border border-gray-200 rounded-lg">
            <div>
                <h4 class="font-medium text-gray-900">{title}</h4>
                <p class="text-sm text-gray-600">{description}</p>
            </div>
            <label class="relative inline-flex items-center cursor-pointer">
                <input
                    type="checkbox"
                    class="sr-only peer"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <div class="toggle-track"></div>
            </label>
        </div>
    }
}

#[component]
fn BusinessTab(store: SettingsStore) -> impl IntoView {
    let field = |label: &'static str, input_type: &'static str, get: fn(&Settings) -> String, set: fn(&mut Settings, String)| {
        view! {
            <TextField
                label=label
                input_type=input_type
                value=Signal::derive(read(store, get))
                on_input=Callback::new(move |v: String| store_update_settings(&store, |s| set(s, v)))
            />
        }
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {field("İşletme Adı", "text", |s| s.business.name.clone(), |s, v| s.business.name = v)}
            {field("Sahip", "text", |s| s.business.owner.clone(), |s, v| s.business.owner = v)}
            {field("Telefon", "tel", |s| s.business.phone.clone(), |s, v| s.business.phone = v)}
            {field("E-posta", "email", |s| s.business.email.clone(), |s, v| s.business.email = v)}
            {field("Adres", "text", |s| s.business.address.clone(), |s, v| s.business.address = v)}
            {field("Çalışma Saatleri", "text", |s| s.business.working_hours.clone(), |s, v| s.business.working_hours = v)}
        </div>
    }
}

#[component]
fn NotificationsTab(store: SettingsStore) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {NOTIFICATION_TOGGLES
                .iter()
                .map(|&(key, title, description)| {
                    view! {
                        <ToggleRow
                            title=title
                            description=description
                            checked=Signal::derive(move || store.settings().with(|s| s.notifications.get(key)))
                            on_change=Callback::new(move |on: bool| store_update_settings(&store, |s| s.notifications.set(key, on)))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SystemTab(store: SettingsStore) -> impl IntoView {
    let field = |label: &'static str,
                 options: &'static [(&'static str, &'static str)],
                 get: fn(&Settings) -> String,
                 set: fn(&mut Settings, String)| {
        view! {
            <SelectField
                label=label
                options=options
                value=Signal::derive(read(store, get))
                on_change=Callback::new(move |v: String| store_update_settings(&store, |s| set(s, v)))
            />
        }
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {field("Dil", LANGUAGES, |s| s.system.language.clone(), |s, v| s.system.language = v)}
            {field("Saat Dilimi", TIMEZONES, |s| s.system.timezone.clone(), |s, v| s.system.timezone = v)}
            {field("Para Birimi", CURRENCIES, |s| s.system.currency.clone(), |s, v| s.system.currency = v)}
            {field("Tarih Formatı", DATE_FORMATS, |s| s.system.date_format.clone(), |s, v| s.system.date_format = v)}
        </div>
    }
}

#[component]
fn SecurityTab(store: SettingsStore) -> impl IntoView {
    let session = read(store, |s| s.security.session_timeout);
    let expiry = read(store, |s| s.security.password_expiry);

    view! {
        <div class="space-y-6">
            <ToggleRow
                title="İki Faktörlü Kimlik Doğrulama"
                description="Hesabınız için ekstra güvenlik katmanı ekleyin"
                checked=Signal::derive(read(store, |s| s.security.two_factor_auth))
                on_change=Callback::new(move |on: bool| store_update_settings(&store, |s| s.security.two_factor_auth = on))
            />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <TextField
                    label="Oturum Zaman Aşımı (dakika)"
                    input_type="number"
                    value=Signal::derive(move || session().to_string())
                    on_input=Callback::new(move |v: String| {
                        store_update_settings(&store, |s| s.security.session_timeout = parse_number(&v, s.security.session_timeout))
                    })
                />
                <TextField
                    label="Şifre Geçerlilik Süresi (gün)"
                    input_type="number"
                    value=Signal::derive(move || expiry().to_string())
                    on_input=Callback::new(move |v: String| {
                        store_update_settings(&store, |s| s.security.password_expiry = parse_number(&v, s.security.password_expiry))
                    })
                />
            </div>

            <div class="bg-yellow-50 border border-yellow-200 rounded-lg p-4">
                <div class="flex">
                    <span class="text-yellow-400 mr-3">"🛡"</span>
                    <div>
                        <h4 class="text-sm font-medium text-yellow-800">"Güvenlik Önerileri"</h4>
                        <ul class="mt-2 text-sm text-yellow-700 list-disc list-inside space-y-1">
                            {SECURITY_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let store: SettingsStore = Store::new(SettingsState::default());
    let tab = store.tab();

    let save = Callback::new(move |_: web_sys::MouseEvent| {
        commands::run("save settings", store_save_settings(&store).map(|_| ()))
    });

    view! {
        <div class="space-y-6">
            <PanelHeader title="Ayarlar" subtitle="Sistem ve işletme ayarlarını yönetin">
                <Show when=move || store.dirty().get()>
                    <Button on_click=save>
                        <span class="mr-2">"💾"</span>
                        "Değişiklikleri Kaydet"
                    </Button>
                </Show>
            </PanelHeader>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200">
                <div class="border-b border-gray-200">
                    <nav class="flex space-x-8 px-6 overflow-x-auto">
                        {SettingsTab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if tab.get() == t {
                                            "py-4 border-b-2 font-medium text-sm whitespace-nowrap border-primary text-primary-dark"
                                        } else {
                                            "py-4 border-b-2 font-medium text-sm whitespace-nowrap border-transparent text-gray-500 hover:text-gray-700"
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

                <div class="p-6 fade-up">
                    {move || match tab.get() {
                        SettingsTab::Business => view! { <BusinessTab store=store /> }.into_any(),
                        SettingsTab::Notifications => view! { <NotificationsTab store=store /> }.into_any(),
                        SettingsTab::System => view! { <SystemTab store=store /> }.into_any(),
                        SettingsTab::Security => view! { <SecurityTab store=store /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
