//! Admin Layout
//!
//! Sidebar navigation, top bar and content area. Below the `lg` breakpoint the
//! sidebar slides in over a dimmed overlay.

use leptos::prelude::*;

use super::AdminPage;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::context::use_admin;
use crate::util::{format_date_tr, today};

#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    let ctx = use_admin();
    let close = Callback::new(move |_: web_sys::MouseEvent| ctx.close_sidebar());
    let open = Callback::new(move |_: web_sys::MouseEvent| ctx.open_sidebar());
    let logout = Callback::new(|_: web_sys::MouseEvent| log::info!("[ADMIN] logout requested"));

    let sidebar_class = move || {
        let position = if ctx.sidebar_open.get() { "translate-x-0" } else { "-translate-x-full" };
        format!(
            "fixed left-0 top-0 h-full w-80 bg-white shadow-xl z-50 transition-transform duration-300 lg:translate-x-0 {}",
            position
        )
    };

    view! {
        <div class="admin min-h-screen bg-gray-50 text-gray-900">
            <Show when=move || ctx.sidebar_open.get()>
                <div class="fixed inset-0 bg-black/50 z-40 lg:hidden" on:click=move |_| ctx.close_sidebar()></div>
            </Show>

            <aside class=sidebar_class>
                <div class="flex flex-col h-full">
                    <div class="p-6 border-b border-gray-200">
                        <div class="flex items-center justify-between">
                            <div class="flex items-center space-x-3">
                                <div class="bg-primary p-2 rounded-lg text-black text-xl leading-none">"✂"</div>
                                <div>
                                    <h1 class="text-xl font-bold text-gray-900">"BIG BOSS"</h1>
                                    <p class="text-sm text-gray-500">"Admin Panel"</p>
                                </div>
                            </div>
                            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm class="lg:hidden text-gray-700" on_click=close>
                                "✕"
                            </Button>
                        </div>
                    </div>

                    <nav class="flex-1 p-4 overflow-y-auto">
                        <ul class="space-y-2">
                            {AdminPage::ALL
                                .into_iter()
                                .map(|page| {
                                    let item_class = move || {
                                        if ctx.current_page.get() == page {
                                            "w-full flex items-center space-x-3 px-4 py-3 rounded-lg text-left transition-colors bg-primary text-black font-medium"
                                        } else {
                                            "w-full flex items-center space-x-3 px-4 py-3 rounded-lg text-left transition-colors text-gray-700 hover:bg-gray-100"
                                        }
                                    };
                                    view! {
                                        <li>
                                            <button type="button" class=item_class on:click=move |_| ctx.navigate(page)>
                                                <span class="w-5 text-center">{page.glyph()}</span>
                                                <span>{page.label()}</span>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>

                    <div class="p-4 border-t border-gray-200">
                        <Button
                            variant=ButtonVariant::Ghost
                            class="w-full justify-start text-red-600 hover:text-red-700 hover:bg-red-50"
                            on_click=logout
                        >
                            <span class="mr-3">"⎋"</span>
                            "Çıkış Yap"
                        </Button>
                    </div>
                </div>
            </aside>

            <div class="lg:ml-80">
                <header class="bg-white shadow-sm border-b border-gray-200">
                    <div class="flex items-center justify-between px-6 py-4">
                        <div class="flex items-center space-x-4">
                            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm class="lg:hidden text-gray-700" on_click=open>
                                "☰"
                            </Button>
                            <h2 class="text-xl font-semibold text-gray-900">{move || ctx.current_page.get().label()}</h2>
                        </div>
                        <div class="text-sm text-gray-500">
                            {format!("Son güncelleme: {}", format_date_tr(today()))}
                        </div>
                    </div>
                </header>

                <main class="p-6">{children()}</main>
            </div>
        </div>
    }
}
