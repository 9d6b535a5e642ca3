use leptos::prelude::*;

use super::navbar::{Brand, MENU_ITEMS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-surface border-t border-border">
            <div class="container-custom section-padding">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <div class="space-y-4">
                        <Brand footer=true />
                        <p class="text-text-secondary text-sm leading-relaxed">
                            "İzmir'in en prestijli erkek kuaförlük salonu. Profesyonel hizmet ve kaliteli ürünlerle sizlere hizmet veriyoruz."
                        </p>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-lg font-semibold text-text-primary">"Hızlı Linkler"</h4>
                        <ul class="space-y-2">
                            {MENU_ITEMS
                                .iter()
                                .map(|(href, label)| view! {
                                    <li>
                                        <a href=*href class="text-text-secondary hover:text-primary transition-colors text-sm">
                                            {*label}
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-lg font-semibold text-text-primary">"İletişim"</h4>
                        <div class="space-y-3 text-text-secondary text-sm">
                            <div class="flex items-center space-x-3">
                                <span class="text-primary">"📞"</span>
                                <span>"0532 123 45 67"</span>
                            </div>
                            <div class="flex items-center space-x-3">
                                <span class="text-primary">"📍"</span>
                                <span>"İzmir, Buca"</span>
                            </div>
                            <div class="flex items-center space-x-3">
                                <span class="text-primary">"🕘"</span>
                                <span>"Pzt-Cmt: 09:00-20:00"</span>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-lg font-semibold text-text-primary">"Sosyal Medya"</h4>
                        <div class="flex space-x-4">
                            {["Instagram", "Facebook", "Twitter"]
                                .into_iter()
                                .map(|name| view! {
                                    <a
                                        href="#"
                                        title=name
                                        class="bg-surface-light px-3 py-2 rounded-lg text-sm hover:bg-primary hover:text-black transition-all duration-300"
                                    >
                                        {&name[..2]}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                        <p class="text-text-secondary text-sm">"Bizi takip edin ve son çalışmalarımızı görün!"</p>
                    </div>
                </div>

                <div class="border-t border-border mt-12 pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center text-text-secondary text-sm">
                        <p>"© 2024 BIG BOSS Premium Kuaför. Tüm hakları saklıdır."</p>
                        <p class="mt-2 md:mt-0">"HAMZA ŞAHİN tarafından kurulmuştur."</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
