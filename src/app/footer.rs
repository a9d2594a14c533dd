use leptos::prelude::*;

use crate::config::{
    mailto, BUILD_YEAR, CV_PATH, EMAIL, GITHUB_URL, LINKEDIN_URL, LOCATION, PHONE_DISPLAY,
    PHONE_HREF, TWITTER_URL,
};
use crate::content::NAV_ITEMS;
use crate::scroll::SCROLL_TOP_AFTER;

use super::ScrollContext;

#[cfg(feature = "hydrate")]
fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(feature = "hydrate"))]
fn scroll_to_top() {}

#[component]
pub fn Footer() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();
    let show_top = Memo::new(move |_| scroll.y.get() > SCROLL_TOP_AFTER);

    view! {
        <footer class="bg-card border-t border-border/50 pt-16 pb-8 relative">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-4 gap-8 mb-12">
                    <div class="md:col-span-2 space-y-4">
                        <a href="#home" class="text-xl font-bold flex items-center">
                            <span class="text-primary">"W"</span>
                            <span>"isdom Dzontoh"</span>
                        </a>
                        <p class="text-muted-foreground max-w-md">
                            "Software engineer and health informatician building scalable web applications and data solutions that improve healthcare delivery."
                        </p>
                        <div class="flex gap-4">
                            <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                                <i class="icon-github" />
                            </a>
                            <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                                <i class="icon-linkedin" />
                            </a>
                            <a href=TWITTER_URL target="_blank" rel="noopener noreferrer" aria-label="Twitter">
                                <i class="icon-twitter" />
                            </a>
                        </div>
                    </div>

                    <div>
                        <h3 class="font-semibold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a
                                                href=item.href
                                                class="text-muted-foreground hover:text-primary transition-colors"
                                            >
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="font-semibold mb-4">"Contact"</h3>
                        <ul class="space-y-2 text-muted-foreground">
                            <li>
                                <a href=mailto() class="hover:text-primary">
                                    {EMAIL}
                                </a>
                            </li>
                            <li>
                                <a href=PHONE_HREF class="hover:text-primary">
                                    {PHONE_DISPLAY}
                                </a>
                            </li>
                            <li>{LOCATION}</li>
                            <li>
                                <a href=CV_PATH download class="flex items-center gap-1 hover:text-primary">
                                    <i class="icon-download" />
                                    "Download CV"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-border/50 pt-8 text-center text-sm text-muted-foreground">
                    "© " {BUILD_YEAR} " Wisdom Dzontoh. All rights reserved."
                </div>
            </div>

            <button
                class="fixed bottom-8 right-8 z-40 w-12 h-12 rounded-full bg-primary text-primary-foreground shadow-lg flex items-center justify-center transition-all duration-300"
                class:opacity-0=move || !show_top()
                class:pointer-events-none=move || !show_top()
                aria-label="Scroll to top"
                on:click=move |_| scroll_to_top()
            >
                <i class="icon-arrow-up" />
            </button>
        </footer>
    }
}
