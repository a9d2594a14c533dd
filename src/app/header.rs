use leptos::{either::*, prelude::*};

use crate::config::RESUME_URL;
use crate::content::NAV_ITEMS;
use crate::motion::{Choreography, Phase, Variant};
use crate::scroll::{active_section, scroll_progress, SectionBounds, HEADER_SOLID_AFTER};

use super::reveal::{Stagger, StaggerItem};
use super::{ScrollContext, ThemeContext};

#[cfg(feature = "hydrate")]
fn section_bounds() -> Vec<SectionBounds> {
    use wasm_bindgen::JsCast;

    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
fn section_bounds() -> Vec<SectionBounds> {
    Vec::new()
}

#[cfg(feature = "hydrate")]
fn page_progress(scroll_y: f64) -> f64 {
    match document().document_element() {
        Some(root) => scroll_progress(
            scroll_y,
            root.scroll_height() as f64,
            root.client_height() as f64,
        ),
        None => 0.0,
    }
}

#[cfg(not(feature = "hydrate"))]
fn page_progress(scroll_y: f64) -> f64 {
    scroll_progress(scroll_y, 0.0, 0.0)
}

/// Thin bar along the top edge tracking how far down the page the visitor is.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();

    view! {
        <div
            class="scroll-indicator fixed top-0 left-0 h-1 bg-primary z-[60]"
            style=move || format!("width: {}%", page_progress(scroll.y.get()))
            aria-hidden="true"
        />
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();
    let theme = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(String::new());

    let scrolled = Signal::derive(move || scroll.y.get() > HEADER_SOLID_AFTER);

    // keep the last match when between sections
    Effect::new(move |_| {
        let y = scroll.y.get();
        if let Some(id) = active_section(y, &section_bounds()) {
            if active.get_untracked() != id {
                set_active.set(id.to_string());
            }
        }
    });

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let link_class = move |href: &'static str, base: &'static str| {
        let id = href.trim_start_matches('#');
        if active.get() == id {
            format!("{base} text-primary")
        } else {
            format!("{base} text-muted-foreground hover:text-foreground")
        }
    };

    view! {
        <header class=move || {
            if scrolled() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-background/80 backdrop-blur-md shadow-sm py-3 border-b border-border/30"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent py-5"
            }
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <a href="#home" class="text-xl font-bold relative group flex items-center">
                        <div class="w-8 h-8 rounded-md bg-primary/10 flex items-center justify-center mr-2">
                            <i class="icon-code text-primary" />
                        </div>
                        <span class="text-primary">"W"</span>
                        <span>"isdom"</span>
                    </a>

                    <nav class="hidden md:block">
                        <ul class="flex space-x-1">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a
                                                href=item.href
                                                class=move || link_class(
                                                    item.href,
                                                    "px-3 py-2 rounded-md text-sm font-medium transition-colors relative block",
                                                )
                                            >
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>

                    <div class="flex items-center gap-2">
                        <button
                            class="rounded-full p-2 hover:bg-primary/10"
                            on:click=move |_| theme.toggle()
                            aria-label=move || theme.get().toggle_label()
                        >
                            {move || {
                                if theme.get().is_dark() {
                                    Either::Left(view! { <i class="icon-sun h-5 w-5" /> })
                                } else {
                                    Either::Right(view! { <i class="icon-moon h-5 w-5" /> })
                                }
                            }}
                        </button>

                        <a
                            href=RESUME_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hidden md:flex items-center gap-1 rounded-full border px-3 py-1 text-sm"
                        >
                            <i class="icon-download h-4 w-4" />
                            <span>"Resume"</span>
                        </a>
                        <a
                            href="#contact"
                            class="hidden md:flex rounded-full bg-primary text-primary-foreground px-3 py-1 text-sm"
                        >
                            "Let's Talk"
                        </a>

                        <button
                            class="md:hidden relative z-50 p-2"
                            on:click=toggle_menu
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open().to_string()
                        >
                            {move || {
                                if menu_open() {
                                    Either::Left(view! { <i class="icon-x h-6 w-6" /> })
                                } else {
                                    Either::Right(view! { <i class="icon-menu h-6 w-6" /> })
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <nav
                class="md:hidden fixed inset-0 bg-background/95 backdrop-blur-md z-40 flex items-center justify-center"
                class:pointer-events-none=move || !menu_open()
                style=move || Variant::FADE.overlay_style(Phase::from(menu_open()))
                aria-hidden=move || (!menu_open()).to_string()
            >
                <Stagger
                    visible=menu_open
                    choreography=Choreography::SECTION
                    class="flex flex-col items-center gap-6 text-center"
                >
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <StaggerItem index=i>
                                    <a
                                        href=item.href
                                        on:click=move |_| set_menu_open(false)
                                        class=move || link_class(
                                            item.href,
                                            "block px-3 py-2 text-xl font-medium transition-colors",
                                        )
                                    >
                                        {item.name}
                                    </a>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                    <StaggerItem index=NAV_ITEMS.len()>
                        <a
                            href=RESUME_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-1 rounded-full border px-3 py-1 text-sm"
                        >
                            <i class="icon-download h-4 w-4" />
                            <span>"Resume"</span>
                        </a>
                    </StaggerItem>
                    <StaggerItem index=NAV_ITEMS.len() + 1>
                        <a
                            href="#contact"
                            on:click=move |_| set_menu_open(false)
                            class="mt-2 rounded-full bg-primary text-primary-foreground px-4 py-2"
                        >
                            "Let's Talk"
                        </a>
                    </StaggerItem>
                </Stagger>
            </nav>
        </header>
    }
}
