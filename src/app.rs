mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::config::{SITE_DESCRIPTION, SITE_TITLE};
use crate::theme::Theme;

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::{Header, ScrollProgress};
use hero::Hero;
use projects::Projects;
use skills::Skills;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Colour scheme shared with every component. The header toggle is the only writer.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
    }
}

/// Window scroll offset, read by the header, footer and progress bar.
#[derive(Debug, Clone, Copy)]
pub struct ScrollContext {
    pub y: Signal<f64>,
}

fn provide_theme() -> ThemeContext {
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        // read after hydration so the server-rendered class matches first
        Effect::watch(
            || (),
            move |_, _, _| {
                set_theme.set(stored.get_untracked());
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |theme, _, _| {
                set_stored.set(*theme);
            },
            false,
        );
    }

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();
    let (_, scroll_y) = use_window_scroll();
    provide_context(ScrollContext { y: scroll_y });

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />

        <Router>
            <div class=move || {
                format!("{} min-h-screen bg-background text-foreground", theme.get().class())
            }>
                <ScrollProgress />
                <Header />
                <main class="min-h-screen">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The whole portfolio, one anchored section after another.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Skills />
        <Experience />
        <Projects />
        <Testimonials />
        <Contact />
    }
}

/// Small heading block shared by the content sections.
#[component]
fn SectionIntro(
    badge: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center mb-16">
            <div class="inline-block px-3 py-1 bg-primary/10 rounded-full text-primary text-sm font-medium mb-4">
                {badge}
            </div>
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            <div class="w-20 h-1 bg-primary rounded-full mb-6"></div>
            <p class="max-w-2xl text-muted-foreground text-lg">{blurb}</p>
        </div>
    }
}
