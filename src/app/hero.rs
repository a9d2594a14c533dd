use leptos::prelude::*;

use crate::config::{mailto, CV_PATH, GITHUB_URL, LINKEDIN_URL};
use crate::content::HERO_TITLES;
use crate::motion::Choreography;
use crate::typewriter::{Speeds, Typewriter};

use super::reveal::{Stagger, StaggerItem};

/// Drives the rotating title until the hero unmounts.
fn run_typewriter(mut writer: Typewriter, set_text: WriteSignal<&'static str>, delay: std::time::Duration) {
    set_timeout(
        move || {
            let next = writer.tick();
            if set_text.try_set(writer.text()).is_some() {
                // signal disposed
                return;
            }
            run_typewriter(writer, set_text, next);
        },
        delay,
    );
}

#[component]
pub fn Hero() -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let (title, set_title) = signal("");

    // the hero is above the fold, reveal as soon as we're in the browser
    Effect::new(move |_| {
        set_loaded.set(true);
        let writer = Typewriter::new(HERO_TITLES, Speeds::default());
        let delay = writer.first_delay();
        run_typewriter(writer, set_title, delay);
    });

    view! {
        <section id="home" class="relative min-h-screen flex items-center pt-20 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-background via-background/95 to-background/90 z-0">
                <div class="absolute top-20 right-10 w-96 h-96 bg-primary/10 rounded-full filter blur-[100px] opacity-30" />
                <div class="absolute bottom-20 left-10 w-96 h-96 bg-secondary/10 rounded-full filter blur-[100px] opacity-30" />
            </div>

            <div class="container mx-auto px-4 py-16 relative z-10">
                <Stagger
                    visible=loaded
                    choreography=Choreography::CASCADE
                    class="flex flex-col-reverse lg:flex-row items-center gap-12"
                >
                    <StaggerItem index=0 class="flex-1">
                        <div class="space-y-6">
                            <div class="inline-block px-4 py-1 rounded-full bg-primary/10 text-primary text-sm font-medium mb-2">
                                "Available for new opportunities"
                            </div>
                            <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight">
                                <span class="text-foreground">"Hi, I'm "</span>
                                <span class="text-primary">"Wisdom Dzontoh"</span>
                            </h1>
                            <h2 class="text-xl md:text-2xl font-medium flex items-center gap-2">
                                <span>"I'm a"</span>
                                <span class="text-primary font-semibold typed-cursor">{title}</span>
                            </h2>
                            <p class="text-lg text-muted-foreground max-w-2xl leading-relaxed">
                                "I build robust, scalable web applications with a focus on backend development, API integrations, and data automation. Specialized in "
                                <span class="text-primary font-medium">"Python"</span>
                                ", "
                                <span class="text-primary font-medium">"Django"</span>
                                ", and "
                                <span class="text-primary font-medium">"RESTful APIs"</span>
                                " to create efficient, maintainable solutions that solve real business problems."
                            </p>
                            <div class="flex flex-wrap gap-4 pt-4">
                                <a
                                    href="#projects"
                                    class="rounded-full bg-primary text-primary-foreground px-6 py-3"
                                >
                                    "View My Work"
                                </a>
                                <a
                                    href=CV_PATH
                                    download
                                    class="flex items-center gap-2 rounded-full border px-6 py-3"
                                >
                                    <span>"Download CV"</span>
                                    <i class="icon-download" />
                                </a>
                            </div>
                            <div class="flex gap-6 pt-4">
                                <a
                                    href=GITHUB_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="GitHub"
                                    class="text-muted-foreground hover:text-primary"
                                >
                                    <i class="icon-github" />
                                </a>
                                <a
                                    href=LINKEDIN_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="LinkedIn"
                                    class="text-muted-foreground hover:text-primary"
                                >
                                    <i class="icon-linkedin" />
                                </a>
                                <a
                                    href=mailto()
                                    aria-label="Email"
                                    class="text-muted-foreground hover:text-primary"
                                >
                                    <i class="icon-mail" />
                                </a>
                            </div>
                        </div>
                    </StaggerItem>

                    <StaggerItem index=1 class="flex-1 flex justify-center">
                        <div class="relative w-64 h-64 md:w-80 md:h-80 lg:w-96 lg:h-96">
                            <div class="relative w-full h-full rounded-full overflow-hidden border-4 border-primary/10 shadow-2xl">
                                <img
                                    src="/assets/currentpic.jpg"
                                    alt="Wisdom Dzontoh"
                                    class="object-cover w-full h-full"
                                />
                            </div>
                            <div class="absolute -bottom-4 -right-4 w-24 h-24 bg-card rounded-lg shadow-lg flex items-center justify-center p-2 border border-border/50">
                                <div class="text-center">
                                    <div class="text-3xl font-bold text-primary">"3+"</div>
                                    <div class="text-xs text-muted-foreground">"Years Experience"</div>
                                </div>
                            </div>
                            <div class="absolute -top-4 -left-4 bg-card rounded-lg shadow-lg p-3 border border-border/50">
                                <a
                                    href="https://github.com/wisdomdzontoh/AI-chatbot-SAAS"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 text-sm"
                                >
                                    <span>"Latest Project"</span>
                                    <i class="icon-external-link text-primary" />
                                </a>
                            </div>
                        </div>
                    </StaggerItem>
                </Stagger>

                <a
                    href="#about"
                    aria-label="Scroll down"
                    class="absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 text-muted-foreground hover:text-primary transition-opacity delay-[1500ms] duration-500"
                    class:opacity-0=move || !loaded()
                >
                    <span class="text-sm">"Scroll Down"</span>
                    <i class="icon-arrow-down animate-bounce" />
                </a>
            </div>
        </section>
    }
}
