use leptos::{html, prelude::*};

use crate::content::{
    featured_projects, filter_projects, unique_technologies, Project, PLACEHOLDER_IMAGE, PROJECTS,
};

use crate::reveal::{Entrance, ObserverOptions};

use super::reveal::{use_reveal, Stagger, StaggerItem};
use super::SectionIntro;

#[component]
pub fn Projects() -> impl IntoView {
    // None is "All"
    let (tech, set_tech) = signal(None::<&'static str>);

    // the featured row drives both grids
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());

    // swapped in cards start hidden and cascade in two frames later, once
    // the browser has painted their hidden style
    let entrance = RwSignal::new(Entrance::default());
    Effect::watch(
        move || tech.get(),
        move |tech, _, _| {
            let tech = *tech;
            request_animation_frame(move || {
                request_animation_frame(move || {
                    entrance.try_update(|e| e.play(tech));
                });
            });
        },
        true,
    );
    let grid_visible =
        Signal::derive(move || entrance.with(|e| e.is_shown(&tech.get(), visible.get())));

    let chip_class = move |value: Option<&'static str>| {
        if tech.get() == value {
            "px-4 py-1.5 rounded-full text-sm font-medium bg-primary text-primary-foreground transition-colors"
        } else {
            "px-4 py-1.5 rounded-full text-sm font-medium bg-muted text-muted-foreground hover:bg-primary/10 transition-colors"
        }
    };

    view! {
        <section id="projects" class="section-container py-20 bg-muted/30 relative overflow-hidden">
            <div class="container relative z-10">
                <SectionIntro
                    badge="My Work"
                    title="Featured Projects"
                    blurb="A showcase of my recent projects, demonstrating my skills in web development, API integration, and data automation."
                />

                <Stagger visible=visible target=target class="grid md:grid-cols-3 gap-8 mb-16">
                    {featured_projects(PROJECTS)
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <StaggerItem index=i class="h-full">
                                    <ProjectCard project=project />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </Stagger>

                <div class="flex flex-wrap justify-center gap-2 mb-10" role="group" aria-label="Filter projects">
                    <button class=move || chip_class(None) on:click=move |_| set_tech(None)>
                        "All"
                    </button>
                    {unique_technologies(PROJECTS)
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class=move || chip_class(Some(t))
                                    on:click=move |_| set_tech(Some(t))
                                >
                                    {t}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Stagger visible=grid_visible class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter_projects(PROJECTS, tech.get())
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| {
                                view! {
                                    <StaggerItem index=i class="h-full">
                                        <ProjectCard project=project />
                                    </StaggerItem>
                                }
                            })
                            .collect_view()
                    }}
                </Stagger>

                <div class="text-center mt-12">
                    <a
                        href="https://github.com/wisdomdzontoh"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 rounded-full border px-6 py-3"
                    >
                        <i class="icon-github" />
                        "View More on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let image = if project.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        project.image
    };

    view! {
        <article class="group relative h-full flex flex-col bg-card rounded-xl overflow-hidden border border-border/50 shadow-lg hover:shadow-xl hover:border-primary/20 transition-all duration-300">
            {project
                .featured
                .then(|| {
                    view! {
                        <span class="absolute top-3 right-3 z-10 px-2 py-1 text-xs rounded-full bg-primary text-primary-foreground">
                            "Featured"
                        </span>
                    }
                })}
            <div class="relative h-48 overflow-hidden">
                <img
                    src=image
                    alt=project.title
                    class="object-cover w-full h-full transition-transform duration-500 group-hover:scale-105"
                />
            </div>
            <div class="flex-1 flex flex-col p-6">
                <h3 class="text-xl font-semibold mb-2 group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-muted-foreground text-sm mb-4 flex-1">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded-full bg-primary/5 text-primary">
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 text-sm">
                    {project
                        .github
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-1 hover:text-primary"
                                >
                                    <i class="icon-github" />
                                    "Code"
                                </a>
                            }
                        })}
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-1 hover:text-primary"
                    >
                        <i class="icon-external-link" />
                        "Live Demo"
                    </a>
                </div>
            </div>
        </article>
    }
}
