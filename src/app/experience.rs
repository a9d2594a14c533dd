use leptos::prelude::*;

use crate::content::{Experience as Entry, EXPERIENCES};
use crate::motion::Choreography;

use super::reveal::{RevealGroup, StaggerItem};
use super::SectionIntro;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="section-container py-20 bg-background relative overflow-hidden">
            <div class="container relative z-10">
                <SectionIntro
                    badge="My Journey"
                    title="Professional Experience"
                    blurb="My career path and professional experiences that have shaped my skills and expertise."
                />

                <RevealGroup choreography=Choreography::CASCADE class="relative">
                    <div class="absolute left-0 md:left-1/2 transform md:-translate-x-1/2 top-0 bottom-0 w-0.5 bg-border" />
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            // alternate sides on wide screens
                            let side = if i % 2 == 0 { "md:flex-row" } else { "md:flex-row-reverse" };
                            view! {
                                <StaggerItem
                                    index=i
                                    class=format!("relative flex flex-col {side} items-center mb-12 last:mb-0")
                                >
                                    <div class="absolute left-0 md:left-1/2 transform -translate-x-1/2 w-10 h-10 rounded-full bg-primary/10 flex items-center justify-center z-10 border-4 border-background">
                                        <i class="icon-briefcase text-primary" />
                                    </div>
                                    <div class="w-full md:w-1/2 pl-12 md:pl-0 md:px-8">
                                        <TimelineCard entry=entry />
                                    </div>
                                    <div class="hidden md:block md:w-1/2" />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(entry: &'static Entry) -> impl IntoView {
    view! {
        <div class="bg-card rounded-xl p-6 shadow-lg border border-border/50 hover:border-primary/20 transition-all duration-300">
            <div class="flex flex-wrap gap-2 mb-3">
                {entry
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="text-xs px-2 py-1 rounded-full bg-primary/5 text-primary">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <h3 class="text-xl font-semibold">{entry.role}</h3>
            <p class="text-primary font-medium">{entry.company}</p>
            <div class="flex flex-wrap gap-4 mt-2 mb-4 text-sm text-muted-foreground">
                <span class="flex items-center gap-1">
                    <i class="icon-calendar" />
                    {entry.period}
                </span>
                {entry
                    .location
                    .map(|location| {
                        view! {
                            <span class="flex items-center gap-1">
                                <i class="icon-map-pin" />
                                {location}
                            </span>
                        }
                    })}
            </div>
            <p class="text-muted-foreground mb-4">{entry.description}</p>
            <ul class="space-y-2">
                {entry
                    .tasks
                    .iter()
                    .map(|task| {
                        view! {
                            <li class="flex items-start gap-2 text-sm">
                                <span class="w-1.5 h-1.5 rounded-full bg-primary mt-2 shrink-0" />
                                <span>{*task}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
