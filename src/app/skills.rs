use leptos::{html, prelude::*};

use crate::config::SKILL_BAR_DELAY;
use crate::content::{Skill, SkillCategory, SKILL_CATEGORIES};
use crate::reveal::ObserverOptions;

use super::reveal::{use_reveal, Stagger, StaggerItem};
use super::SectionIntro;

const TOOLS: &[&str] = &[
    "VS Code",
    "Git",
    "Docker",
    "Postman",
    "Jira",
    "Figma",
    "Kobo Collect",
    "ODK",
    "REDCAP",
    "Survey CTO",
    "DHIMS2",
    "Excel",
];

#[component]
pub fn Skills() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());
    let (filled, set_filled) = signal(false);

    // bars start growing a beat after the cards land
    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible {
                set_timeout(
                    move || {
                        set_filled.try_set(true);
                    },
                    SKILL_BAR_DELAY,
                );
            }
        },
        true,
    );

    view! {
        <section id="skills" class="section-container py-20 bg-muted/30 relative overflow-hidden">
            <div class="container relative z-10">
                <SectionIntro
                    badge="My Skills"
                    title="Technical Expertise"
                    blurb="A comprehensive overview of my technical skills and proficiency levels across various domains."
                />

                <Stagger visible=visible target=target class="grid md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <StaggerItem index=i>
                                    <CategoryCard category=category filled=filled />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </Stagger>

                <div class="mt-16 text-center">
                    <h3 class="text-2xl font-bold mb-8">"Tools & Technologies"</h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {TOOLS
                            .iter()
                            .map(|tool| {
                                view! {
                                    <span class="px-4 py-2 bg-card rounded-full border border-border/50 text-sm font-medium hover:border-primary/50 hover:bg-primary/5 transition-colors duration-300 shadow-sm">
                                        {*tool}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory, filled: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="bg-card rounded-xl p-6 shadow-lg border border-border/50 h-full">
            <div class="flex items-center mb-6">
                <div class="w-10 h-10 rounded-full bg-primary/10 flex items-center justify-center mr-3">
                    <i class=format!("{} text-primary", category.icon) />
                </div>
                <h3 class="text-xl font-semibold">{category.category}</h3>
            </div>
            <div class="space-y-6">
                {category
                    .items
                    .iter()
                    .map(|skill| view! { <SkillBar skill=skill filled=filled /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, filled: ReadSignal<bool>) -> impl IntoView {
    let percentage = skill.percentage;

    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="font-medium">{skill.name}</span>
                <span class="text-xs px-2 py-1 rounded-full bg-muted text-muted-foreground">
                    {skill.level.as_str()}
                </span>
            </div>
            <div class="h-2 w-full rounded-full bg-primary/10 overflow-hidden">
                <div
                    class="h-full rounded-full bg-primary transition-all duration-1000 ease-out"
                    style=move || {
                        let width = if filled() { percentage } else { 0 };
                        format!("width: {width}%")
                    }
                    role="progressbar"
                    aria-valuenow=percentage.to_string()
                    aria-valuemin="0"
                    aria-valuemax="100"
                />
            </div>
        </div>
    }
}
