use leptos::{html, prelude::*};

use crate::config::PORTFOLIO_VIDEO_PATH;
use crate::reveal::ObserverOptions;

use super::reveal::{use_reveal, Stagger, StaggerItem};
use super::SectionIntro;

struct Role {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const ROLES: &[Role] = &[
    Role {
        icon: "icon-code",
        title: "Software Engineer",
        blurb: "Experienced in building robust web applications and APIs using Django, React, and other modern technologies. Focused on creating scalable, maintainable, and user-friendly solutions.",
    },
    Role {
        icon: "icon-heart-pulse",
        title: "Health Informatician",
        blurb: "Specialized in health information systems, data analytics, and improving healthcare delivery through technology. Experienced with DHIMS2 and other healthcare data management platforms.",
    },
    Role {
        icon: "icon-database",
        title: "Data Specialist",
        blurb: "Skilled in data collection, analysis, and visualization using tools like SPSS, STATA, and EPI INFO. Experienced in developing custom data collection tools with Kobo Collect, ODK, and Google Forms.",
    },
];

#[component]
pub fn About() -> impl IntoView {
    // the bio row drives both groups
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());

    view! {
        <section id="about" class="section-container py-20 bg-background relative overflow-hidden">
            <div class="container relative z-10">
                <SectionIntro
                    badge="About Me"
                    title="Bridging Healthcare & Technology"
                    blurb="A passionate software engineer and health informatician dedicated to creating innovative solutions that improve healthcare delivery and patient outcomes."
                />

                <Stagger visible=visible target=target class="grid md:grid-cols-2 gap-12 items-center mb-16">
                    <StaggerItem index=0 class="relative">
                        <div class="relative rounded-2xl overflow-hidden border border-border/50 shadow-xl">
                            <img
                                src="/assets/coder.jpg"
                                alt="Wisdom Dzontoh"
                                class="object-cover w-full h-[500px]"
                            />
                        </div>
                        <Badge
                            icon="icon-award"
                            title="Professional Excellence"
                            note="Dedicated to quality and innovation"
                            class="absolute -bottom-6 -right-6"
                        />
                        <Badge
                            icon="icon-graduation-cap"
                            title="Continuous Learner"
                            note="Always expanding my knowledge"
                            class="absolute -top-6 -left-6"
                        />
                    </StaggerItem>

                    <StaggerItem index=1 class="space-y-6">
                        <h3 class="text-2xl font-bold text-primary">"Who I Am"</h3>
                        <div class="space-y-4 text-muted-foreground">
                            <p class="leading-relaxed">
                                "I am a "
                                <span class="text-foreground font-medium">
                                    "software engineer and health informatician"
                                </span>
                                " with a passion for developing solutions that address real-world healthcare challenges. My unique blend of technical expertise and healthcare domain knowledge allows me to create systems that are both technically robust and clinically relevant."
                            </p>
                            <p class="leading-relaxed">
                                "With experience at the "
                                <span class="text-foreground font-medium">
                                    "Greater Accra Regional Health Directorate"
                                </span> " and collaborations with organizations like the "
                                <span class="text-foreground font-medium">
                                    "World Health Organization"
                                </span>
                                ", I've developed a deep understanding of healthcare systems and the critical role technology plays in improving them."
                            </p>
                            <p class="leading-relaxed">
                                "I'm currently focused on building innovative applications that leverage "
                                <span class="text-foreground font-medium">"machine learning"</span>
                                " and "
                                <span class="text-foreground font-medium">"data analytics"</span>
                                " to provide personalized healthcare solutions and improve patient outcomes."
                            </p>
                        </div>
                        <div class="flex flex-wrap gap-4 pt-4">
                            <a href="#experience" class="rounded-full border px-4 py-2">
                                "My Experience"
                            </a>
                            <a href="#skills" class="rounded-full border px-4 py-2">
                                "My Skills"
                            </a>
                            <a
                                href=PORTFOLIO_VIDEO_PATH
                                download
                                class="flex items-center gap-2 rounded-full border px-4 py-2"
                            >
                                <i class="icon-video" />
                                "Portfolio Video"
                            </a>
                        </div>
                    </StaggerItem>
                </Stagger>

                <Stagger visible=visible class="grid md:grid-cols-3 gap-6">
                    {ROLES
                        .iter()
                        .enumerate()
                        .map(|(i, role)| {
                            view! {
                                <StaggerItem
                                    index=i
                                    class="bg-card rounded-xl p-6 shadow-lg border border-border/50 hover:border-primary/20 transition-all duration-300 hover:shadow-xl group"
                                >
                                    <div class="flex items-center mb-4">
                                        <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center mr-4">
                                            <i class=format!("{} text-primary", role.icon) />
                                        </div>
                                        <h3 class="text-xl font-semibold group-hover:text-primary transition-colors duration-300">
                                            {role.title}
                                        </h3>
                                    </div>
                                    <p class="text-muted-foreground leading-relaxed">{role.blurb}</p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </Stagger>
            </div>
        </section>
    }
}

#[component]
fn Badge(
    icon: &'static str,
    title: &'static str,
    note: &'static str,
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{class} bg-card p-4 rounded-xl shadow-lg border border-border/50 max-w-[280px]",
        )>
            <div class="flex items-center gap-3">
                <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center">
                    <i class=format!("{icon} text-primary") />
                </div>
                <div>
                    <h3 class="font-semibold">{title}</h3>
                    <p class="text-sm text-muted-foreground">{note}</p>
                </div>
            </div>
        </div>
    }
}
