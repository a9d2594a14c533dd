use leptos::prelude::*;

use crate::carousel::Carousel;
use crate::content::{Testimonial, PLACEHOLDER_AVATAR, TESTIMONIALS};

use super::reveal::{RevealGroup, StaggerItem};
use super::SectionIntro;

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = Memo::new(move |_| carousel.with(|c| c.index()));

    view! {
        <section id="testimonials" class="section-container py-20 bg-background relative overflow-hidden">
            <div class="container relative z-10">
                <SectionIntro
                    badge="Testimonials"
                    title="What People Say"
                    blurb="Feedback from colleagues, clients, and collaborators I've had the pleasure of working with."
                />

                // small screens get one card at a time
                <div class="md:hidden">
                    <div class="relative">
                        {move || {
                            TESTIMONIALS
                                .get(current.get())
                                .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        }}
                        <div class="flex justify-between items-center mt-6">
                            <button
                                class="rounded-full border p-2"
                                aria-label="Previous testimonial"
                                on:click=move |_| carousel.update(Carousel::prev)
                            >
                                <i class="icon-chevron-left" />
                            </button>
                            <div class="flex gap-2">
                                {(0..TESTIMONIALS.len())
                                    .map(|i| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if current.get() == i {
                                                        "w-2.5 h-2.5 rounded-full bg-primary"
                                                    } else {
                                                        "w-2.5 h-2.5 rounded-full bg-primary/20"
                                                    }
                                                }
                                                aria-label=format!("Go to testimonial {}", i + 1)
                                                on:click=move |_| carousel.update(|c| c.select(i))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <button
                                class="rounded-full border p-2"
                                aria-label="Next testimonial"
                                on:click=move |_| carousel.update(Carousel::next)
                            >
                                <i class="icon-chevron-right" />
                            </button>
                        </div>
                    </div>
                </div>

                <RevealGroup class="hidden md:grid md:grid-cols-2 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, testimonial)| {
                            view! {
                                <StaggerItem index=i class="h-full">
                                    <TestimonialCard testimonial=testimonial />
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
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="bg-card rounded-xl p-6 shadow-lg border border-border/50 h-full flex flex-col">
            <i class="icon-quote text-primary/30 text-4xl mb-4" />
            <blockquote class="text-muted-foreground italic leading-relaxed flex-1">
                {testimonial.quote}
            </blockquote>
            <figcaption class="flex items-center gap-4 mt-6">
                <img
                    src=testimonial.image.unwrap_or(PLACEHOLDER_AVATAR)
                    alt=testimonial.name
                    class="w-12 h-12 rounded-full object-cover border-2 border-primary/20"
                />
                <div>
                    <div class="font-semibold">{testimonial.name}</div>
                    <div class="text-sm text-muted-foreground">{testimonial.title}</div>
                </div>
            </figcaption>
        </figure>
    }
}
