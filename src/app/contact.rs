use leptos::{either::*, prelude::*};

use crate::config::{
    mailto, CONTACT_FORM_ENDPOINT, EMAIL, GITHUB_URL, LINKEDIN_URL, LOCATION, PHONE_DISPLAY,
    PHONE_HREF, TWITTER_URL,
};
use crate::contact::{
    expire, settle, submit, Completion, ContactFlow, ContactForm, Field, FormRelay, SubmitError,
};

use super::reveal::{RevealGroup, StaggerItem};
use super::SectionIntro;

/// Posts the form as JSON to the configured relay with `fetch`.
struct FetchRelay {
    endpoint: &'static str,
}

#[cfg(feature = "hydrate")]
fn js_err(err: wasm_bindgen::JsValue) -> SubmitError {
    SubmitError::Transport(format!("{err:?}"))
}

impl FormRelay for FetchRelay {
    #[cfg(feature = "hydrate")]
    async fn post(&self, form: &ContactForm) -> Result<u16, SubmitError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let body = form.to_json()?;
        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        let headers = web_sys::Headers::new().map_err(js_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
        headers.set("Accept", "application/json").map_err(js_err)?;
        init.set_headers(&headers);
        init.set_body(&wasm_bindgen::JsValue::from_str(&body));

        let request =
            web_sys::Request::new_with_str_and_init(self.endpoint, &init).map_err(js_err)?;
        let response = JsFuture::from(window().fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let response: web_sys::Response = response.dyn_into().map_err(js_err)?;
        Ok(response.status())
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post(&self, _form: &ContactForm) -> Result<u16, SubmitError> {
        Err(SubmitError::Transport(format!(
            "no browser to reach {}",
            self.endpoint
        )))
    }
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log::warn!("alert failed: {err:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn alert(message: &str) {
    log::warn!("{message}");
}

#[component]
pub fn Contact() -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::new());
    let submitting = Memo::new(move |_| flow.with(|f| f.is_submitting()));
    let submitted = Memo::new(move |_| flow.with(|f| f.is_submitted()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = flow.try_update(|f| f.begin()).flatten() else {
            // already in flight
            return;
        };
        leptos::task::spawn_local(async move {
            let relay = FetchRelay {
                endpoint: CONTACT_FORM_ENDPOINT,
            };
            let result = submit(&relay, &form).await;
            // section may be gone by now
            let Some(completion) = settle(flow, result) else {
                return;
            };
            if let Some(delay) = completion.reset_after() {
                set_timeout(
                    move || {
                        expire(flow);
                    },
                    delay,
                );
            }
            match completion {
                Completion::Sent => log::info!("contact form sent"),
                Completion::Failed(err) => {
                    log::error!("contact form submission failed: {err}");
                    alert(err.alert_message());
                }
                Completion::Ignored => {}
            }
        });
    };

    view! {
        <section id="contact" class="section-container py-20 bg-muted/30 relative overflow-hidden">
            <div class="container relative z-10">
                <SectionIntro
                    badge="Get In Touch"
                    title="Let's Work Together"
                    blurb="Have a project in mind or want to discuss potential opportunities? Feel free to reach out. I'm always open to new ideas and collaborations."
                />

                <RevealGroup class="grid lg:grid-cols-5 gap-8">
                    <StaggerItem index=0 class="lg:col-span-2 space-y-6">
                        <InfoCard icon="icon-mail" label="Email" value=EMAIL href=mailto() />
                        <InfoCard
                            icon="icon-phone"
                            label="Phone"
                            value=PHONE_DISPLAY
                            href=PHONE_HREF.to_string()
                        />
                        <div class="bg-card rounded-xl p-6 shadow-lg border border-border/50 flex items-center gap-4">
                            <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center">
                                <i class="icon-map-pin text-primary" />
                            </div>
                            <div>
                                <h3 class="font-semibold">"Location"</h3>
                                <p class="text-muted-foreground">{LOCATION}</p>
                            </div>
                        </div>
                        <div class="bg-card rounded-xl p-6 shadow-lg border border-border/50">
                            <h3 class="font-semibold mb-4">"Connect With Me"</h3>
                            <div class="flex gap-4">
                                <SocialLink href=GITHUB_URL label="GitHub" icon="icon-github" />
                                <SocialLink href=LINKEDIN_URL label="LinkedIn" icon="icon-linkedin" />
                                <SocialLink href=TWITTER_URL label="Twitter" icon="icon-twitter" />
                            </div>
                        </div>
                    </StaggerItem>

                    <StaggerItem
                        index=1
                        class="lg:col-span-3 bg-card rounded-xl p-8 shadow-lg border border-border/50"
                    >
                        {move || {
                            if submitted() {
                                Either::Left(
                                    view! {
                                        <div class="h-full flex flex-col items-center justify-center text-center py-12">
                                            <div class="w-16 h-16 rounded-full bg-green-500/10 flex items-center justify-center mb-4">
                                                <i class="icon-check text-green-500 text-3xl" />
                                            </div>
                                            <h3 class="text-2xl font-bold mb-2">"Message Sent!"</h3>
                                            <p class="text-muted-foreground max-w-md">
                                                "Thank you for reaching out. I'll get back to you as soon as possible."
                                            </p>
                                        </div>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <form class="space-y-6" on:submit=on_submit>
                                            <h3 class="text-2xl font-bold mb-2">"Send Me a Message"</h3>
                                            <div class="grid md:grid-cols-2 gap-6">
                                                <FormField
                                                    flow=flow
                                                    field=Field::Name
                                                    label="Your Name"
                                                    placeholder="John Doe"
                                                />
                                                <FormField
                                                    flow=flow
                                                    field=Field::Email
                                                    label="Your Email"
                                                    placeholder="john@example.com"
                                                />
                                            </div>
                                            <FormField
                                                flow=flow
                                                field=Field::Subject
                                                label="Subject"
                                                placeholder="Project Inquiry"
                                            />
                                            <FormField
                                                flow=flow
                                                field=Field::Message
                                                label="Message"
                                                placeholder="Tell me about your project..."
                                            />
                                            <button
                                                type="submit"
                                                disabled=submitting
                                                class="w-full flex items-center justify-center gap-2 rounded-full bg-primary text-primary-foreground px-6 py-3 disabled:opacity-70"
                                            >
                                                {move || {
                                                    if submitting() {
                                                        Either::Left(
                                                            view! {
                                                                <i class="icon-loader animate-spin" />
                                                                "Sending..."
                                                            },
                                                        )
                                                    } else {
                                                        Either::Right(
                                                            view! {
                                                                <i class="icon-send" />
                                                                "Send Message"
                                                            },
                                                        )
                                                    }
                                                }}
                                            </button>
                                        </form>
                                    },
                                )
                            }
                        }}
                    </StaggerItem>
                </RevealGroup>
            </div>
        </section>
    }
}

/// Labelled, required input bound to one field of the form.
#[component]
fn FormField(
    flow: RwSignal<ContactFlow>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let name = field.as_str();
    let value = move || flow.with(|f| f.form().get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| flow.update(|f| f.edit(field, event_target_value(&ev)));
    let input_class = "w-full rounded-md border border-border/50 bg-background px-3 py-2 focus:border-primary focus:outline-none";

    view! {
        <div class="space-y-2">
            <label for=name class="text-sm font-medium">
                {label}
            </label>
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                id=name
                                name=name
                                placeholder=placeholder
                                rows="6"
                                required
                                class=format!("{input_class} resize-none")
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
                _ => {
                    let kind = if field == Field::Email { "email" } else { "text" };
                    Either::Right(
                        view! {
                            <input
                                id=name
                                name=name
                                type=kind
                                placeholder=placeholder
                                required
                                class=input_class
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
            }}
        </div>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: String,
) -> impl IntoView {
    view! {
        <div class="bg-card rounded-xl p-6 shadow-lg border border-border/50 flex items-center gap-4">
            <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center">
                <i class=format!("{icon} text-primary") />
            </div>
            <div>
                <h3 class="font-semibold">{label}</h3>
                <a href=href class="text-muted-foreground hover:text-primary transition-colors">
                    {value}
                </a>
            </div>
        </div>
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="w-10 h-10 rounded-full bg-primary/10 flex items-center justify-center text-primary hover:bg-primary hover:text-primary-foreground transition-colors"
        >
            <i class=icon />
        </a>
    }
}
