use leptos::{html, prelude::*};

use crate::motion::{Choreography, Phase};
use crate::reveal::{ObserverOptions, RevealLatch};
#[cfg(feature = "hydrate")]
use crate::reveal::report;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(feature = "hydrate")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Live registration of one element with an `IntersectionObserver`.
///
/// Dropping it disconnects the observer, after which the callback never runs.
#[cfg(feature = "hydrate")]
pub struct Subscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Subscription {
    fn observe(
        el: &web_sys::Element,
        options: ObserverOptions,
        latch: RwSignal<RevealLatch>,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                // None once the section is torn down
                if report(latch, intersecting).unwrap_or(true) {
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(el);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn unsubscribe(&self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Reports whether `target` has scrolled into view.
///
/// Starts `false` on the server and before the first observer report. An
/// element that is already on screen when mounted reveals on that first report.
pub fn use_reveal(target: NodeRef<html::Div>, options: ObserverOptions) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        match Subscription::observe(&el, options, latch) {
            Ok(sub) => {
                let sub = StoredValue::new_local(Some(sub));
                on_cleanup(move || {
                    if let Some(Some(sub)) = sub.try_update_value(Option::take) {
                        sub.unsubscribe();
                    }
                });
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
                latch.try_update(|l| l.unsupported());
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, options);

    Signal::derive(move || latch.with(|l| l.is_visible()))
}

#[derive(Debug, Clone, Copy)]
struct RevealContext {
    phase: Signal<Phase>,
    choreography: Choreography,
}

/// Container that fades in when `visible` flips, staggering its [`StaggerItem`]s.
#[component]
pub fn Stagger(
    #[prop(into)] visible: Signal<bool>,
    #[prop(default = Choreography::SECTION)] choreography: Choreography,
    #[prop(optional)] target: NodeRef<html::Div>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let phase = Signal::derive(move || Phase::from(visible.get()));
    provide_context(RevealContext {
        phase,
        choreography,
    });

    view! {
        <div
            node_ref=target
            class=class
            style=move || choreography.container_style(phase.get())
        >
            {children()}
        </div>
    }
}

/// Child of a [`Stagger`], starting `index * stagger` after its container.
#[component]
pub fn StaggerItem(
    index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = expect_context::<RevealContext>();

    view! {
        <div class=class style=move || ctx.choreography.item_style(ctx.phase.get(), index)>
            {children()}
        </div>
    }
}

/// Observes a fresh node and wraps `children` in a [`Stagger`] driven by it.
#[component]
pub fn RevealGroup(
    #[prop(default = Choreography::SECTION)] choreography: Choreography,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());

    view! {
        <Stagger visible=visible choreography=choreography target=target class=class>
            {children()}
        </Stagger>
    }
}
