#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    leptos::mount::hydrate_body(App);
}
