//! InkBoard - browser-wallet dapp for ink! smart contracts
//!
//! Connect a browser extension wallet, pick an account and talk to ink!
//! contracts on the selected network. Chain communication is delegated to
//! the bundled client library; this crate is the UI and the session
//! plumbing around it.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;
pub mod wallets;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("InkBoard starting...");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once the WASM bundle is live.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id("leptos-loading") else {
        log::warn!("loading element not found");
        return;
    };

    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        html_element.class_list().add_1("hidden").ok();
    }
    element.set_attribute("style", "display: none;").ok();
}
