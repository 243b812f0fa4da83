pub mod app;
pub mod binding;
pub mod config;
pub mod controllers;
pub mod delivery;
pub mod dom;

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

// Binding twice would attach every listener twice.
thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if INITIALIZED.with(|flag| flag.replace(true)) {
        return;
    }

    let (contract, config_error) = config::load_contract(&document);
    let level = contract.log_level();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(*level.as_ref().unwrap_or(&log::Level::Debug));
    if let Some(err) = config_error {
        log::error!("Ignoring page configuration: {}", err);
    }
    if let Err(err) = level {
        log::warn!("{}, using debug", err);
    }

    app::init(&window, &document, &contract);
}

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // The module may load before the markup is parsed.
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(hydrate);
        if let Err(err) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            // The logger is not set up until `hydrate` runs.
            web_sys::console::error_2(
                &"Portfolio init could not wait for DOMContentLoaded:".into(),
                &err,
            );
        }
    } else {
        hydrate();
    }
}
