pub mod app;
pub mod components;
pub mod hooks;
pub mod logger;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::default_level()).ok();
    leptos::mount_to_body(app::App);
}
