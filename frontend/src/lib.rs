// Keep this shim free of anything but hydration wiring; every extra
// dependency here ends up in the wasm bundle.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
