mod api;
mod app;
mod avatar;
mod components;
mod config;
mod error;
mod layout;
mod motion;
mod navigation;
mod pages;
mod session;
mod summary;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
