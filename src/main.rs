// src/main.rs: Activity Board (Rust + Yew + WASM)
//
// Loads the activity catalog from the backend, renders one card per
// activity, and sends signup / unregister requests. Every successful change
// is followed by a full re-fetch.

mod api;
mod app;
mod config;
mod error;
mod model;
mod notice;
mod state;
mod workflow;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
