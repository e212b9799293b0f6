//! Activity Board Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod render;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_document();
    logging::init(config.log_level);
    log::info!("starting activity board, api base {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
