mod app;
mod browser;
mod components;
mod config;
mod logging;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    let config = config::load();
    logging::setup_logging(&config);

    mount_to_body(move || view! { <App config=config /> });
}
