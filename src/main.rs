//! Taskboard Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod fetcher;
mod gate;
mod http;
mod markdown;
mod models;
mod pages;
mod session;
mod store;
mod task_list;
mod validation;

#[cfg(test)]
mod test_support;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load_build_env();
    mount_to_body(move || view! { <App config=config.clone() /> });
}
