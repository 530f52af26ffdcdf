//! FoodHub Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod insights;
mod logging;
mod models;
mod pages;
mod poll;
mod routes;
mod store;

use app::{App, ConfigErrorView};
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    match AppConfig::from_env() {
        Ok(config) => {
            logging::init(config.log_level);
            log::info!("starting FoodHub against {}", config.supabase_url);
            mount_to_body(move || view! { <App config=config.clone() /> });
        }
        Err(error) => {
            logging::init(log::LevelFilter::Warn);
            log::error!("configuration error: {}", error);
            mount_to_body(move || view! { <ConfigErrorView error=error.clone() /> });
        }
    }
}
