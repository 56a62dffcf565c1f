//! Furni Cart Frontend Entry Point

mod app;
mod components;
mod config;
mod logger;
mod notifier;
mod storage;
mod store;
mod view;

use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    app::start();
}
