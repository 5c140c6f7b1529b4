#![allow(warnings)]
//! Date-Course Frontend Entry Point

mod api;
mod bootstrap;
mod budget;
mod components;
mod config;
mod dom;
mod error;
mod models;
mod pages;
mod routes;
mod store;

fn main() {
    console_error_panic_hook::set_once();
    config::init_logging(console_log::init_with_level);
    bootstrap::run();
}
