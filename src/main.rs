#![allow(warnings)]
//! Pessoa Admin Entry Point

mod api;
mod app;
mod avatar;
mod components;
mod models;
mod pagination;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
