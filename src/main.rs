#![allow(warnings)]
//! QMS Portal Frontend Entry Point

mod api;
mod app;
mod components;
mod connection;
mod context;
mod format;
mod http;
mod markdown;
mod models;
mod parse;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
