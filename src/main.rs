#![allow(warnings)]
//! QuickList Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(api = %quicklist_core::ClientConfig::from_build_env().api_url, "starting QuickList");
    mount_to_body(App);
}
