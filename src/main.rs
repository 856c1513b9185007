mod api;
mod app;
mod components;
mod models;
mod pages;
mod session;
mod storage;
mod token;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
