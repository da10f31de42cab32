use client::app::App;

fn main() {
    client::init_logging();
    leptos::mount::mount_to_body(App);
}
