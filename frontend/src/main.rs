use frontend::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Using backend at {}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
