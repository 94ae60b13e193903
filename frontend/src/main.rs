use expense_tracker_frontend::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting expense tracker frontend");
    yew::Renderer::<App>::new().render();
}
