fn main() {
    splitbook_frontend::logging::init();
    yew::Renderer::<splitbook_frontend::app::App>::new().render();
}
