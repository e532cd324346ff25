use swift_ui::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
