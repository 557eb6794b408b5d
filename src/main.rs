mod app;
mod content;
mod cursor;
mod effects;
mod konami;
mod mascot;
mod particles;
mod scrollspy;
mod sections;
mod theme;
mod viewport;

fn main() {
    dioxus::launch(app::App);
}
