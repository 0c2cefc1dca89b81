use log::LevelFilter;
use yew_loop_defence::components::App;
use yew_loop_defence::util::init_logging;

fn main() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    init_logging(level);
    yew::Renderer::<App>::new().render();
}
