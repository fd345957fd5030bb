use annulus::RadialMenu;
use relm4::prelude::*;
use wheel::config;
use wheel::gui::State;
use wheel::gui::app::AppModel;
use wheel::sys::runtime;

fn main() {
    env_logger::init();

    if let Err(e) = config::write_default_config() {
        log::warn!("Could not write default config: {}", e);
    }
    let config = config::load_or_default();

    let (menu_tx, menu_rx) = async_channel::unbounded();
    let mut menu = RadialMenu::new().with_notifier(menu_tx);
    config.apply_to(&mut menu);
    let state = State::new(menu, config.shape);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.annulus.wheel");

    app.run::<AppModel>((state, rx, menu_rx));
}
