use annulus::{EntryLabel, MenuEvent};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Menu(MenuEvent<EntryLabel>),
    ConfigReload,
}

impl From<MenuEvent<EntryLabel>> for AppEvent {
    fn from(event: MenuEvent<EntryLabel>) -> Self {
        AppEvent::Menu(event)
    }
}
