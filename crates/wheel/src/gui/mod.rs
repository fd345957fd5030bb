use crate::config::Shape;
use annulus::{EntryLabel, RadialMenu};

pub mod app;
pub mod theme;
pub mod view;

pub use view::draw;

pub const LINE_WIDTH: f64 = 3.0;
pub const DASH_LENGTH: f64 = 9.0;
pub const DOT_RADIUS: f64 = 6.0;
pub const LABEL_FONT_SIZE: f64 = 13.0;

/// Everything the draw function needs, shared between the component and GTK's draw callback.
pub struct State {
    pub menu: RadialMenu<EntryLabel>,
    pub shape: Shape,
}

impl State {
    pub fn new(menu: RadialMenu<EntryLabel>, shape: Shape) -> Self {
        Self { menu, shape }
    }
}
