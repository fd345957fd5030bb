pub mod error;
pub mod events;
pub mod geometry;
pub mod hover;
pub mod label;
pub mod layout;
pub mod macros;
pub mod menu;
pub mod sector;

pub use error::{GeometryError, MenuError};
pub use events::MenuEvent;
pub use geometry::{Point, Size};
pub use hover::{HoverUpdate, update_hover};
pub use label::EntryLabel;
pub use layout::{RadiusPolicy, compute_sectors, sector_at};
pub use menu::RadialMenu;
pub use sector::{PathCommand, Sector};
