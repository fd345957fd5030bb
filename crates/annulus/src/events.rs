/// Notifications a radial menu sends to whoever listens on its channel.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent<E> {
    AboutToShow,
    AboutToHide,
    /// The hovered entry changed; `None` once the pointer leaves every sector.
    HoverChanged(Option<(usize, E)>),
    Triggered(usize, E),
}
