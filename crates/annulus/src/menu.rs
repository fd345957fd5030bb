use crate::error::{GeometryError, MenuError};
use crate::events::MenuEvent;
use crate::geometry::{Point, Size, normalize_rotation};
use crate::hover::{HoverUpdate, update_hover};
use crate::layout::{DEFAULT_ROTATION, RadiusPolicy, sector_at};
use crate::sector::Sector;
use async_channel::Sender;

/// Radial menu state owned by a widget: entries, the sectors derived for the
/// current size, and what the pointer is over.
pub struct RadialMenu<E> {
    entries: Vec<E>,
    rotation: f64,
    policy: RadiusPolicy,
    size: Option<Size>,
    sectors: Vec<Sector>,
    hover: Option<usize>,
    visible: bool,
    notifier: Option<Sender<MenuEvent<E>>>,
}

impl<E> Default for RadialMenu<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            rotation: DEFAULT_ROTATION,
            policy: RadiusPolicy::default(),
            size: None,
            sectors: Vec::new(),
            hover: None,
            visible: true,
            notifier: None,
        }
    }
}

impl<E: Clone> RadialMenu<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifier(mut self, tx: Sender<MenuEvent<E>>) -> Self {
        self.notifier = Some(tx);
        self
    }

    pub fn with_policy(mut self, policy: RadiusPolicy) -> Result<Self, GeometryError> {
        self.set_policy(policy)?;
        Ok(self)
    }

    pub fn add_entry(&mut self, entry: E) -> usize {
        self.entries.push(entry);
        self.recalculate_sectors();
        self.entries.len() - 1
    }

    /// Swaps every entry at once, e.g. after a configuration reload.
    pub fn set_entries(&mut self, entries: Vec<E>) {
        self.entries = entries;
        self.hover = None;
        self.recalculate_sectors();
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f64) -> Result<(), GeometryError> {
        self.rotation = normalize_rotation(degrees)?;
        self.recalculate_sectors();
        Ok(())
    }

    pub fn policy(&self) -> RadiusPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RadiusPolicy) -> Result<(), GeometryError> {
        self.policy = policy.validate()?;
        self.recalculate_sectors();
        Ok(())
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn resize(&mut self, size: Size) -> Result<(), GeometryError> {
        self.size = Some(size.validate()?);
        self.recalculate_sectors();
        Ok(())
    }

    /// (inner, outer) radii for the current size.
    pub fn radii(&self) -> Option<(f64, f64)> {
        self.size.map(|size| self.policy.radii(size))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Result<&E, MenuError> {
        self.entries.get(index).ok_or(MenuError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Sector of the entry at `index`. Sectors only exist once the menu has a size.
    pub fn entry_geometry(&self, index: usize) -> Result<&Sector, MenuError> {
        self.sectors.get(index).ok_or(MenuError::IndexOutOfRange {
            index,
            len: self.sectors.len(),
        })
    }

    pub fn geometry_of(&self, entry: &E) -> Option<&Sector>
    where
        E: PartialEq,
    {
        let index = self.entries.iter().position(|e| e == entry)?;
        self.sectors.get(index)
    }

    pub fn entry_at(&self, point: Point) -> Option<&E> {
        sector_at(point, &self.sectors).and_then(|i| self.entries.get(i))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover
    }

    pub fn hovered_entry(&self) -> Option<&E> {
        self.hover.and_then(|i| self.entries.get(i))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        if self.visible {
            return;
        }
        self.notify(MenuEvent::AboutToShow);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.notify(MenuEvent::AboutToHide);
        self.set_hover(None);
        self.visible = false;
    }

    pub fn pointer_moved(&mut self, point: Point) -> HoverUpdate {
        if !self.visible {
            return HoverUpdate::new(self.hover, false);
        }
        let update = update_hover(point, &self.sectors, self.hover);
        self.apply(update);
        update
    }

    pub fn pointer_left(&mut self) -> HoverUpdate {
        self.set_hover(None)
    }

    /// Fires `Triggered` when the press lands inside a sector.
    pub fn pressed(&mut self, point: Point) -> Option<usize> {
        if !self.visible {
            return None;
        }
        let index = sector_at(point, &self.sectors)?;
        let entry = self.entries.get(index)?.clone();
        log::debug!("Entry {} triggered", index);
        self.notify(MenuEvent::Triggered(index, entry));
        Some(index)
    }

    fn set_hover(&mut self, hover: Option<usize>) -> HoverUpdate {
        let update = HoverUpdate::between(self.hover, hover);
        self.apply(update);
        update
    }

    fn apply(&mut self, update: HoverUpdate) {
        self.hover = update.hover;
        if !update.changed {
            return;
        }
        log::debug!("Hover changed to {:?}", update.hover);
        let hovered = update
            .hover
            .and_then(|i| self.entries.get(i).map(|e| (i, e.clone())));
        self.notify(MenuEvent::HoverChanged(hovered));
    }

    fn notify(&self, event: MenuEvent<E>) {
        if let Some(tx) = &self.notifier
            && let Err(e) = tx.try_send(event)
        {
            log::warn!("Dropped menu event: {}", e);
        }
    }

    fn recalculate_sectors(&mut self) {
        let Some(size) = self.size else {
            self.sectors.clear();
            return;
        };

        // size, policy and rotation were validated when they were set
        self.sectors = self
            .policy
            .sectors(self.entries.len(), size, self.rotation)
            .unwrap_or_default();

        if self.hover.is_some_and(|i| i >= self.sectors.len()) {
            self.hover = None;
        }
        log::debug!(
            "Recalculated {} sectors for {}x{} at {} degrees",
            self.sectors.len(),
            size.width,
            size.height,
            self.rotation
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::EntryLabel;

    fn labels() -> Vec<EntryLabel> {
        ["new", "open", "save", "save increment", "exit"]
            .into_iter()
            .map(EntryLabel::from)
            .collect()
    }

    fn menu_with_channel() -> (
        RadialMenu<EntryLabel>,
        async_channel::Receiver<MenuEvent<EntryLabel>>,
    ) {
        let (tx, rx) = async_channel::unbounded();
        let mut menu = RadialMenu::new().with_notifier(tx);
        for label in labels() {
            menu.add_entry(label);
        }
        menu.resize(Size::new(300.0, 300.0)).unwrap();
        (menu, rx)
    }

    fn drain<E>(rx: &async_channel::Receiver<MenuEvent<E>>) -> Vec<MenuEvent<E>> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn test_no_sectors_until_sized() {
        let mut menu = RadialMenu::new();
        assert_eq!(menu.add_entry("new"), 0);
        assert_eq!(menu.add_entry("open"), 1);
        assert!(menu.sectors().is_empty());
        assert_eq!(
            menu.entry_geometry(0),
            Err(MenuError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(menu.entry_at(Point::new(150.0, 50.0)), None);

        menu.resize(Size::new(300.0, 300.0)).unwrap();
        assert_eq!(menu.sectors().len(), 2);
        assert_eq!(menu.entry_at(Point::new(150.0, 50.0)), Some(&"new"));
    }

    #[test]
    fn test_add_entry_recomputes() {
        let (mut menu, _rx) = menu_with_channel();
        assert_eq!(menu.sectors().len(), 5);
        assert_eq!(menu.entry_geometry(1).unwrap().span, 72.0);

        menu.add_entry(EntryLabel::new("quit"));
        assert_eq!(menu.sectors().len(), 6);
        assert_eq!(menu.entry_geometry(1).unwrap().span, 60.0);
        assert_eq!(
            menu.entry_geometry(6),
            Err(MenuError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert!(menu.entry(6).is_err());

        let save = menu.geometry_of(&EntryLabel::new("save")).unwrap();
        assert_eq!(save, menu.entry_geometry(2).unwrap());
        assert!(menu.geometry_of(&EntryLabel::new("missing")).is_none());
    }

    #[test]
    fn test_hover_events_fire_on_transitions_only() {
        let (mut menu, rx) = menu_with_channel();
        let c = Point::new(150.0, 150.0);

        menu.pointer_moved(c.polar(60.0, -60.0));
        menu.pointer_moved(c.polar(70.0, -55.0));
        menu.pointer_moved(c.polar(60.0, 20.0));
        menu.pointer_moved(c);
        menu.pointer_moved(c.polar(10.0, 20.0));

        assert_eq!(
            drain(&rx),
            vec![
                MenuEvent::HoverChanged(Some((0, EntryLabel::new("new")))),
                MenuEvent::HoverChanged(Some((1, EntryLabel::new("open")))),
                MenuEvent::HoverChanged(None),
            ]
        );
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn test_pointer_left_clears_hover() {
        let (mut menu, rx) = menu_with_channel();
        menu.pointer_moved(Point::new(150.0, 60.0));
        assert_eq!(menu.hovered_entry(), Some(&EntryLabel::new("new")));

        assert!(menu.pointer_left().changed);
        assert!(!menu.pointer_left().changed);
        assert_eq!(drain(&rx).len(), 2);
    }

    #[test]
    fn test_press_triggers_entry_under_pointer() {
        let (mut menu, rx) = menu_with_channel();
        let c = Point::new(150.0, 150.0);

        // exit is the last of five sectors, just before north
        assert_eq!(menu.pressed(c.polar(50.0, -100.0)), Some(4));
        assert_eq!(menu.pressed(c), None);
        assert_eq!(
            drain(&rx),
            vec![MenuEvent::Triggered(4, EntryLabel::new("exit"))]
        );
    }

    #[test]
    fn test_hidden_menu_ignores_pointer() {
        let (mut menu, rx) = menu_with_channel();
        menu.pointer_moved(Point::new(150.0, 60.0));
        menu.hide();
        assert!(!menu.is_visible());
        assert_eq!(menu.hovered(), None);

        assert!(!menu.pointer_moved(Point::new(150.0, 60.0)).changed);
        assert_eq!(menu.pressed(Point::new(150.0, 60.0)), None);

        menu.show();
        assert_eq!(
            drain(&rx),
            vec![
                MenuEvent::HoverChanged(Some((0, EntryLabel::new("new")))),
                MenuEvent::AboutToHide,
                MenuEvent::HoverChanged(None),
                MenuEvent::AboutToShow,
            ]
        );
    }

    #[test]
    fn test_show_hide_fire_once_per_transition() {
        let (mut menu, rx) = menu_with_channel();
        menu.show();
        assert!(drain(&rx).is_empty());

        menu.hide();
        menu.hide();
        menu.show();
        menu.show();
        assert_eq!(
            drain(&rx),
            vec![MenuEvent::AboutToHide, MenuEvent::AboutToShow]
        );
        assert!(menu.is_visible());
    }

    #[test]
    fn test_rotation_moves_sectors() {
        let (mut menu, _rx) = menu_with_channel();
        assert_eq!(menu.rotation(), -90.0);
        menu.set_rotation(450.0).unwrap();
        assert_eq!(menu.rotation(), 90.0);
        assert_eq!(menu.entry_geometry(0).unwrap().start_angle, 90.0);
        // south is now the start of the first sector
        assert_eq!(menu.entry_at(Point::new(150.0, 240.0)), Some(&EntryLabel::new("new")));
        assert!(menu.set_rotation(f64::INFINITY).is_err());
        assert_eq!(menu.rotation(), 90.0);
    }

    #[test]
    fn test_invalid_resize_keeps_previous_size() {
        let (mut menu, _rx) = menu_with_channel();
        assert!(matches!(
            menu.resize(Size::new(0.0, 10.0)),
            Err(GeometryError::InvalidGeometry { .. })
        ));
        assert_eq!(menu.size(), Some(Size::new(300.0, 300.0)));
        assert_eq!(menu.sectors().len(), 5);
    }

    #[test]
    fn test_set_entries_resets_hover() {
        let (mut menu, _rx) = menu_with_channel();
        menu.pointer_moved(Point::new(150.0, 60.0));
        menu.set_entries(vec![EntryLabel::new("only")]);
        assert_eq!(menu.hovered(), None);
        assert_eq!(menu.entry_geometry(0).unwrap().span, 360.0);
    }

    #[test]
    fn test_closed_channel_is_not_fatal() {
        let (mut menu, rx) = menu_with_channel();
        drop(rx);
        assert_eq!(menu.pressed(Point::new(150.0, 60.0)), Some(0));
    }
}
