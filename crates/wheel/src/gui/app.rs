use crate::config;
use crate::events::AppEvent;
use crate::gui::theme::ThemeColors;
use crate::gui::{self, State};
use annulus::{EntryLabel, MenuEvent, Point, Size};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Shown,
    Hidden,
    Resize(i32, i32),
    CursorMove(Point),
    CursorLeave,
    Press(Point),
    DoubleClick(Point),
    Menu(MenuEvent<EntryLabel>),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Menu(e) => AppMsg::Menu(e),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        State,
        async_channel::Receiver<AppEvent>,
        async_channel::Receiver<MenuEvent<EntryLabel>>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Wheel"),
            set_default_width: 420,
            set_default_height: 420,

            connect_show[sender] => move |_| {
                sender.input(AppMsg::Shown);
            },
            connect_hide[sender] => move |_| {
                sender.input(AppMsg::Hidden);
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::CursorMove(Point::new(x, y)));
                    },
                    connect_leave[sender] => move |_| {
                        sender.input(AppMsg::CursorLeave);
                    },
                },

                add_controller = gtk::GestureClick {
                    set_button: 0, // Listen to all buttons
                    connect_pressed[sender] => move |_, n_press, x, y| {
                        let point = Point::new(x, y);
                        sender.input(AppMsg::Press(point));
                        if n_press == 2 {
                            sender.input(AppMsg::DoubleClick(point));
                        }
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, rx, menu_rx) = init;

        let model = AppModel {
            state: Rc::new(RefCell::new(state)),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = gui::draw(cr, &state_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        {
            let sender = sender.clone();
            relm4::spawn(async move {
                while let Ok(event) = rx.recv().await {
                    sender.input(AppMsg::from(event));
                }
            });
        }

        relm4::spawn(async move {
            while let Ok(event) = menu_rx.recv().await {
                sender.input(AppMsg::Menu(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Shown => self.state.borrow_mut().menu.show(),
            AppMsg::Hidden => self.state.borrow_mut().menu.hide(),
            AppMsg::Resize(width, height) => {
                let size = Size::new(width as f64, height as f64);
                if let Err(e) = self.state.borrow_mut().menu.resize(size) {
                    log::debug!("Skipping resize: {}", e);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::CursorMove(point) => {
                let update = self.state.borrow_mut().menu.pointer_moved(point);
                if update.changed {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::CursorLeave => {
                if self.state.borrow_mut().menu.pointer_left().changed {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Press(point) => {
                self.state.borrow_mut().menu.pressed(point);
            }
            AppMsg::DoubleClick(point) => {
                let state = self.state.borrow();
                match state.menu.entry_at(point) {
                    Some(entry) => log::info!("Double click on '{}'", entry),
                    None => log::info!("Double click outside the menu"),
                }
            }
            AppMsg::Menu(event) => match event {
                MenuEvent::Triggered(_, entry) => println!("{}", entry),
                MenuEvent::HoverChanged(Some((index, entry))) => {
                    log::debug!("Hovering '{}' ({})", entry, index)
                }
                MenuEvent::HoverChanged(None) => log::debug!("Hovering nothing"),
                MenuEvent::AboutToShow => log::debug!("Menu about to show"),
                MenuEvent::AboutToHide => log::debug!("Menu about to hide"),
            },
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    let mut state = self.state.borrow_mut();
                    new_config.apply_to(&mut state.menu);
                    state.shape = new_config.shape;
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
