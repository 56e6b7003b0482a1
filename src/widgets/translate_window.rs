use gtk::gdk;
use gtk::gio;
use gtk::glib;
use gtk::prelude::*;
use gtk::subclass::prelude::*;
use gtk::{
    ApplicationWindow, Box, Button, Orientation, Paned, PolicyType, ScrolledWindow, TextView,
    WrapMode,
};
use std::cell::{Cell, RefCell};
use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

use crate::chrome::{Corner, MonitorArea, dock_origin};
use crate::config::Settings;
use crate::services::translation::{TranslationClient, TranslationError};
use crate::state::TranslatorState;
use crate::widgets::{TranslateHeaderBar, TranslationPanel};

const RESULT_POLL_MS: u64 = 100;
const DEFAULT_WIDTH: i32 = 420;
const DEFAULT_HEIGHT: i32 = 360;

mod imp {
    use super::*;

    pub struct TranslateWindow {
        pub header_bar: TranslateHeaderBar,
        pub source_view: TextView,
        pub translation_panel: TranslationPanel,
        pub translate_button: Button,
        pub state: RefCell<TranslatorState>,
        pub client: RefCell<Option<TranslationClient>>,
        pub dock_corner: Cell<Corner>,
    }

    impl Default for TranslateWindow {
        fn default() -> Self {
            Self {
                header_bar: TranslateHeaderBar::new(),
                source_view: TextView::new(),
                translation_panel: TranslationPanel::new(),
                translate_button: Button::with_label("Translate"),
                state: RefCell::new(TranslatorState::new()),
                client: RefCell::new(None),
                dock_corner: Cell::new(Corner::default()),
            }
        }
    }

    #[glib::object_subclass]
    impl ObjectSubclass for TranslateWindow {
        const NAME: &'static str = "TranslateWindow";
        type Type = super::TranslateWindow;
        type ParentType = ApplicationWindow;
    }

    impl ObjectImpl for TranslateWindow {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_widgets();
        }
    }

    impl WidgetImpl for TranslateWindow {}
    impl WindowImpl for TranslateWindow {}
    impl ApplicationWindowImpl for TranslateWindow {}
}

glib::wrapper! {
    pub struct TranslateWindow(ObjectSubclass<imp::TranslateWindow>)
        @extends ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gio::ActionGroup, gio::ActionMap, gtk::Accessible, gtk::Buildable,
                    gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl TranslateWindow {
    pub fn new(app: &gtk::Application, settings: &Settings, client: TranslationClient) -> Self {
        let window: Self = glib::Object::builder()
            .property("application", app)
            .property("title", "WinTranslate")
            .property("default-width", DEFAULT_WIDTH)
            .property("default-height", DEFAULT_HEIGHT)
            .build();

        let imp = window.imp();
        imp.state.replace(TranslatorState::with_direction(settings.direction()));
        imp.header_bar.set_direction(imp.state.borrow().direction());
        imp.client.replace(Some(client));
        imp.dock_corner.set(settings.dock_corner);
        imp.header_bar.set_always_on_top(settings.always_on_top);

        window
    }

    fn setup_widgets(&self) {
        let imp = self.imp();

        self.set_titlebar(Some(imp.header_bar.widget()));

        imp.source_view.set_wrap_mode(WrapMode::WordChar);
        imp.source_view.set_left_margin(6);
        imp.source_view.set_right_margin(6);

        let source_scroller = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vscrollbar_policy(PolicyType::Automatic)
            .vexpand(true)
            .child(&imp.source_view)
            .build();

        let paned = Paned::builder()
            .orientation(Orientation::Vertical)
            .start_child(&source_scroller)
            .end_child(&imp.translation_panel)
            .build();
        paned.set_wide_handle(true);
        paned.set_shrink_start_child(false);
        paned.set_shrink_end_child(false);

        imp.translate_button.set_halign(gtk::Align::End);
        imp.translate_button.add_css_class("suggested-action");

        let main_box = Box::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .margin_start(8)
            .margin_end(8)
            .margin_top(8)
            .margin_bottom(8)
            .build();
        main_box.append(&paned);
        main_box.append(&imp.translate_button);

        self.set_child(Some(&main_box));

        self.setup_translate_button();
        self.setup_swap_button();
        self.setup_pin_toggle();
        self.setup_keyboard_controller();

        self.connect_realize(|window| window.dock_to_corner());
    }

    fn setup_translate_button(&self) {
        let window_weak = self.downgrade();

        self.imp().translate_button.connect_clicked(move |_| {
            if let Some(window) = window_weak.upgrade() {
                window.translate();
            }
        });
    }

    fn setup_swap_button(&self) {
        let window_weak = self.downgrade();

        self.imp()
            .header_bar
            .swap_button()
            .connect_clicked(move |_| {
                if let Some(window) = window_weak.upgrade() {
                    window.swap_languages();
                }
            });
    }

    fn setup_pin_toggle(&self) {
        self.imp()
            .header_bar
            .connect_always_on_top_notify(|header_bar| {
                // GTK4 leaves stacking order to the compositor.
                tracing::info!(
                    always_on_top = header_bar.always_on_top(),
                    "always-on-top toggled"
                );
            });
    }

    fn setup_keyboard_controller(&self) {
        let controller = gtk::EventControllerKey::new();
        // Capture phase, so the text views don't swallow Ctrl+Enter
        controller.set_propagation_phase(gtk::PropagationPhase::Capture);
        let window_weak = self.downgrade();

        controller.connect_key_pressed(move |_, key, _, modifiers| {
            let is_enter = key == gdk::Key::Return || key == gdk::Key::KP_Enter;
            if is_enter && modifiers.contains(gdk::ModifierType::CONTROL_MASK) {
                if let Some(window) = window_weak.upgrade() {
                    window.translate();
                }
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });

        self.add_controller(controller);
    }

    /// Copies what the user typed into the state.
    fn sync_state_from_views(&self) {
        let imp = self.imp();
        let buffer = imp.source_view.buffer();
        let source = buffer
            .text(&buffer.start_iter(), &buffer.end_iter(), false)
            .to_string();
        let translated = imp.translation_panel.text();

        let mut state = imp.state.borrow_mut();
        state.source_text = source;
        state.translated_text = translated;
    }

    /// Starts one exchange on a worker thread. Overlapping exchanges are
    /// independent; whichever finishes last sets the translation.
    pub fn translate(&self) {
        let imp = self.imp();
        let Some(client) = imp.client.borrow().clone() else {
            tracing::error!("translate requested before a client was configured");
            return;
        };

        self.sync_state_from_views();
        let (text, target) = imp.state.borrow().pending_request();
        tracing::debug!(
            language = imp.state.borrow().direction().target_code(),
            "starting exchange"
        );
        imp.translation_panel.set_loading(true);

        let (sender, receiver) = mpsc::channel::<Result<String, TranslationError>>();

        std::thread::spawn(move || {
            let _ = sender.send(client.translate(&text, target));
        });

        let window_weak = self.downgrade();
        glib::timeout_add_local(Duration::from_millis(RESULT_POLL_MS), move || {
            match receiver.try_recv() {
                Ok(result) => {
                    if let Some(window) = window_weak.upgrade() {
                        window.finish_translation(result);
                    }
                    glib::ControlFlow::Break
                }
                Err(TryRecvError::Empty) => glib::ControlFlow::Continue,
                Err(TryRecvError::Disconnected) => {
                    if let Some(window) = window_weak.upgrade() {
                        window.imp().translation_panel.set_loading(false);
                    }
                    glib::ControlFlow::Break
                }
            }
        });
    }

    fn finish_translation(&self, result: Result<String, TranslationError>) {
        let imp = self.imp();
        imp.translation_panel.set_loading(false);

        self.sync_state_from_views();
        let updated = {
            let mut state = imp.state.borrow_mut();
            state
                .apply_translation(result)
                .then(|| state.translated_text.clone())
        };

        if let Some(translated) = updated {
            imp.translation_panel.set_text(&translated);
        }
    }

    /// Flips the direction, updates the label and swaps both texts.
    pub fn swap_languages(&self) {
        let imp = self.imp();
        self.sync_state_from_views();

        let (direction, source, translated) = {
            let mut state = imp.state.borrow_mut();
            let direction = state.toggle_direction();
            (
                direction,
                state.source_text.clone(),
                state.translated_text.clone(),
            )
        };

        imp.header_bar.set_direction(direction);
        imp.source_view.buffer().set_text(&source);
        imp.translation_panel.set_text(&translated);
    }

    /// Computes where the window belongs in the configured corner of the
    /// primary monitor.
    fn dock_to_corner(&self) {
        let Some(display) = gdk::Display::default() else {
            return;
        };
        let Some(monitor) = display.monitors().item(0).and_downcast::<gdk::Monitor>() else {
            return;
        };

        let geometry = monitor.geometry();
        let area = MonitorArea {
            x: geometry.x(),
            y: geometry.y(),
            width: geometry.width(),
            height: geometry.height(),
        };
        let (width, height) = self.default_size();
        let corner = self.imp().dock_corner.get();
        let origin = dock_origin(&area, width, height, corner);

        // GTK4 has no portable way to move a toplevel; the compositor places it.
        tracing::info!(?corner, x = origin.0, y = origin.1, "docking window");
    }
}
