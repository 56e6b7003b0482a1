use gtk::glib;
use gtk::prelude::*;
use gtk::subclass::prelude::*;
use gtk::{Box, Orientation, PolicyType, ScrolledWindow, Spinner, TextView, WrapMode};
use std::cell::Cell;

const DEFAULT_PANEL_HEIGHT: i32 = 120;

mod imp {
    use super::*;

    pub struct TranslationPanel {
        pub text_view: TextView,
        pub spinner: Spinner,
        pub in_flight: Cell<u32>,
    }

    impl Default for TranslationPanel {
        fn default() -> Self {
            Self {
                text_view: TextView::new(),
                spinner: Spinner::new(),
                in_flight: Cell::new(0),
            }
        }
    }

    #[glib::object_subclass]
    impl ObjectSubclass for TranslationPanel {
        const NAME: &'static str = "TranslationPanel";
        type Type = super::TranslationPanel;
        type ParentType = Box;
    }

    impl ObjectImpl for TranslationPanel {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_widgets();
        }
    }

    impl WidgetImpl for TranslationPanel {}
    impl BoxImpl for TranslationPanel {}
}

glib::wrapper! {
    /// Shows the translated text. It stays editable so the user can keep
    /// working on it after swapping languages.
    pub struct TranslationPanel(ObjectSubclass<imp::TranslationPanel>)
        @extends Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl TranslationPanel {
    pub fn new() -> Self {
        glib::Object::builder().build()
    }

    fn setup_widgets(&self) {
        let imp = self.imp();

        self.set_orientation(Orientation::Horizontal);
        self.set_spacing(8);

        imp.text_view.set_wrap_mode(WrapMode::WordChar);
        imp.text_view.set_left_margin(6);
        imp.text_view.set_right_margin(6);
        imp.text_view.add_css_class("translation-text");

        let scroller = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vscrollbar_policy(PolicyType::Automatic)
            .hexpand(true)
            .vexpand(true)
            .child(&imp.text_view)
            .build();
        self.append(&scroller);

        // Hidden until an exchange is in flight
        imp.spinner.set_visible(false);
        imp.spinner.set_valign(gtk::Align::Start);
        self.append(&imp.spinner);

        self.set_size_request(-1, DEFAULT_PANEL_HEIGHT);
        self.add_css_class("translation-panel");
    }

    /// Marks one exchange as started or finished. The spinner stays visible
    /// while any exchange is still running.
    pub fn set_loading(&self, loading: bool) {
        let imp = self.imp();
        let in_flight = if loading {
            imp.in_flight.get() + 1
        } else {
            imp.in_flight.get().saturating_sub(1)
        };
        imp.in_flight.set(in_flight);

        imp.spinner.set_visible(in_flight > 0);
        if in_flight > 0 {
            imp.spinner.start();
        } else {
            imp.spinner.stop();
        }
    }

    pub fn text(&self) -> String {
        let buffer = self.imp().text_view.buffer();
        buffer
            .text(&buffer.start_iter(), &buffer.end_iter(), false)
            .to_string()
    }

    pub fn set_text(&self, text: &str) {
        self.imp().text_view.buffer().set_text(text);
    }
}

impl Default for TranslationPanel {
    fn default() -> Self {
        Self::new()
    }
}
