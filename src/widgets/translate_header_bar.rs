use glib::Properties;
use gtk::glib;
use gtk::prelude::*;
use gtk::subclass::prelude::*;
use gtk::{Button, HeaderBar, Label, ToggleButton};
use std::cell::Cell;

use crate::services::language::Direction;

mod imp {
    use super::*;

    #[derive(Properties, Default)]
    #[properties(wrapper_type = super::TranslateHeaderBar)]
    pub struct TranslateHeaderBar {
        pub header_bar: HeaderBar,
        pub language_label: Label,
        pub swap_button: Button,
        pub pin_toggle: ToggleButton,

        #[property(get, set, default = false)]
        pub always_on_top: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for TranslateHeaderBar {
        const NAME: &'static str = "TranslateHeaderBar";
        type Type = super::TranslateHeaderBar;
        type ParentType = glib::Object;
    }

    #[glib::derived_properties]
    impl ObjectImpl for TranslateHeaderBar {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_widgets();
        }
    }
}

glib::wrapper! {
    pub struct TranslateHeaderBar(ObjectSubclass<imp::TranslateHeaderBar>);
}

impl TranslateHeaderBar {
    pub fn new() -> Self {
        glib::Object::builder().build()
    }

    fn setup_widgets(&self) {
        let imp = self.imp();

        imp.language_label.add_css_class("title");
        imp.header_bar.set_title_widget(Some(&imp.language_label));
        imp.header_bar.set_show_title_buttons(true);

        imp.swap_button.set_icon_name("object-flip-horizontal-symbolic");
        imp.swap_button.set_tooltip_text(Some("Swap languages"));
        imp.header_bar.pack_start(&imp.swap_button);

        imp.pin_toggle.set_icon_name("view-pin-symbolic");
        imp.pin_toggle.set_tooltip_text(Some("Always on top"));
        imp.header_bar.pack_end(&imp.pin_toggle);

        imp.pin_toggle
            .bind_property("active", self, "always-on-top")
            .bidirectional()
            .sync_create()
            .build();

        self.set_direction(Direction::default());
    }

    /// Shows the label for `direction`, e.g. "English -> Swedish".
    pub fn set_direction(&self, direction: Direction) {
        self.imp().language_label.set_text(&direction.label());
    }

    /// Returns the HeaderBar widget to be used with set_titlebar()
    pub fn widget(&self) -> &HeaderBar {
        &self.imp().header_bar
    }

    pub fn swap_button(&self) -> &Button {
        &self.imp().swap_button
    }
}

impl Default for TranslateHeaderBar {
    fn default() -> Self {
        Self::new()
    }
}
