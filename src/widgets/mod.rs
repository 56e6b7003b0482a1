mod translate_header_bar;
mod translate_window;
mod translation_panel;

pub use translate_header_bar::TranslateHeaderBar;
pub use translate_window::TranslateWindow;
pub use translation_panel::TranslationPanel;
