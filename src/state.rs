use crate::services::language::{Direction, Language};
use crate::services::translation::TranslationError;

/// Everything the window displays that is not plain widget state.
///
/// Owned by `TranslateWindow` and only touched from the GTK main loop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslatorState {
    direction: Direction,
    pub source_text: String,
    pub translated_text: String,
}

impl TranslatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flips the direction and exchanges the two texts so the user can keep
    /// editing in the new direction.
    pub fn toggle_direction(&mut self) -> Direction {
        self.direction = self.direction.toggled();
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
        self.direction
    }

    /// Text and target language for the next exchange.
    pub fn pending_request(&self) -> (String, Language) {
        (self.source_text.clone(), self.direction.target())
    }

    /// Stores a successful translation. A failed exchange is logged and
    /// leaves the current translation untouched.
    ///
    /// Returns whether the translated text was replaced.
    pub fn apply_translation(&mut self, result: Result<String, TranslationError>) -> bool {
        match result {
            Ok(translated) => {
                self.translated_text = translated;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error while retrieving translation");
                false
            }
        }
    }
}
