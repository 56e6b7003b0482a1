/// One of the two languages the translator works between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Swedish,
}

impl Language {
    /// Returns the ISO 639-1 code sent to the translation service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Swedish => "sv",
        }
    }

    /// Returns the display name used in the direction label.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Swedish => "Swedish",
        }
    }

    /// Parses a two-letter code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "sv" => Some(Language::Swedish),
            _ => None,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::English => Language::Swedish,
            Language::Swedish => Language::English,
        }
    }
}

/// The active (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    EnglishToSwedish,
    SwedishToEnglish,
}

impl Direction {
    pub fn source(&self) -> Language {
        match self {
            Direction::EnglishToSwedish => Language::English,
            Direction::SwedishToEnglish => Language::Swedish,
        }
    }

    pub fn target(&self) -> Language {
        self.source().other()
    }

    /// The direction that translates into `target`.
    pub fn towards(target: Language) -> Self {
        match target {
            Language::Swedish => Direction::EnglishToSwedish,
            Language::English => Direction::SwedishToEnglish,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Direction::EnglishToSwedish => Direction::SwedishToEnglish,
            Direction::SwedishToEnglish => Direction::EnglishToSwedish,
        }
    }

    /// Code sent as `LanguageCode`, "sv" or "en".
    pub fn target_code(&self) -> &'static str {
        self.target().code()
    }

    /// Label shown in the header bar, e.g. "English -> Swedish".
    pub fn label(&self) -> String {
        format!("{} -> {}", self.source().name(), self.target().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", Some(Language::English))]
    #[case("sv", Some(Language::Swedish))]
    #[case(" SV ", Some(Language::Swedish))]
    #[case("En", Some(Language::English))]
    #[case("de", None)]
    #[case("", None)]
    #[case("swe", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<Language>) {
        assert_eq!(Language::from_code(code), expected);
    }

    #[test]
    fn test_default_direction_targets_swedish() {
        let direction = Direction::default();
        assert_eq!(direction.source(), Language::English);
        assert_eq!(direction.target(), Language::Swedish);
        assert_eq!(direction.target_code(), "sv");
        assert_eq!(direction.label(), "English -> Swedish");
    }

    #[test]
    fn test_toggled_direction() {
        let direction = Direction::default().toggled();
        assert_eq!(direction.target_code(), "en");
        assert_eq!(direction.label(), "Swedish -> English");
        assert_eq!(direction.toggled(), Direction::default());
    }

    #[test]
    fn test_towards_matches_target() {
        for target in [Language::English, Language::Swedish] {
            assert_eq!(Direction::towards(target).target(), target);
        }
    }

    #[test]
    fn test_source_and_target_differ() {
        for direction in [Direction::EnglishToSwedish, Direction::SwedishToEnglish] {
            assert_ne!(direction.source(), direction.target());
        }
    }
}
