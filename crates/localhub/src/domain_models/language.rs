//! Supported UI languages

/// A selectable UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO-like code persisted under `userLanguage`
    pub code: &'static str,
    /// Name in the language itself
    pub native_name: &'static str,
}

/// Default and fallback language code
pub const DEFAULT_LANGUAGE: &str = "en";

pub static SUPPORTED_LANGUAGES: [Language; 6] = [
    Language { code: "en", native_name: "English" },
    Language { code: "hi", native_name: "हिन्दी" },
    Language { code: "kn", native_name: "ಕನ್ನಡ" },
    Language { code: "te", native_name: "తెలుగు" },
    Language { code: "mr", native_name: "मराठी" },
    Language { code: "ta", native_name: "தமிழ்" },
];

/// Look up a supported language by code
pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_supported() {
        assert!(find_language(DEFAULT_LANGUAGE).is_some());
    }

    #[test]
    fn test_unknown_language() {
        assert!(find_language("fr").is_none());
        assert_eq!(find_language("kn").map(|l| l.native_name), Some("ಕನ್ನಡ"));
    }
}
