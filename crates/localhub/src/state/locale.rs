//! Language selection state

use crate::domain_models::{find_language, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleState {
    /// Active language code
    pub current: String,
    /// Highlighted row in the language list
    pub cursor: usize,
}

impl LocaleState {
    pub fn new(language: &str) -> Self {
        let current = if find_language(language).is_some() {
            language
        } else {
            log::warn!(
                "Unsupported default language {:?}, falling back to {}",
                language,
                DEFAULT_LANGUAGE
            );
            DEFAULT_LANGUAGE
        };
        Self {
            current: current.to_string(),
            cursor: Self::index_of(current),
        }
    }

    pub fn index_of(code: &str) -> usize {
        SUPPORTED_LANGUAGES
            .iter()
            .position(|lang| lang.code == code)
            .unwrap_or(0)
    }
}

impl Default for LocaleState {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}
