//! Language selection actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleAction {
    /// A previously saved language was read from the store
    Loaded(String),
    /// The user picked a language
    Select(String),
    /// Move the highlighted entry of the language list
    MoveCursor(isize),
}
