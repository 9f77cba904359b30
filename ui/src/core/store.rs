//! Active language selection.
//!
//! The store is a plain value. The view tree holds it in a
//! `Signal<LanguageStore>` provided through context, so components that read
//! it re-render when it changes and tests can drive it without a runtime.

use dioxus::logger::tracing::debug;

use crate::core::dictionary::Dictionary;
use crate::i18n::{Dictionaries, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageStore {
    active: Language,
}

impl LanguageStore {
    pub fn new(active: Language) -> Self {
        Self { active }
    }

    pub fn current_language(&self) -> Language {
        self.active
    }

    pub fn set_language(&mut self, language: Language) {
        if self.active != language {
            debug!("[i18n] language {} -> {}", self.active, language);
        }
        self.active = language;
    }

    /// Dictionary for the active language.
    pub fn dictionary<'a>(&self, dictionaries: &'a Dictionaries) -> &'a Dictionary {
        dictionaries.get(self.active)
    }
}
