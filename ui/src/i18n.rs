//! Internationalization (i18n) support for `portal-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (Fluent loader + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - [`Dictionary`](crate::core::dictionary::Dictionary) (typed view over one locale)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/portal-ui.ftl   (reference)
//!   hi-IN/portal-ui.ftl
//! ```
//!
//! Each locale gets its own `FluentLanguageLoader` whose fallback is the
//! locale itself. A Hindi message that is missing therefore fails the load
//! instead of quietly rendering English.
//!
//! Public API surface:
//! - `init()` – load and validate every locale once (safe to call multiple times).
//!
//! NOTE: The hyphenated filename `portal-ui.ftl` is canonical across all locales.
use std::fmt;

use dioxus::logger::tracing::{debug, info};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::OnceCell;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::dictionary::Dictionary;

/// Fluent "domain" (matches the crate / the FTL filename).
const DOMAIN: &str = "portal-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Closed set of languages the portal ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    /// Short code used on the page (`lang` attribute, logs).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" => Some(Language::En),
            "hi" | "hi-in" => Some(Language::Hi),
            _ => None,
        }
    }

    /// Name of the language in itself, shown on the toggle buttons.
    pub fn endonym(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
        }
    }

    /// Fluent identifier; also the locale folder name under `i18n/`.
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Language::En => langid!("en-US"),
            Language::Hi => langid!("hi-IN"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed loading locale `{language}`: {source}")]
    Load {
        language: Language,
        #[source]
        source: I18nEmbedError,
    },
    #[error("locale `{language}` is missing message `{key}`")]
    MissingKey { language: Language, key: String },
    #[error("locale `{language}` defines `{key}` without a matching title")]
    DanglingDocument { language: Language, key: String },
    #[error("locale `{language}` lists {found} documents, `{reference}` lists {expected}")]
    DocumentCountMismatch {
        language: Language,
        reference: Language,
        found: usize,
        expected: usize,
    },
}

/// Every locale dictionary, validated against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionaries {
    en: Dictionary,
    hi: Dictionary,
}

impl Dictionaries {
    /// Load every embedded locale and check the variable-length parts agree.
    pub fn load() -> Result<Self, DictionaryError> {
        let en = Dictionary::from_loader(Language::En, &loader_for(Language::En)?)?;
        let hi = Dictionary::from_loader(Language::Hi, &loader_for(Language::Hi)?)?;
        let dictionaries = Self { en, hi };
        dictionaries.check_parity()?;
        Ok(dictionaries)
    }

    pub fn get(&self, language: Language) -> &Dictionary {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }

    fn check_parity(&self) -> Result<(), DictionaryError> {
        let reference = Language::En;
        let expected = self.get(reference).documents.list.len();
        for language in Language::ALL {
            let found = self.get(language).documents.list.len();
            if found != expected {
                return Err(DictionaryError::DocumentCountMismatch {
                    language,
                    reference,
                    found,
                    expected,
                });
            }
        }
        Ok(())
    }
}

static DICTIONARIES: OnceCell<Dictionaries> = OnceCell::new();

/// Load and validate all locales (idempotent). Later calls return the cached set.
pub fn init() -> Result<&'static Dictionaries, DictionaryError> {
    DICTIONARIES.get_or_try_init(|| {
        let dictionaries = Dictionaries::load()?;
        info!(
            "[i18n] loaded {} locales ({} documents each)",
            Language::ALL.len(),
            dictionaries.get(Language::En).documents.list.len()
        );
        Ok(dictionaries)
    })
}

fn loader_for(language: Language) -> Result<FluentLanguageLoader, DictionaryError> {
    let id = language.langid();
    let loader = FluentLanguageLoader::new(DOMAIN, id.clone());
    i18n_embed::select(&loader, &Localizations, &[id])
        .map_err(|source| DictionaryError::Load { language, source })?;
    debug!("[i18n] loader ready for {language}");
    Ok(loader)
}
