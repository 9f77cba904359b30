//! Shared UI crate for the Digital India portal. The language store, locale
//! dictionaries, page model and every view live here; the platform crates
//! only launch [`PortalRoot`].

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Styled primitives (button/card) and named glyphs
    pub mod button;
    pub mod card;
    pub mod icon;
    pub use button::{Button, ButtonSize, ButtonVariant};
    pub use card::Card;
    pub use icon::{Glyph, Icon};

    // Header pieces
    pub mod govt_logo;
    pub mod language_switcher;
    pub use govt_logo::GovtLogo;
    pub use language_switcher::LanguageSwitcher;
}

mod app;
pub use app::PortalRoot;

pub use i18n::Language;
