use dioxus::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use crate::core::page::LanguageToggle;
use crate::core::store::LanguageStore;

/// Two-button language toggle. The active language gets the filled button.
///
/// Writes to the `Signal<LanguageStore>` provided by `PortalRoot`; every
/// component reading that signal re-renders with the new dictionary.
#[component]
pub fn LanguageSwitcher(toggles: Vec<LanguageToggle>, label: String) -> Element {
    let store = use_context::<Signal<LanguageStore>>();

    rsx! {
        div { class: "language-switcher", role: "group", aria_label: "{label}",
            { toggles.iter().map(|toggle| {
                let language = toggle.language;
                let variant = if toggle.active { ButtonVariant::Default } else { ButtonVariant::Outline };
                let mut store = store;
                rsx! {
                    Button {
                        key: "{language}",
                        variant: variant,
                        size: ButtonSize::Sm,
                        class: "language-switcher__option",
                        onclick: move |_| store.write().set_language(language),
                        "{toggle.label}"
                    }
                }
            })}
        }
    }
}
