use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::core::hooks::CardHooks;
use crate::core::store::LanguageStore;
use crate::i18n::{self, Language};
use crate::views::PortalPage;

/// Root of the portal: loads the dictionaries and provides the language
/// store and card hooks to everything below.
///
/// Platform crates render this inside their own shell (stylesheet, window).
/// Tests render it directly with a chosen language and a recording hook.
///
/// Both props are read once, at mount: later prop changes are ignored.
#[component]
pub fn PortalRoot(
    #[props(default)] initial_language: Language,
    #[props(default)] hooks: CardHooks,
) -> Element {
    let store = use_signal(|| LanguageStore::new(initial_language));
    use_context_provider(|| store);
    use_context_provider(|| hooks.clone());

    let dictionaries = match i18n::init() {
        Ok(dictionaries) => dictionaries,
        Err(err) => {
            error!("[i18n] locale validation failed: {err}");
            return rsx! {
                p { class: "portal-error", "The portal could not load its translations." }
            };
        }
    };

    rsx! {
        PortalPage { dictionaries: dictionaries }
    }
}
