use dioxus::prelude::*;

use super::icon::{Glyph, Icon};

/// Emblem plus the bilingual "Government of India" lockup. Shown the same
/// way in every language.
#[component]
pub fn GovtLogo(#[props(default, into)] class: String) -> Element {
    rsx! {
        div { class: "govt-logo {class}",
            Icon { glyph: Glyph::Building, class: "govt-logo__mark" }
            div { class: "govt-logo__text",
                span { class: "govt-logo__hindi", "भारत सरकार" }
                span { class: "govt-logo__english", "Government of India" }
            }
        }
    }
}
