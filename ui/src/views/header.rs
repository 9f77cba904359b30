use dioxus::prelude::*;

use crate::components::{GovtLogo, LanguageSwitcher};
use crate::core::page::{HeaderModel, NavItem};

use super::portal::scroll_to;

#[component]
pub fn SiteHeader(header: HeaderModel) -> Element {
    let HeaderModel {
        brand,
        language_label,
        toggles,
    } = header;

    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    GovtLogo { class: "site-header__logo" }
                    span { class: "site-header__title", "{brand}" }
                }
                LanguageSwitcher { toggles: toggles, label: language_label }
            }
        }
    }
}

/// Secondary navigation. Contact is rendered like the others but inert.
#[component]
pub fn NavBar(items: Vec<NavItem>) -> Element {
    rsx! {
        nav { class: "portal-nav",
            div { class: "portal-nav__inner",
                for item in items {
                    button {
                        key: "{item.key:?}",
                        r#type: "button",
                        class: "portal-nav__item",
                        onclick: move |_| scroll_to(item.target),
                        "{item.label}"
                    }
                }
            }
        }
    }
}
