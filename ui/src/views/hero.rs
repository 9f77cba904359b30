use dioxus::prelude::*;

use crate::components::{Button, ButtonSize};
use crate::core::page::HeroModel;

use super::portal::scroll_to;

#[component]
pub fn HeroBanner(hero: HeroModel) -> Element {
    let target = hero.cta_target;

    rsx! {
        section { class: "hero",
            div { class: "hero__overlay",
                div { class: "hero__content",
                    h1 { class: "hero__title", "{hero.welcome}" }
                    p { class: "hero__subtitle", "{hero.subtitle}" }
                    Button {
                        size: ButtonSize::Lg,
                        class: "hero__cta",
                        onclick: move |_| scroll_to(target),
                        "{hero.cta}"
                    }
                }
            }
        }
    }
}
