use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, Glyph, Icon};
use crate::core::page::UpdatesModel;

#[component]
pub fn UpdatesSection(section: UpdatesModel) -> Element {
    rsx! {
        section { class: "portal-section portal-section--updates",
            div { class: "portal-section__inner",
                div { class: "updates__header",
                    h2 { class: "portal-section__title", "{section.title}" }
                    Button { variant: ButtonVariant::Outline,
                        "{section.view_all}"
                        Icon { glyph: Glyph::ChevronRight }
                    }
                }
                div { class: "card-grid card-grid--three",
                    for entry in section.items.iter() {
                        Card { key: "{entry.date}", class: "update-card",
                            time { class: "update-card__date", "{entry.date}" }
                            h3 { class: "card__title", "{entry.title}" }
                            p { class: "card__description", "{entry.description}" }
                        }
                    }
                }
            }
        }
    }
}
