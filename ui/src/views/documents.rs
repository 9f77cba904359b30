use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, Glyph, Icon};
use crate::core::page::DocumentsModel;

/// Document list with a search box. The box keeps its own text and never
/// filters: every document is listed, in dictionary order.
#[component]
pub fn DocumentsSection(section: DocumentsModel, #[props(default, into)] initial_query: String) -> Element {
    let mut query = use_signal(|| initial_query.clone());

    rsx! {
        section { id: section.anchor.id(), class: "portal-section portal-section--documents",
            div { class: "portal-section__inner",
                h2 { class: "portal-section__title", "{section.title}" }
                div { class: "document-search",
                    Icon { glyph: Glyph::Search, class: "document-search__icon" }
                    input {
                        r#type: "text",
                        class: "document-search__input",
                        placeholder: "{section.search_placeholder}",
                        value: "{query()}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                div { class: "document-list",
                    for (index, doc) in section.items.iter().enumerate() {
                        Card { key: "{index}", class: "document-card",
                            div { class: "document-card__icon",
                                Icon { glyph: Glyph::File }
                            }
                            div { class: "document-card__body",
                                h3 { class: "card__title", "{doc.title}" }
                                p { class: "card__description", "{doc.description}" }
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm,
                                    Icon { glyph: Glyph::Download }
                                    "{section.download}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
