//! Service and scheme grids. Clicking a card reports it to the injected
//! `CardHooks`; nothing else happens.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, Glyph, Icon};
use crate::core::dictionary::ServiceId;
use crate::core::hooks::CardHooks;
use crate::core::page::{SchemeCard, SchemesModel, ServiceCard, ServicesModel};

fn service_glyph(id: ServiceId) -> Glyph {
    match id {
        ServiceId::Certificates => Glyph::FileText,
        ServiceId::Payments => Glyph::IndianRupee,
        ServiceId::Registration => Glyph::UserCheck,
        ServiceId::Grievances => Glyph::MessageSquare,
    }
}

#[component]
pub fn ServicesSection(section: ServicesModel) -> Element {
    let hooks = use_context::<CardHooks>();

    rsx! {
        section { id: section.anchor.id(), class: "portal-section portal-section--services",
            div { class: "portal-section__inner",
                h2 { class: "portal-section__title", "{section.title}" }
                div { class: "card-grid card-grid--four",
                    for card in section.cards.iter().cloned() {
                        {render_service_card(card, hooks.clone())}
                    }
                }
            }
        }
    }
}

fn render_service_card(card: ServiceCard, hooks: CardHooks) -> Element {
    let key = card.id.as_str();
    let glyph = service_glyph(card.id);
    let title = card.text.title.clone();
    let description = card.text.description.clone();

    rsx! {
        Card {
            key: "{key}",
            class: "service-card",
            onclick: move |_| card.activate(&hooks),
            div { class: "service-card__icon",
                Icon { glyph: glyph }
            }
            h3 { class: "card__title", "{title}" }
            p { class: "card__description", "{description}" }
        }
    }
}

#[component]
pub fn SchemesSection(section: SchemesModel) -> Element {
    let hooks = use_context::<CardHooks>();
    let learn_more = section.learn_more.clone();

    rsx! {
        section { id: section.anchor.id(), class: "portal-section portal-section--schemes",
            div { class: "portal-section__inner",
                h2 { class: "portal-section__title", "{section.title}" }
                div { class: "card-grid card-grid--three",
                    for card in section.cards.iter().cloned() {
                        {render_scheme_card(card, learn_more.clone(), hooks.clone())}
                    }
                }
            }
        }
    }
}

fn render_scheme_card(card: SchemeCard, learn_more: String, hooks: CardHooks) -> Element {
    let key = card.id.as_str();
    let title = card.text.title.clone();
    let description = card.text.description.clone();

    rsx! {
        Card {
            key: "{key}",
            class: "scheme-card",
            onclick: move |_| card.activate(&hooks),
            h3 { class: "card__title", "{title}" }
            p { class: "card__description", "{description}" }
            Button { variant: ButtonVariant::Link, class: "scheme-card__more", "{learn_more}" }
        }
    }
}
