use dioxus::prelude::*;

use crate::components::{GovtLogo, Glyph, Icon};
use crate::core::page::{FooterModel, SocialLink};

fn social_glyph(link: SocialLink) -> Glyph {
    match link {
        SocialLink::Facebook => Glyph::Facebook,
        SocialLink::Twitter => Glyph::Twitter,
        SocialLink::Youtube => Glyph::Youtube,
        SocialLink::Instagram => Glyph::Instagram,
    }
}

#[component]
pub fn SiteFooter(footer: FooterModel) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__columns",
                    div { class: "site-footer__column",
                        GovtLogo { class: "site-footer__logo" }
                        p { class: "site-footer__ministry", "{footer.ministry}" }
                    }
                    div { class: "site-footer__column",
                        h3 { "{footer.quick_links_title}" }
                        ul { class: "site-footer__links",
                            for link in footer.quick_links.iter() {
                                li { "{link}" }
                            }
                        }
                    }
                    div { class: "site-footer__column",
                        h3 { "{footer.resources_title}" }
                        ul { class: "site-footer__links",
                            for link in footer.resources.iter() {
                                li { "{link}" }
                            }
                        }
                    }
                    div { class: "site-footer__column",
                        h3 { "{footer.social_title}" }
                        div { class: "site-footer__social",
                            for link in footer.social.iter().copied() {
                                span { class: "site-footer__social-link", title: link.name(),
                                    Icon { glyph: social_glyph(link) }
                                }
                            }
                        }
                    }
                }
                p { class: "site-footer__copyright", "{footer.copyright}" }
            }
        }
    }
}
