//! Named glyphs. Each renders as an empty element whose look comes from the
//! theme (`.icon--<name>`), so no icon font or SVG set ships with the crate.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Building,
    FileText,
    IndianRupee,
    UserCheck,
    MessageSquare,
    ChevronRight,
    Facebook,
    Twitter,
    Youtube,
    Instagram,
    File,
    Download,
    Search,
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Building => "building",
            Glyph::FileText => "file-text",
            Glyph::IndianRupee => "indian-rupee",
            Glyph::UserCheck => "user-check",
            Glyph::MessageSquare => "message-square",
            Glyph::ChevronRight => "chevron-right",
            Glyph::Facebook => "facebook",
            Glyph::Twitter => "twitter",
            Glyph::Youtube => "youtube",
            Glyph::Instagram => "instagram",
            Glyph::File => "file",
            Glyph::Download => "download",
            Glyph::Search => "search",
        }
    }
}

#[component]
pub fn Icon(glyph: Glyph, #[props(default, into)] class: String) -> Element {
    let name = glyph.name();
    rsx! {
        span { class: "icon icon--{name} {class}", aria_hidden: "true" }
    }
}
