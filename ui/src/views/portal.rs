use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::page::PageModel;
use crate::core::sections::NavTarget;
use crate::core::store::LanguageStore;
use crate::i18n::Dictionaries;

use super::{
    DocumentsSection, HeroBanner, NavBar, SchemesSection, ServicesSection, SiteFooter, SiteHeader,
    UpdatesSection,
};

#[cfg(debug_assertions)]
fn log_page_render(page: &PageModel) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    debug!("[i18n] PortalPage render (lang={})", page.language);
}

/// The whole landing page, in the order given by `PageModel::SECTIONS`.
#[component]
pub fn PortalPage(dictionaries: &'static Dictionaries) -> Element {
    // Reading the signal subscribes this component to language changes.
    let store = use_context::<Signal<LanguageStore>>();
    let page = PageModel::compose(store().dictionary(dictionaries));

    #[cfg(debug_assertions)]
    {
        log_page_render(&page);
    }

    let PageModel {
        language,
        header,
        nav,
        hero,
        services,
        schemes,
        documents,
        updates,
        footer,
    } = page;

    rsx! {
        div { class: "portal", lang: "{language}",
            SiteHeader { header: header }
            NavBar { items: nav }
            HeroBanner { hero: hero }
            ServicesSection { section: services }
            SchemesSection { section: schemes }
            DocumentsSection { section: documents }
            UpdatesSection { section: updates }
            SiteFooter { footer: footer }
        }
    }
}

/// Smooth-scroll to a nav target. Inert targets do nothing.
pub(crate) fn scroll_to(target: NavTarget) {
    if let Some(script) = target.scroll_script() {
        debug!("scrolling to {target:?}");
        let _ = document::eval(&script);
    }
}
