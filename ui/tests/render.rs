//! Server-side render scenarios for the whole page.

use std::cell::Cell;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;

use ui::core::hooks::CardHooks;
use ui::core::page::{PageModel, SectionKind};
use ui::core::store::LanguageStore;
use ui::views::{DocumentsSection, PortalPage};
use ui::{Language, PortalRoot};

thread_local! {
    // Store signal of the most recently mounted `StoreHarness`.
    static HARNESS_STORE: Cell<Option<Signal<LanguageStore>>> = const { Cell::new(None) };
}

#[component]
fn PageHarness(language: Language) -> Element {
    rsx! {
        PortalRoot { initial_language: language }
    }
}

#[component]
fn DocumentsHarness(language: Language, query: String) -> Element {
    let dictionaries = ui::i18n::init().expect("embedded locales are valid");
    let section = PageModel::compose(dictionaries.get(language)).documents;
    rsx! {
        DocumentsSection { section: section, initial_query: query }
    }
}

/// Same contexts as `PortalRoot`, but hands the store signal to the test.
#[component]
fn StoreHarness() -> Element {
    let store = use_signal(LanguageStore::default);
    use_context_provider(|| store);
    use_context_provider(CardHooks::default);
    HARNESS_STORE.with(|slot| slot.set(Some(store)));

    let dictionaries = ui::i18n::init().expect("embedded locales are valid");
    rsx! {
        PortalPage { dictionaries: dictionaries }
    }
}

fn render_page(language: Language) -> String {
    let mut dom = VirtualDom::new_with_props(PageHarness, PageHarnessProps { language });
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}

fn render_documents(language: Language, query: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        DocumentsHarness,
        DocumentsHarnessProps {
            language,
            query: query.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}

/// Byte offsets of each needle, asserting every one is present.
fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("`{needle}` not rendered"))
        })
        .collect()
}

fn assert_ascending(offsets: &[usize]) {
    assert!(
        offsets.windows(2).all(|pair| pair[0] < pair[1]),
        "out of order: {offsets:?}"
    );
}

#[test]
fn initial_load_renders_english() {
    let html = render_page(Language::default());
    assert!(html.contains("lang=\"en\""));
    assert!(html.contains("Welcome to Digital India Portal"));
    assert!(html.contains("Explore Services"));
    assert!(!html.contains("डिजिटल इंडिया पोर्टल में आपका स्वागत है"));
}

#[test]
fn hindi_render_uses_hindi_dictionary() {
    let html = render_page(Language::Hi);
    assert!(html.contains("lang=\"hi\""));
    assert!(html.contains("डिजिटल इंडिया पोर्टल में आपका स्वागत है"));
    assert!(html.contains("सेवाएं"));
    assert!(!html.contains("Welcome to Digital India Portal"));
}

#[test]
fn switching_back_restores_english_output() {
    let english = render_page(Language::En);
    let hindi = render_page(Language::Hi);
    assert_ne!(english, hindi);
    assert_eq!(render_page(Language::En), english);
}

#[test]
fn render_is_idempotent() {
    for language in Language::ALL {
        assert_eq!(render_page(language), render_page(language));
    }
}

/// Markup that opens each section in the rendered page.
fn section_marker(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Header => "class=\"site-header\"",
        SectionKind::Nav => "class=\"portal-nav\"",
        SectionKind::Hero => "class=\"hero\"",
        SectionKind::Services => "portal-section--services",
        SectionKind::Schemes => "portal-section--schemes",
        SectionKind::Documents => "portal-section--documents",
        SectionKind::Updates => "portal-section--updates",
        SectionKind::Footer => "class=\"site-footer\"",
    }
}

#[test]
fn sections_render_in_fixed_order() {
    let html = render_page(Language::En);
    let markers: Vec<&str> = PageModel::SECTIONS
        .iter()
        .map(|&kind| section_marker(kind))
        .collect();
    assert_ascending(&positions(&html, &markers));
}

#[test]
fn toggling_the_store_rerenders_the_mounted_page() {
    let mut dom = VirtualDom::new(StoreHarness);
    dom.rebuild_in_place();
    let english = dioxus::ssr::render(&dom);
    assert!(english.contains("Welcome to Digital India Portal"));

    let mut store = HARNESS_STORE
        .with(Cell::get)
        .expect("harness provided its store");

    dom.in_runtime(|| store.write().set_language(Language::Hi));
    let _ = dom.render_immediate_to_vec();
    let hindi = dioxus::ssr::render(&dom);
    assert!(hindi.contains("डिजिटल इंडिया पोर्टल में आपका स्वागत है"));
    assert!(hindi.contains(">सेवाएं<"));
    assert!(!hindi.contains("Welcome to Digital India Portal"));

    dom.in_runtime(|| store.write().set_language(Language::En));
    let _ = dom.render_immediate_to_vec();
    assert_eq!(dioxus::ssr::render(&dom), english);
}

#[test]
fn section_anchors_are_present() {
    let html = render_page(Language::Hi);
    for id in ["services", "schemes", "documents"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing anchor {id}");
    }
}

#[test]
fn nav_items_render_in_order_including_inert_contact() {
    let html = render_page(Language::En);
    let nav_start = html.find("class=\"portal-nav\"").expect("nav rendered");
    let nav = &html[nav_start..];
    assert_ascending(&positions(
        nav,
        &[">Home<", ">Services<", ">Schemes<", ">Documents<", ">Contact<"],
    ));
}

#[test]
fn active_language_button_is_filled() {
    let html = render_page(Language::Hi);
    let hindi_button = html.find("हिंदी").expect("hindi toggle rendered");
    let english_button = html.find(">English<").expect("english toggle rendered");
    let before_hindi = &html[..hindi_button];
    let before_english = &html[..english_button];
    let hindi_class = &before_hindi[before_hindi.rfind("class=").unwrap()..];
    let english_class = &before_english[before_english.rfind("class=").unwrap()..];
    assert!(hindi_class.contains("button--primary"), "{hindi_class}");
    assert!(english_class.contains("button--outline"), "{english_class}");
}

#[test]
fn documents_render_in_dictionary_order() {
    let html = render_documents(Language::En, "");
    assert_ascending(&positions(
        &html,
        &[
            "Aadhaar Card Guidelines",
            "PAN Card Application",
            "Voter ID Registration",
            "Passport Application Guide",
        ],
    ));
    assert_eq!(html.matches("document-card__body").count(), 4);
}

#[test]
fn search_text_does_not_filter_documents() {
    let dictionaries = ui::i18n::init().expect("embedded locales are valid");
    for language in Language::ALL {
        let unfiltered = render_documents(language, "");
        let searched = render_documents(language, "aadhaar");

        for doc in &dictionaries.get(language).documents.list {
            assert!(searched.contains(&doc.title), "{} dropped", doc.title);
        }
        assert_eq!(document_list(&unfiltered), document_list(&searched));
    }
}

fn document_list(html: &str) -> &str {
    let start = html
        .find("class=\"document-list\"")
        .expect("document list rendered");
    &html[start..]
}

#[test]
fn updates_and_footer_are_rendered() {
    let html = render_page(Language::Hi);
    assert_ascending(&positions(
        &html,
        &[
            "COVID-19 Vaccination Drive",
            "Digital Literacy Program",
            "G20 Summit Preparations",
        ],
    ));
    assert!(html.contains("© 2024 सर्वाधिकार सुरक्षित"));
    assert!(html.contains("भारत सरकार"));
    assert_eq!(html.matches("site-footer__social-link").count(), 4);
}
