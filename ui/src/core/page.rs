//! Page composition.
//!
//! [`PageModel::compose`] turns one dictionary into everything the landing
//! page shows, section by section. It is pure: the same dictionary always
//! yields an equal model, and the views under `crate::views` only render
//! what it holds.

use crate::core::dictionary::{CardText, Dictionary, SchemeId, ServiceId};
use crate::core::hooks::{CardClickHook, CardTarget};
use crate::core::sections::{NavKey, NavTarget, SectionAnchor};
use crate::core::updates::{UpdateEntry, LATEST_UPDATES};
use crate::i18n::Language;

/// Brand shown next to the logo; not translated.
pub const BRAND: &str = "Digital India";
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Nav,
    Hero,
    Services,
    Schemes,
    Documents,
    Updates,
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageToggle {
    pub language: Language,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderModel {
    pub brand: &'static str,
    pub language_label: String,
    pub toggles: Vec<LanguageToggle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub key: NavKey,
    pub label: String,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroModel {
    pub welcome: String,
    pub subtitle: String,
    pub cta: String,
    pub cta_target: NavTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub id: ServiceId,
    pub text: CardText,
}

impl ServiceCard {
    pub fn activate<H: CardClickHook + ?Sized>(&self, hook: &H) {
        hook.card_clicked(CardTarget::Service(self.id));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemeCard {
    pub id: SchemeId,
    pub text: CardText,
}

impl SchemeCard {
    pub fn activate<H: CardClickHook + ?Sized>(&self, hook: &H) {
        hook.card_clicked(CardTarget::Scheme(self.id));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesModel {
    pub anchor: SectionAnchor,
    pub title: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemesModel {
    pub anchor: SectionAnchor,
    pub title: String,
    pub learn_more: String,
    pub cards: Vec<SchemeCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentsModel {
    pub anchor: SectionAnchor,
    pub title: String,
    pub search_placeholder: String,
    pub download: String,
    pub items: Vec<CardText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatesModel {
    pub title: String,
    pub view_all: String,
    pub items: Vec<UpdateEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Facebook,
    Twitter,
    Youtube,
    Instagram,
}

impl SocialLink {
    pub const ALL: [SocialLink; 4] = [
        SocialLink::Facebook,
        SocialLink::Twitter,
        SocialLink::Youtube,
        SocialLink::Instagram,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SocialLink::Facebook => "Facebook",
            SocialLink::Twitter => "Twitter",
            SocialLink::Youtube => "YouTube",
            SocialLink::Instagram => "Instagram",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterModel {
    pub ministry: String,
    pub quick_links_title: String,
    pub quick_links: Vec<String>,
    pub resources_title: String,
    pub resources: Vec<String>,
    pub social_title: String,
    pub social: Vec<SocialLink>,
    pub copyright: String,
}

/// Everything the landing page renders for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub language: Language,
    pub header: HeaderModel,
    pub nav: Vec<NavItem>,
    pub hero: HeroModel,
    pub services: ServicesModel,
    pub schemes: SchemesModel,
    pub documents: DocumentsModel,
    pub updates: UpdatesModel,
    pub footer: FooterModel,
}

impl PageModel {
    pub const SECTIONS: [SectionKind; 8] = [
        SectionKind::Header,
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::Services,
        SectionKind::Schemes,
        SectionKind::Documents,
        SectionKind::Updates,
        SectionKind::Footer,
    ];

    pub fn compose(dict: &Dictionary) -> Self {
        let toggles = Language::ALL
            .iter()
            .map(|&language| LanguageToggle {
                language,
                label: language.endonym(),
                active: language == dict.language,
            })
            .collect();

        let nav = NavKey::ALL
            .iter()
            .map(|&key| NavItem {
                key,
                label: nav_label(dict, key).to_string(),
                target: key.target(),
            })
            .collect();

        let services = ServiceId::ALL
            .iter()
            .map(|&id| ServiceCard {
                id,
                text: dict.services.card(id).clone(),
            })
            .collect();

        let schemes = SchemeId::ALL
            .iter()
            .map(|&id| SchemeCard {
                id,
                text: dict.schemes.card(id).clone(),
            })
            .collect();

        Self {
            language: dict.language,
            header: HeaderModel {
                brand: BRAND,
                language_label: dict.nav.language_label.clone(),
                toggles,
            },
            nav,
            hero: HeroModel {
                welcome: dict.hero.welcome.clone(),
                subtitle: dict.hero.subtitle.clone(),
                cta: dict.hero.cta.clone(),
                cta_target: NavTarget::Section(SectionAnchor::Services),
            },
            services: ServicesModel {
                anchor: SectionAnchor::Services,
                title: dict.services.title.clone(),
                cards: services,
            },
            schemes: SchemesModel {
                anchor: SectionAnchor::Schemes,
                title: dict.schemes.title.clone(),
                learn_more: dict.schemes.learn_more.clone(),
                cards: schemes,
            },
            documents: DocumentsModel {
                anchor: SectionAnchor::Documents,
                title: dict.documents.title.clone(),
                search_placeholder: dict.documents.search_placeholder.clone(),
                download: dict.documents.download.clone(),
                items: dict.documents.list.clone(),
            },
            updates: UpdatesModel {
                title: dict.updates.title.clone(),
                view_all: dict.updates.view_all.clone(),
                items: LATEST_UPDATES.to_vec(),
            },
            footer: FooterModel {
                ministry: dict.footer.ministry.clone(),
                quick_links_title: dict.footer.quick_links.clone(),
                // The footer repeats the first three services only.
                quick_links: ServiceId::ALL[..3]
                    .iter()
                    .map(|&id| dict.services.card(id).title.clone())
                    .collect(),
                resources_title: dict.footer.helpful_resources.clone(),
                resources: SchemeId::ALL
                    .iter()
                    .map(|&id| dict.schemes.card(id).title.clone())
                    .collect(),
                social_title: dict.footer.social_media.clone(),
                social: SocialLink::ALL.to_vec(),
                copyright: format!("© {COPYRIGHT_YEAR} {}", dict.footer.rights),
            },
        }
    }

    pub fn service(&self, id: ServiceId) -> Option<&ServiceCard> {
        self.services.cards.iter().find(|card| card.id == id)
    }

    pub fn scheme(&self, id: SchemeId) -> Option<&SchemeCard> {
        self.schemes.cards.iter().find(|card| card.id == id)
    }
}

fn nav_label(dict: &Dictionary, key: NavKey) -> &str {
    match key {
        NavKey::Home => &dict.nav.home,
        NavKey::Services => &dict.nav.services,
        NavKey::Schemes => &dict.nav.schemes,
        NavKey::Documents => &dict.nav.documents,
        NavKey::Contact => &dict.nav.contact,
    }
}
