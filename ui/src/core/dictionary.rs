//! Typed locale dictionary.
//!
//! One schema for every locale: a locale either fills every field or fails
//! to load. The only variable-length part is the document list, which is
//! read from numbered messages (`documents-item-<n>-title`) until the first
//! gap.

use i18n_embed::fluent::FluentLanguageLoader;

use crate::i18n::{DictionaryError, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavText {
    pub home: String,
    pub services: String,
    pub schemes: String,
    pub documents: String,
    pub contact: String,
    pub language_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroText {
    pub welcome: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesText {
    pub title: String,
    pub certificates: CardText,
    pub payments: CardText,
    pub registration: CardText,
    pub grievances: CardText,
}

impl ServicesText {
    pub fn card(&self, id: ServiceId) -> &CardText {
        match id {
            ServiceId::Certificates => &self.certificates,
            ServiceId::Payments => &self.payments,
            ServiceId::Registration => &self.registration,
            ServiceId::Grievances => &self.grievances,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemesText {
    pub title: String,
    pub digital_india: CardText,
    pub make_india: CardText,
    pub skill_india: CardText,
    pub learn_more: String,
}

impl SchemesText {
    pub fn card(&self, id: SchemeId) -> &CardText {
        match id {
            SchemeId::DigitalIndia => &self.digital_india,
            SchemeId::MakeIndia => &self.make_india,
            SchemeId::SkillIndia => &self.skill_india,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentsText {
    pub title: String,
    pub search_placeholder: String,
    pub download: String,
    pub list: Vec<CardText>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatesText {
    pub title: String,
    pub view_all: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterText {
    pub rights: String,
    pub ministry: String,
    pub quick_links: String,
    pub helpful_resources: String,
    pub social_media: String,
}

/// All display strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub language: Language,
    pub nav: NavText,
    pub hero: HeroText,
    pub services: ServicesText,
    pub schemes: SchemesText,
    pub documents: DocumentsText,
    pub updates: UpdatesText,
    pub footer: FooterText,
}

/// Service cards, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    Certificates,
    Payments,
    Registration,
    Grievances,
}

impl ServiceId {
    pub const ALL: [ServiceId; 4] = [
        ServiceId::Certificates,
        ServiceId::Payments,
        ServiceId::Registration,
        ServiceId::Grievances,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Certificates => "certificates",
            ServiceId::Payments => "payments",
            ServiceId::Registration => "registration",
            ServiceId::Grievances => "grievances",
        }
    }
}

/// Scheme cards, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeId {
    DigitalIndia,
    MakeIndia,
    SkillIndia,
}

impl SchemeId {
    pub const ALL: [SchemeId; 3] = [
        SchemeId::DigitalIndia,
        SchemeId::MakeIndia,
        SchemeId::SkillIndia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemeId::DigitalIndia => "digital_india",
            SchemeId::MakeIndia => "make_india",
            SchemeId::SkillIndia => "skill_india",
        }
    }

    // Message ids use hyphens; `as_str` keeps the underscore form callers see.
    fn message_stem(self) -> &'static str {
        match self {
            SchemeId::DigitalIndia => "digital-india",
            SchemeId::MakeIndia => "make-india",
            SchemeId::SkillIndia => "skill-india",
        }
    }
}

/// Reads messages from one locale's loader, failing on the first absent id.
struct Reader<'a> {
    language: Language,
    loader: &'a FluentLanguageLoader,
}

impl Reader<'_> {
    fn text(&self, key: &str) -> Result<String, DictionaryError> {
        if !self.loader.has(key) {
            return Err(DictionaryError::MissingKey {
                language: self.language,
                key: key.to_string(),
            });
        }
        Ok(self.loader.get(key))
    }

    fn card(&self, stem: &str) -> Result<CardText, DictionaryError> {
        Ok(CardText {
            title: self.text(&format!("{stem}-title"))?,
            description: self.text(&format!("{stem}-description"))?,
        })
    }

    fn documents(&self) -> Result<Vec<CardText>, DictionaryError> {
        let mut list = Vec::new();
        for n in 1.. {
            let stem = format!("documents-item-{n}");
            let title_key = format!("{stem}-title");
            if !self.loader.has(&title_key) {
                let description_key = format!("{stem}-description");
                if self.loader.has(&description_key) {
                    return Err(DictionaryError::DanglingDocument {
                        language: self.language,
                        key: description_key,
                    });
                }
                break;
            }
            list.push(self.card(&stem)?);
        }
        Ok(list)
    }
}

impl Dictionary {
    /// Build the typed dictionary from a loader holding exactly one locale.
    pub fn from_loader(
        language: Language,
        loader: &FluentLanguageLoader,
    ) -> Result<Self, DictionaryError> {
        let r = Reader { language, loader };

        Ok(Self {
            language,
            nav: NavText {
                home: r.text("nav-home")?,
                services: r.text("nav-services")?,
                schemes: r.text("nav-schemes")?,
                documents: r.text("nav-documents")?,
                contact: r.text("nav-contact")?,
                language_label: r.text("nav-language-label")?,
            },
            hero: HeroText {
                welcome: r.text("hero-welcome")?,
                subtitle: r.text("hero-subtitle")?,
                cta: r.text("hero-cta")?,
            },
            services: ServicesText {
                title: r.text("services-title")?,
                certificates: r.card(&service_stem(ServiceId::Certificates))?,
                payments: r.card(&service_stem(ServiceId::Payments))?,
                registration: r.card(&service_stem(ServiceId::Registration))?,
                grievances: r.card(&service_stem(ServiceId::Grievances))?,
            },
            schemes: SchemesText {
                title: r.text("schemes-title")?,
                digital_india: r.card(&scheme_stem(SchemeId::DigitalIndia))?,
                make_india: r.card(&scheme_stem(SchemeId::MakeIndia))?,
                skill_india: r.card(&scheme_stem(SchemeId::SkillIndia))?,
                learn_more: r.text("schemes-learn-more")?,
            },
            documents: DocumentsText {
                title: r.text("documents-title")?,
                search_placeholder: r.text("documents-search-placeholder")?,
                download: r.text("documents-download")?,
                list: r.documents()?,
            },
            updates: UpdatesText {
                title: r.text("updates-title")?,
                view_all: r.text("updates-view-all")?,
            },
            footer: FooterText {
                rights: r.text("footer-rights")?,
                ministry: r.text("footer-ministry")?,
                quick_links: r.text("footer-quick-links")?,
                helpful_resources: r.text("footer-helpful-resources")?,
                social_media: r.text("footer-social-media")?,
            },
        })
    }
}

fn service_stem(id: ServiceId) -> String {
    format!("services-{}", id.as_str())
}

fn scheme_stem(id: SchemeId) -> String {
    format!("schemes-{}", id.message_stem())
}
