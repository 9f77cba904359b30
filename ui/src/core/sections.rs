//! Navigation items and the scroll targets they point at.

/// Element ids the nav bar scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    Services,
    Schemes,
    Documents,
}

impl SectionAnchor {
    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Services => "services",
            SectionAnchor::Schemes => "schemes",
            SectionAnchor::Documents => "documents",
        }
    }
}

/// Where activating a nav item (or the hero button) takes the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Section(SectionAnchor),
    /// Rendered but does nothing (contact).
    Inert,
}

impl NavTarget {
    /// Script performing a smooth scroll, `None` for inert targets.
    pub fn scroll_script(self) -> Option<String> {
        match self {
            NavTarget::Top => Some("window.scrollTo({ top: 0, behavior: 'smooth' });".to_string()),
            NavTarget::Section(anchor) => Some(format!(
                "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
                anchor.id()
            )),
            NavTarget::Inert => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Home,
    Services,
    Schemes,
    Documents,
    Contact,
}

impl NavKey {
    pub const ALL: [NavKey; 5] = [
        NavKey::Home,
        NavKey::Services,
        NavKey::Schemes,
        NavKey::Documents,
        NavKey::Contact,
    ];

    pub fn target(self) -> NavTarget {
        match self {
            NavKey::Home => NavTarget::Top,
            NavKey::Services => NavTarget::Section(SectionAnchor::Services),
            NavKey::Schemes => NavTarget::Section(SectionAnchor::Schemes),
            NavKey::Documents => NavTarget::Section(SectionAnchor::Documents),
            NavKey::Contact => NavTarget::Inert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_scrolls_to_top() {
        let script = NavKey::Home.target().scroll_script().unwrap();
        assert!(script.contains("scrollTo"));
        assert!(script.contains("top: 0"));
        assert!(script.contains("smooth"));
    }

    #[test]
    fn section_items_scroll_to_their_anchor() {
        for (key, id) in [
            (NavKey::Services, "services"),
            (NavKey::Schemes, "schemes"),
            (NavKey::Documents, "documents"),
        ] {
            let script = key.target().scroll_script().unwrap();
            assert!(script.contains(&format!("getElementById('{id}')")), "{script}");
            assert!(script.contains("scrollIntoView"));
        }
    }

    #[test]
    fn contact_is_inert() {
        assert_eq!(NavKey::Contact.target(), NavTarget::Inert);
        assert_eq!(NavKey::Contact.target().scroll_script(), None);
    }
}
