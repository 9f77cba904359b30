//! "Latest updates" cards. These are fixed sample entries and are shown
//! untranslated in every language.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateEntry {
    /// ISO date shown in the card's `<time>` element.
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const LATEST_UPDATES: [UpdateEntry; 3] = [
    UpdateEntry {
        date: "2024-03-20",
        title: "COVID-19 Vaccination Drive",
        description: "Phase 4 of vaccination drive starts next week",
    },
    UpdateEntry {
        date: "2024-03-19",
        title: "Digital Literacy Program",
        description: "New centers opened in rural areas",
    },
    UpdateEntry {
        date: "2024-03-18",
        title: "G20 Summit Preparations",
        description: "India to host upcoming G20 summit",
    },
];
