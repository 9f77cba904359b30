mod portal;
pub use portal::PortalPage;

mod header;
pub use header::{NavBar, SiteHeader};

mod hero;
pub use hero::HeroBanner;

mod catalog;
pub use catalog::{SchemesSection, ServicesSection};

mod documents;
pub use documents::DocumentsSection;

mod updates;
pub use updates::UpdatesSection;

mod footer;
pub use footer::SiteFooter;
