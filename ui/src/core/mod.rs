//! Platform-agnostic state and models behind the landing page.

pub mod dictionary;
pub mod hooks;
pub mod page;
pub mod sections;
pub mod store;
pub mod updates;
