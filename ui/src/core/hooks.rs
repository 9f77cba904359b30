//! Card click hook.
//!
//! Service and scheme cards report clicks through a [`CardClickHook`]. The
//! default hook only logs; nothing navigates and no state changes.

use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::info;

use crate::core::dictionary::{SchemeId, ServiceId};

/// What a clicked card identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardTarget {
    Service(ServiceId),
    Scheme(SchemeId),
}

impl CardTarget {
    pub fn id(self) -> &'static str {
        match self {
            CardTarget::Service(id) => id.as_str(),
            CardTarget::Scheme(id) => id.as_str(),
        }
    }
}

pub trait CardClickHook {
    fn card_clicked(&self, target: CardTarget);
}

/// Default hook: one log line per click.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHook;

impl CardClickHook for LoggingHook {
    fn card_clicked(&self, target: CardTarget) {
        match target {
            CardTarget::Service(_) => info!("Navigating to {} service", target.id()),
            CardTarget::Scheme(_) => info!("Navigating to {} scheme details", target.id()),
        }
    }
}

/// Shared handle to the hook, provided to the view tree through context.
#[derive(Clone)]
pub struct CardHooks(Rc<dyn CardClickHook>);

impl CardHooks {
    pub fn new(hook: impl CardClickHook + 'static) -> Self {
        Self(Rc::new(hook))
    }

    pub fn from_rc(hook: Rc<dyn CardClickHook>) -> Self {
        Self(hook)
    }
}

impl CardClickHook for CardHooks {
    fn card_clicked(&self, target: CardTarget) {
        self.0.card_clicked(target);
    }
}

thread_local! {
    // One shared logging hook per UI thread, so default props compare equal.
    static DEFAULT_HOOK: Rc<dyn CardClickHook> = Rc::new(LoggingHook);
}

impl Default for CardHooks {
    fn default() -> Self {
        DEFAULT_HOOK.with(|hook| Self(hook.clone()))
    }
}

impl PartialEq for CardHooks {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CardHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CardHooks(..)")
    }
}
