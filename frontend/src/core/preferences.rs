//! Dark-mode and cookie-consent flags kept in a key-value store.

use crate::core::analytics::{AnalyticsEvent, AnalyticsSink};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentDecision {
    Accepted,
    Declined,
}

impl ConsentDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentDecision::Accepted => "accepted",
            ConsentDecision::Declined => "declined",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(ConsentDecision::Accepted),
            "declined" => Some(ConsentDecision::Declined),
            _ => None,
        }
    }

    fn event(&self) -> AnalyticsEvent {
        let action = match self {
            ConsentDecision::Accepted => "Accept",
            ConsentDecision::Declined => "Decline",
        };
        AnalyticsEvent::new("Cookie", action, "Cookie Consent")
    }
}

pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn dark_mode(&self) -> bool {
        self.store.get(DARK_MODE_KEY).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }

    pub fn consent(&self) -> Option<ConsentDecision> {
        self.store
            .get(COOKIE_CONSENT_KEY)
            .and_then(|raw| ConsentDecision::parse(&raw))
    }

    /// The banner shows until any non-empty decision has been stored.
    pub fn needs_consent_banner(&self) -> bool {
        self.store
            .get(COOKIE_CONSENT_KEY)
            .map_or(true, |raw| raw.is_empty())
    }

    pub fn record_consent(&self, decision: ConsentDecision, sink: &dyn AnalyticsSink) {
        self.store.set(COOKIE_CONSENT_KEY, decision.as_str());
        sink.track(&decision.event());
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore(pub RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}
