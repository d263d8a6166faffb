use serde::{Deserialize, Serialize};
use std::fmt;

/// A `category / action / label` triple, the shape GA4 events are sent in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(category: &str, action: &str, label: impl Into<String>) -> Self {
        Self {
            category: category.to_string(),
            action: action.to_string(),
            label: label.into(),
        }
    }

    pub fn back_to_top() -> Self {
        Self::new("Button", "Click", "Back to Top")
    }

    pub fn navigation(target_id: &str) -> Self {
        Self::new("Navigation", "Click", target_id)
    }

    pub fn contact_submitted() -> Self {
        Self::new("Form", "Submit", "Contact Form")
    }

    pub fn print() -> Self {
        Self::new("Utility", "Print", "Page Print")
    }

    pub fn script_error(message: &str) -> Self {
        Self::new("Error", "JavaScript", message)
    }
}

/// How a page share was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMethod {
    Native,
    Clipboard,
}

impl ShareMethod {
    /// Event for a finished share. A rejected share is not tracked.
    pub fn completed<T, E>(self, outcome: &Result<T, E>) -> Option<AnalyticsEvent> {
        outcome.as_ref().ok()?;
        let label = match self {
            ShareMethod::Native => "Native Share",
            ShareMethod::Clipboard => "Clipboard",
        };
        Some(AnalyticsEvent::new("Social", "Share", label))
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.category, self.action, self.label)
    }
}

/// Fire-and-forget destination for analytics events. Implementations must
/// swallow their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
}

/// What a click landed on, as far as tracking and navigation care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    BackToTop,
    /// An in-page `#id` link. `in_navbar` links also close the mobile menu.
    Anchor { target_id: String, in_navbar: bool },
    Button { label: String },
    Card { title: Option<String> },
}

impl ClickTarget {
    /// Generic interaction event for button and card clicks.
    pub fn interaction_event(&self) -> Option<AnalyticsEvent> {
        match self {
            ClickTarget::Button { label } => Some(AnalyticsEvent::new("Button", "Click", label.trim())),
            ClickTarget::Card { title } => Some(AnalyticsEvent::new(
                "Card",
                "Click",
                title.as_deref().unwrap_or("Unknown Card"),
            )),
            _ => None,
        }
    }
}
