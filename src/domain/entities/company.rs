//! Site-wide company details, navigation and footer.

use serde::{Deserialize, Serialize};

/// The consultancy presented by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub positioning: String,
    pub short_intro: String,
    pub contacts: ContactChannels,
}

/// Ways a visitor can reach the company.
///
/// Every channel is optional on its own; the content document as a whole must
/// provide at least one (see [`ContactChannels::has_any`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannels {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub booking_link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl ContactChannels {
    /// Returns true if at least one reachable channel is present.
    ///
    /// `location` is informational and does not count as a channel.
    pub fn has_any(&self) -> bool {
        self.emails.iter().any(|e| !e.trim().is_empty())
            || self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
            || self
                .booking_link
                .as_deref()
                .is_some_and(|b| !b.trim().is_empty())
    }

    /// First configured email address.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// `tel:` link target with spaces removed.
    pub fn phone_href(&self) -> Option<String> {
        self.phone
            .as_deref()
            .map(|p| format!("tel:{}", p.split_whitespace().collect::<String>()))
    }
}

/// A navigation entry rendered in the header or footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
}

/// Footer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub statement: String,
    #[serde(default)]
    pub quick_links: Vec<NavEntry>,
    pub legal_note: String,
}
