//! Per-page copy.
//!
//! Each page owns its SEO fields plus the sections it renders. Sections that
//! a page shows only when authored are `Option<T>`; templates match on them.

use serde::{Deserialize, Serialize};

use super::{Icon, Media};

/// Copy for every routed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    pub home: HomePage,
    pub services: ListingPage,
    pub case_studies: ListingPage,
    pub insights: ListingPage,
    pub about: AboutPage,
    pub contact: ContactPage,
    pub thank_you: ThankYouPage,
}

/// Document title and meta description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    pub seo: Seo,
    pub hero: Hero,
    #[serde(default)]
    pub intro: Option<Section>,
    #[serde(default)]
    pub process: Option<Process>,
    #[serde(default)]
    pub final_cta: Option<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    #[serde(default)]
    pub supporting_points: Vec<IconText>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub trust_line: Option<String>,
}

/// A short line of text with a leading icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconText {
    pub icon: Icon,
    pub text: String,
}

/// A titled block of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub title: String,
    pub description: String,
    pub steps: Vec<Highlight>,
}

/// A titled card with an icon and a detail sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub icon: Icon,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub label: String,
    pub path: String,
}

/// Copy for the catalog listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub seo: Seo,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub intro: Option<Section>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPage {
    pub seo: Seo,
    pub title: String,
    pub subtitle: String,
    pub story: Section,
    #[serde(default)]
    pub principles: Vec<Highlight>,
    #[serde(default)]
    pub competencies: Vec<IconText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPage {
    pub seo: Seo,
    pub title: String,
    pub subtitle: String,
    pub form: ContactFormCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormCopy {
    pub labels: FormLabels,
    pub privacy_note: String,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormLabels {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThankYouPage {
    pub seo: Seo,
    pub title: String,
    pub message: String,
}
