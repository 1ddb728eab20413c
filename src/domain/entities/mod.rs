//! Content entities and contact submission types.
//!
//! Entities are plain data structures deserialized from the content document.
//! Sections the site renders only when present are modeled as `Option<T>`
//! (or an empty `Vec<T>` for lists), never as untyped values.
//!
//! # Entity Types
//!
//! - [`ServiceRecord`] - A service offering, addressed by slug
//! - [`CaseStudyRecord`] - An anonymized project write-up, addressed by slug
//! - [`PostRecord`] - An insights article, addressed by slug
//! - [`Company`], [`NavEntry`], [`Footer`] - Site-wide copy
//! - [`Pages`] - Per-page copy (hero, sections, SEO)
//! - [`ContactRequest`], [`ContactReceipt`], [`ServiceInquiry`], [`Lead`] - Lead capture payloads
//! - [`ApiCatalog`] - Offerings served by the backend API's listing endpoints

pub mod case_study;
pub mod company;
pub mod contact;
pub mod icon;
pub mod media;
pub mod offering;
pub mod pages;
pub mod post;
pub mod service;

pub use case_study::CaseStudyRecord;
pub use company::{Company, ContactChannels, Footer, NavEntry};
pub use contact::{ContactReceipt, ContactRequest, Lead, LeadSource, ServiceInquiry};
pub use icon::Icon;
pub use media::{Media, MediaKind};
pub use offering::{ApiCatalog, DataSolutionsDetail, Offering, OfferingDetail, PlanningPhase};
pub use pages::{
    AboutPage, CallToAction, ContactFormCopy, ContactPage, FormLabels, Hero, Highlight,
    HomePage, IconText, ListingPage, Pages, Process, Section, Seo, ThankYouPage,
};
pub use post::PostRecord;
pub use service::{Faq, ServiceRecord};
