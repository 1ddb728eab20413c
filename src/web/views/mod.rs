//! View models handed to templates.
//!
//! Templates only read fields and call trivial methods; every comparison or
//! lookup happens here.

pub mod contact;
pub mod layout;

pub use contact::{ContactFormView, FieldView, OptionView};
pub use layout::{Layout, NavLink};

/// A filter chip on a listing page.
#[derive(Debug, Clone)]
pub struct Chip {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// `"N result(s)"`, shown above filtered listings.
pub fn result_count(n: usize) -> String {
    format!("{n} result(s)")
}
