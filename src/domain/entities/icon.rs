//! Icon identifiers referenced from content.

use serde::{Deserialize, Serialize};

/// A known icon key.
///
/// Content refers to icons by name (`"BadgeCheck"`, `"Workflow"`, ...). Keys
/// deserialize straight into this enum, so an unrecognized key is rejected
/// when the content document is loaded instead of rendering a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    ArrowRight,
    BadgeCheck,
    BarChart3,
    CalendarCheck,
    ClipboardCheck,
    ClipboardList,
    Compass,
    FlaskConical,
    GraduationCap,
    Handshake,
    LaptopCode,
    LayoutDashboard,
    LineChart,
    Mail,
    MapPin,
    Megaphone,
    MousePointerClick,
    Network,
    PencilRuler,
    Phone,
    Search,
    Smartphone,
    Sparkles,
    Target,
    Users,
    Workflow,
    Wrench,
}

impl Icon {
    /// Glyph rendered in place of the icon.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::ArrowRight => "→",
            Self::BadgeCheck => "✔",
            Self::BarChart3 => "▮",
            Self::CalendarCheck => "📅",
            Self::ClipboardCheck => "📋",
            Self::ClipboardList => "🗒",
            Self::Compass => "🧭",
            Self::FlaskConical => "⚗",
            Self::GraduationCap => "🎓",
            Self::Handshake => "🤝",
            Self::LaptopCode => "💻",
            Self::LayoutDashboard => "▦",
            Self::LineChart => "📈",
            Self::Mail => "✉",
            Self::MapPin => "📍",
            Self::Megaphone => "📣",
            Self::MousePointerClick => "🖱",
            Self::Network => "🕸",
            Self::PencilRuler => "📐",
            Self::Phone => "☎",
            Self::Search => "🔍",
            Self::Smartphone => "📱",
            Self::Sparkles => "✨",
            Self::Target => "🎯",
            Self::Users => "👥",
            Self::Workflow => "⇄",
            Self::Wrench => "🔧",
        }
    }

    /// Accessible name used as the `aria-label` of the rendered glyph.
    pub fn label(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow",
            Self::BadgeCheck => "quality check",
            Self::BarChart3 => "bar chart",
            Self::CalendarCheck => "calendar",
            Self::ClipboardCheck => "checklist",
            Self::ClipboardList => "list",
            Self::Compass => "compass",
            Self::FlaskConical => "research",
            Self::GraduationCap => "training",
            Self::Handshake => "partnership",
            Self::LaptopCode => "software",
            Self::LayoutDashboard => "dashboard",
            Self::LineChart => "line chart",
            Self::Mail => "email",
            Self::MapPin => "location",
            Self::Megaphone => "digital strategy",
            Self::MousePointerClick => "usability",
            Self::Network => "data network",
            Self::PencilRuler => "design",
            Self::Phone => "phone",
            Self::Search => "discovery",
            Self::Smartphone => "mobile",
            Self::Sparkles => "highlight",
            Self::Target => "target",
            Self::Users => "team",
            Self::Workflow => "workflow",
            Self::Wrench => "delivery",
        }
    }
}
