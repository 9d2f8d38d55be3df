//! Section registry for the single-page layout.
//!
//! The page is a fixed stack of sections. Everything that refers to a section (trackers, the
//! navigator, the header and bottom nav) uses the closed `SectionId` set, so a missing variant is
//! a compile error rather than a silent lookup miss.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A navigable region of the page.
pub enum SectionId {
    /// Landing banner with the model viewer.
    Hero,
    /// Skills, experience and education tabs.
    About,
    /// Filterable project gallery.
    Projects,
    /// Contact details and form.
    Contact,
}

/// Every section in document order.
pub const SECTIONS: [SectionId; 4] = [
    SectionId::Hero,
    SectionId::About,
    SectionId::Projects,
    SectionId::Contact,
];

impl SectionId {
    #[must_use]
    /// Stable identifier used to look up the mounted region.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    /// Heading shown above the section body.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Hero => "Welcome",
            Self::About => "About Me",
            Self::Projects => "Featured Projects",
            Self::Contact => "Get In Touch",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SECTIONS
            .into_iter()
            .find(|id| id.tag() == s)
            .ok_or_else(|| Error::unknown("section", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Display capability for nav items, theme states and chrome buttons.
///
/// Every variant maps to exactly one symbol in [`Glyph::symbol`], so renderers never fall back to
/// an undefined icon.
pub enum Glyph {
    /// Home / hero.
    Home,
    /// Person / about.
    User,
    /// Briefcase / projects.
    Briefcase,
    /// Envelope / contact.
    Mail,
    /// Light theme.
    Sun,
    /// Dark theme.
    Moon,
    /// Follow the system theme.
    Monitor,
    /// Closed overlay menu button.
    Menu,
    /// Open overlay menu button.
    Close,
    /// Scroll-to-top button.
    ArrowUp,
}

impl Glyph {
    #[must_use]
    /// Terminal symbol for the glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::User => "☺",
            Self::Briefcase => "▣",
            Self::Mail => "✉",
            Self::Sun => "☀",
            Self::Moon => "☾",
            Self::Monitor => "▭",
            Self::Menu => "☰",
            Self::Close => "✕",
            Self::ArrowUp => "↑",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Entry in the header or bottom navigation.
pub struct NavItem {
    /// Section the item scrolls to.
    pub id: SectionId,
    /// Visible label.
    pub label: &'static str,
    /// Icon drawn next to (or above) the label.
    pub icon: Glyph,
}

/// Items in the desktop header and the overlay menu.
pub const HEADER_ITEMS: [NavItem; 3] = [
    NavItem {
        id: SectionId::About,
        label: "About",
        icon: Glyph::User,
    },
    NavItem {
        id: SectionId::Projects,
        label: "Projects",
        icon: Glyph::Briefcase,
    },
    NavItem {
        id: SectionId::Contact,
        label: "Contact",
        icon: Glyph::Mail,
    },
];

/// Items in the mobile bottom navigation.
pub const BOTTOM_NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: SectionId::Hero,
        label: "Home",
        icon: Glyph::Home,
    },
    NavItem {
        id: SectionId::About,
        label: "About",
        icon: Glyph::User,
    },
    NavItem {
        id: SectionId::Projects,
        label: "Work",
        icon: Glyph::Briefcase,
    },
    NavItem {
        id: SectionId::Contact,
        label: "Contact",
        icon: Glyph::Mail,
    },
];

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
