//! Page sections
//!
//! The page is a fixed list of scrollable regions. Each region is the DOM
//! element whose `id` equals [`SectionId::anchor`].

use std::fmt;
use std::str::FromStr;

/// Identifier of one of the page regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    Services,
    About,
    Contact,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [Self; 4] = [Self::Home, Self::Services, Self::About, Self::Contact];

    /// DOM id of the region
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    /// Label used by the navigation bar
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Returned when an identifier names no section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
