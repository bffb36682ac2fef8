//! Inline SVG icons (24x24 stroke outlines)

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Brain,
    Globe,
    Mail,
    MapPin,
    Menu,
    Shield,
    X,
    Zap,
}

impl Icon {
    /// Path data, drawn in order
    #[must_use]
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M12 5v13",
                "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4",
            ],
            Self::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            ],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Self::X => &["M18 6 6 18", "m6 6 12 12"],
            Self::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
        }
    }
}

#[component]
pub fn IconSvg(icon: Icon, #[prop(optional)] classes: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {classes}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        let icons = [
            Icon::ArrowRight,
            Icon::Brain,
            Icon::Globe,
            Icon::Mail,
            Icon::MapPin,
            Icon::Menu,
            Icon::Shield,
            Icon::X,
            Icon::Zap,
        ];
        for icon in icons {
            assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
        }
    }
}
