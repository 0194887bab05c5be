//! Inline SVG icons.
//!
//! Stroke icons on a 24x24 grid in the style of [Lucide](https://lucide.dev/).
//! Each glyph is a single path; multi-part glyphs use several subpaths.

use agency_ui::content::IconName;
use leptos::prelude::*;

/// Renders an inline stroke icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MENU size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon for a content-level glyph name.
#[component]
pub fn NamedIcon(
    name: IconName,
    #[prop(default = "24")] size: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! { <Icon path=icon_path(name) size=size class=class /> }
}

pub fn icon_path(name: IconName) -> &'static str {
    match name {
        IconName::Users => ICON_USERS,
        IconName::Clock => ICON_CLOCK,
        IconName::Target => ICON_TARGET,
        IconName::Briefcase => ICON_BRIEFCASE,
        IconName::Building => ICON_BUILDING,
        IconName::UserCheck => ICON_USER_CHECK,
        IconName::TrendingUp => ICON_TRENDING_UP,
        IconName::Star => ICON_STAR,
        IconName::Award => ICON_AWARD,
        IconName::ArrowRight => ICON_ARROW_RIGHT,
        IconName::Quote => ICON_QUOTE,
        IconName::Mail => ICON_MAIL,
        IconName::Phone => ICON_PHONE,
        IconName::MapPin => ICON_MAP_PIN,
        IconName::Linkedin => ICON_LINKEDIN,
        IconName::Twitter => ICON_TWITTER,
        IconName::Github => ICON_GITHUB,
        IconName::Facebook => ICON_FACEBOOK,
        IconName::Instagram => ICON_INSTAGRAM,
    }
}

// =============================================================================
// Content glyphs
// =============================================================================

pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2 M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8 M22 21v-2a4 4 0 0 0-3-3.87 M16 3.13a4 4 0 0 1 0 7.75";

pub const ICON_CLOCK: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20 M12 6v6l4 2";

pub const ICON_TARGET: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20 M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12 M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4";

pub const ICON_BRIEFCASE: &str = "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16 M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z";

pub const ICON_BUILDING: &str = "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18z M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2 M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2 M10 6h4 M10 10h4 M10 14h4 M10 18h4";

pub const ICON_USER_CHECK: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2 M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8 M16 11l2 2l4-4";

pub const ICON_TRENDING_UP: &str = "M22 7l-8.5 8.5l-5-5L2 17 M16 7h6v6";

pub const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87l1.18 6.88L12 17.77l-6.18 3.25L7 14.14L2 9.27l6.91-1.01z";

pub const ICON_AWARD: &str = "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12 M15.48 12.89L17 22l-5-3l-5 3l1.52-9.11";

pub const ICON_ARROW_RIGHT: &str = "M5 12h14 M12 5l7 7l-7 7";

pub const ICON_QUOTE: &str = "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2c1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .01-1 1.03V20c0 1 0 1 1 1z M15 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z";

pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 7l-10 6L2 7";

pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2a19.79 19.79 0 0 1-8.63-3.07a19.5 19.5 0 0 1-6-6a19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z";

pub const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6";

pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z M2 9h4v12H2z M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4";

pub const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6c2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4c-.9-4.2 4-6.6 7-3.8c1.1 0 3-1.2 3-1.2z";

pub const ICON_GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5c.08-1.25-.27-2.48-1-3.5c.28-1.15.28-2.35 0-3.5c0 0-1 0-3 1.5c-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5c-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4 M9 18c-4.51 2-5-2-7-2";

pub const ICON_FACEBOOK: &str = "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z";

pub const ICON_INSTAGRAM: &str = "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z M16 11.37A4 4 0 1 1 12.63 8A4 4 0 0 1 16 11.37z M17.5 6.5h.01";

// =============================================================================
// Controls
// =============================================================================

/// Hamburger (mobile menu closed)
pub const ICON_MENU: &str = "M4 6h16 M4 12h16 M4 18h16";

/// Cross (mobile menu open)
pub const ICON_CLOSE: &str = "M18 6L6 18 M6 6l12 12";

pub const ICON_CHEVRON_LEFT: &str = "M15 18l-6-6l6-6";

pub const ICON_CHEVRON_RIGHT: &str = "M9 18l6-6l-6-6";
