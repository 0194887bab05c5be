//! Static page content.
//!
//! All copy, link lists and counter targets live in `content/site.json`, which
//! is compiled into the binary. The types here mirror that document:
//!
//! - **Serializable** - loaded once via serde at startup
//! - **Clone-friendly** - components take owned copies without borrowing issues
//! - **Immutable** - nothing here changes after the page mounts
//!
//! # Example
//!
//! ```rust
//! use agency_ui::content::SiteContent;
//!
//! let content = SiteContent::embedded().unwrap();
//! assert_eq!(content.testimonials.len(), 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::Result;

const EMBEDDED: &str = include_str!("../content/site.json");

/// Named glyphs the sections can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Users,
    Clock,
    Target,
    Briefcase,
    Building,
    UserCheck,
    TrendingUp,
    Star,
    Award,
    ArrowRight,
    Quote,
    Mail,
    Phone,
    MapPin,
    Linkedin,
    Twitter,
    Github,
    Facebook,
    Instagram,
}

/// A header navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// One card in the services grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub icon: IconName,
    pub title: String,
    pub description: String,
}

/// A headline number in the services dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Value the counter animates up to
    pub value: u64,
    pub label: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

/// Client quote shown in the testimonial carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: String,
    pub name: String,
    pub position: String,
    pub company: String,
    /// Avatar image URL (placeholder path)
    pub avatar: String,
    /// Company logo URL (placeholder path)
    pub logo: String,
}

/// A stat card in the track-record section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: IconName,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub city: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: IconName,
    pub href: String,
}

/// Details listed next to the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub hours: Vec<String>,
    pub offices: Vec<Office>,
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    pub icon: IconName,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub brand: String,
    pub blurb: String,
    pub contact: Vec<ContactLine>,
    pub columns: Vec<FooterColumn>,
    pub legal: Vec<FooterLink>,
    pub social: Vec<SocialLink>,
}

/// Everything the page renders, plus its timing configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub config: SiteConfig,
    pub brand: String,
    pub nav: Vec<NavItem>,
    pub services: Vec<Service>,
    pub metrics: Vec<Metric>,
    pub testimonials: Vec<Testimonial>,
    pub stats: Vec<Stat>,
    pub contact: ContactInfo,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Parse and validate the document compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.config.validate()?;
        log::debug!(
            "loaded site content: {} services, {} testimonials, {} stats",
            content.services.len(),
            content.testimonials.len(),
            content.stats.len()
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.brand, "Agency");
        assert_eq!(content.nav.len(), 4);
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.metrics.len(), 4);
        assert_eq!(content.testimonials.len(), 6);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.footer.columns.len(), 3);
        assert_eq!(content.config, SiteConfig::default());
    }

    #[test]
    fn metric_prefix_defaults_to_empty() {
        let content = SiteContent::embedded().unwrap();
        let placements = &content.metrics[1];
        assert_eq!(
            placements,
            &Metric {
                value: 15000,
                label: "Placements Made".into(),
                prefix: String::new(),
                suffix: "+".into(),
            }
        );
    }

    #[test]
    fn testimonial_ids_are_unique() {
        let content = SiteContent::embedded().unwrap();
        let mut ids: Vec<u32> = content.testimonials.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.testimonials.len());
    }

    #[test]
    fn malformed_document_is_a_content_error() {
        let err = SiteContent::from_json("{ \"brand\": 1 }").unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        value["config"]["counter_steps"] = serde_json::json!(0);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }
}
