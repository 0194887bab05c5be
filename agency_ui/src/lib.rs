//! # agency-ui
//!
//! Content model and UI state machines for the agency landing site.
//!
//! This crate has no DOM or Leptos dependency. The `agency-landing` binary
//! keeps these types inside signals and drives them from browser timers and
//! event handlers; here they are plain structs that can be tested natively.
//!
//! ## Architecture
//!
//! - [`content`] - page copy and link lists, loaded from the embedded JSON
//! - [`config`] - timings for the carousel, counters, form and toasts
//! - [`carousel`] - circular index with autoplay flag
//! - [`counter`] - count-up animation steps
//! - [`contact`] - contact form fields and `Idle -> Submitting -> Idle`
//! - [`menu`] - mobile menu toggle
//! - [`format`] - digit grouping for counters
//! - [`error`] - crate error types
//!
//! ## Quick Start
//!
//! ```rust
//! use agency_ui::{Carousel, SiteContent};
//!
//! let content = SiteContent::embedded().unwrap();
//! let mut carousel = Carousel::new(content.testimonials.len()).unwrap();
//! carousel.next();
//! assert_eq!(carousel.visible(3).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod error;
pub mod format;
pub mod menu;

pub use carousel::Carousel;
pub use config::SiteConfig;
pub use contact::{ContactForm, ContactFormData, Field, FormPhase, PositionType};
pub use content::SiteContent;
pub use counter::CountUp;
pub use error::{SiteError, SubmitError};
pub use menu::MobileMenu;
