// Landing page sections
// Agency landing page, Leptos 0.8 CSR

mod contact;
mod footer;
mod header;
mod hero;
mod services;
mod stats;
mod testimonials;

pub use contact::ContactSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use services::ServicesOverview;
pub use stats::StatsSection;
pub use testimonials::TestimonialsSection;
