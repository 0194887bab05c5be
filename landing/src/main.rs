// Agency landing page, Leptos 0.8 CSR
// Single page: header, hero, services, testimonials, stats, contact, footer.

mod hooks;
mod icons;
mod sections;
mod toast;

use agency_ui::SiteContent;
use leptos::prelude::*;
use sections::*;
use toast::{ToastHost, provide_toaster};

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    match SiteContent::embedded() {
        Ok(content) => leptos::mount::mount_to_body(move || view! { <App content=content /> }),
        Err(err) => log::error!("landing: embedded content rejected, nothing to render: {err}"),
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("landing: logger not installed: {err}").into());
    }
}

#[component]
fn App(content: SiteContent) -> impl IntoView {
    let SiteContent {
        config,
        brand,
        nav,
        services,
        metrics,
        testimonials,
        stats,
        contact,
        footer,
    } = content;

    provide_toaster(config.toast_duration());
    provide_context(config);

    view! {
        <Header brand=brand nav=nav />
        <main>
            <HeroSection />
            <ServicesOverview services=services metrics=metrics />
            <TestimonialsSection testimonials=testimonials class="section-muted" />
            <StatsSection stats=stats />
            <ContactSection contact=contact />
        </main>
        <Footer footer=footer />
        <ToastHost />
    }
}
