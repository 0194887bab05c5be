use agency_ui::SiteConfig;
use agency_ui::content::{Metric, Service};
use agency_ui::format::counter_label;
use leptos::html::Div;
use leptos::prelude::*;

use crate::hooks::{use_count_up, use_reveal_once};
use crate::icons::{ICON_AWARD, Icon, NamedIcon};

#[component]
pub fn ServicesOverview(services: Vec<Service>, metrics: Vec<Metric>) -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-description">
                        "Comprehensive staffing solutions tailored to meet your unique business needs, "
                        "from temporary assignments to executive placements."
                    </p>
                </div>

                <div class="card metrics-card">
                    <div class="metrics-grid">
                        {metrics
                            .into_iter()
                            .enumerate()
                            .map(|(index, metric)| view! { <AnimatedMetric metric=metric index=index /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="services-grid">
                    {services
                        .into_iter()
                        .enumerate()
                        .map(|(index, service)| view! { <ServiceCard service=service index=index /> })
                        .collect_view()}
                </div>

                <div class="services-cta">
                    <div class="pill">
                        <Icon path=ICON_AWARD size="16" />
                        "Trusted by Industry Leaders"
                    </div>
                    <h3 class="services-cta-title">"Ready to find your perfect match?"</h3>
                    <p class="services-cta-text">
                        "Let our expert recruiters connect you with top talent or your dream opportunity. "
                        "Start your journey with us today."
                    </p>
                    <div class="services-cta-actions">
                        <a href="#contact" class="btn btn-accent">"Get Started Today"</a>
                        <a href="#testimonials" class="btn btn-ghost">"Learn More"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Fades in once scrolled into view, staggered by grid position.
#[component]
fn ServiceCard(service: Service, index: usize) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal_once(node, 0.1);
    let delay = format!("--delay: {}ms", index * 100);

    view! {
        <div
            node_ref=node
            class=move || if revealed.get() { "reveal is-visible" } else { "reveal" }
            style=delay
        >
            <div class="card service-card">
                <div class="service-icon">
                    <NamedIcon name=service.icon />
                </div>
                <h3 class="service-title">{service.title}</h3>
                <p class="service-description">{service.description}</p>
            </div>
        </div>
    }
}

/// Headline number; counts up after a per-index stagger once visible.
#[component]
fn AnimatedMetric(metric: Metric, index: usize) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal_once(node, 0.0);
    let count = use_count_up(metric.value, config.counter_delay(index), revealed);
    let Metric {
        label,
        prefix,
        suffix,
        ..
    } = metric;

    view! {
        <div
            node_ref=node
            class=move || if revealed.get() { "metric pop is-visible" } else { "metric pop" }
        >
            <div class="metric-value">{move || counter_label(&prefix, count.get(), &suffix)}</div>
            <div class="metric-label">{label}</div>
        </div>
    }
}
