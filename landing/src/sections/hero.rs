use leptos::prelude::*;

use crate::icons::{ICON_ARROW_RIGHT, ICON_BRIEFCASE, ICON_STAR, ICON_USERS, Icon};

/// Entrance animations are CSS keyframes; `--delay` staggers them.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            // Decorative shapes
            <div class="hero-shapes" aria-hidden="true">
                <div class="hero-shape shape-ring"></div>
                <div class="hero-shape shape-tile"></div>
                <div class="hero-shape shape-diamond"></div>
                <div class="hero-shape shape-dot"></div>
            </div>

            <div class="container hero-container">
                <div class="hero-grid">
                    <div class="hero-content enter-left">
                        <div class="hero-badge enter-up" style="--delay: 200ms">
                            <Icon path=ICON_STAR size="16" />
                            "Trusted by 500+ Companies"
                        </div>

                        <div class="enter-up" style="--delay: 300ms">
                            <h1 class="hero-title">
                                "Connecting "
                                <span class="hero-title-accent">
                                    "Talent"
                                    <span class="hero-underline"></span>
                                </span>
                                <br />
                                "with "
                                <span class="hero-title-accent">"Opportunity"</span>
                            </h1>
                            <p class="hero-description enter-up" style="--delay: 500ms">
                                "We specialize in matching exceptional professionals with forward-thinking companies. "
                                "Our expert team understands the nuances of modern recruitment, ensuring perfect "
                                "alignment between talent and culture."
                            </p>
                        </div>

                        <div class="hero-highlights enter-up" style="--delay: 600ms">
                            <div class="hero-highlight">
                                <Icon path=ICON_USERS size="20" />
                                <span>"5,000+ Placements"</span>
                            </div>
                            <div class="hero-highlight">
                                <Icon path=ICON_BRIEFCASE size="20" />
                                <span>"98% Success Rate"</span>
                            </div>
                        </div>

                        <div class="hero-actions enter-up" style="--delay: 700ms">
                            <a href="#contact" class="btn btn-primary btn-lg btn-arrow">
                                "Find Your Next Hire"
                                <Icon path=ICON_ARROW_RIGHT size="20" class="btn-arrow-icon" />
                            </a>
                            <a href="#services" class="btn btn-outline btn-lg">
                                "Explore Opportunities"
                            </a>
                        </div>
                    </div>

                    <HeroVisual />
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroVisual() -> impl IntoView {
    view! {
        <div class="hero-visual enter-right" style="--delay: 400ms">
            <div class="hero-card">
                <div class="hero-card-canvas">
                    <div class="hero-card-icons">
                        <div class="hero-card-icon">
                            <Icon path=ICON_USERS />
                        </div>
                        <div class="hero-card-icon accent">
                            <Icon path=ICON_BRIEFCASE />
                        </div>
                        <div class="hero-card-icon">
                            <Icon path=ICON_STAR />
                        </div>
                    </div>
                    <svg class="hero-card-path" viewBox="0 0 200 200" aria-hidden="true">
                        <path
                            d="M50 50 Q100 100 150 50 Q100 100 50 150"
                            stroke="currentColor"
                            stroke-width="2"
                            fill="none"
                            stroke-dasharray="5,5"
                        ></path>
                    </svg>
                </div>

                <div class="hero-chip hero-chip-top float">"Live Matching"</div>
                <div class="hero-chip hero-chip-bottom float" style="--delay: 1500ms">
                    "AI Powered"
                </div>
            </div>
        </div>
    }
}
