use agency_ui::content::Testimonial;
use agency_ui::{Carousel, SiteConfig};
use leptos::prelude::*;

use crate::icons::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, ICON_QUOTE, Icon};

/// How many logos the "trusted by" strip shows.
const TRUSTED_LOGOS: usize = 4;

#[component]
pub fn TestimonialsSection(
    testimonials: Vec<Testimonial>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let carousel = match Carousel::new(testimonials.len()) {
        Ok(carousel) => RwSignal::new(carousel),
        Err(err) => {
            log::warn!("testimonials: section skipped: {err}");
            return ().into_any();
        }
    };
    let window = config.visible_testimonials;
    let period = config.carousel_interval();
    let testimonials = StoredValue::new(testimonials);

    // Re-armed only when autoplay toggles, so manual navigation keeps the
    // current timer.
    let auto_playing = Memo::new(move |_| carousel.with(Carousel::is_auto_playing));
    let interval = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        if let Some(handle) = interval.get_value() {
            handle.clear();
            interval.set_value(None);
        }
        if !auto_playing.get() {
            log::debug!("carousel: paused");
            return;
        }
        match set_interval_with_handle(
            move || carousel.update(|c| {
                c.auto_advance();
            }),
            period,
        ) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => log::warn!("carousel: autoplay unavailable: {err:?}"),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
    });

    let dots = (0..carousel.with_untracked(Carousel::len))
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.current() == i) { "carousel-dot active" } else { "carousel-dot" }
                    }
                    aria-label=format!("Show testimonial {}", i + 1)
                    on:click=move |_| carousel.update(|c| {
                        c.go_to(i);
                    })
                ></button>
            }
        })
        .collect_view();

    let trusted = testimonials.with_value(|items| {
        items
            .iter()
            .take(TRUSTED_LOGOS)
            .map(|t| {
                view! {
                    <div class="trusted-logo">
                        <img src=t.logo.clone() alt=t.company.clone() />
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <section id="testimonials" class=format!("testimonials {class}")>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Our Clients Say"</h2>
                    <p class="section-description">
                        "Discover how we've helped businesses transform their operations and achieve exceptional results."
                    </p>
                </div>

                <div
                    class="carousel"
                    on:mouseenter=move |_| carousel.update(Carousel::pause)
                    on:mouseleave=move |_| carousel.update(Carousel::resume)
                >
                    <div class="carousel-track">
                        {move || {
                            let state = carousel.get();
                            testimonials.with_value(|items| {
                                state
                                    .visible(window)
                                    .map(|index| view! { <TestimonialCard testimonial=items[index].clone() /> })
                                    .collect_view()
                            })
                        }}
                    </div>

                    <div class="carousel-controls">
                        <button
                            class="carousel-arrow"
                            aria-label="Previous testimonial"
                            on:click=move |_| carousel.update(Carousel::prev)
                        >
                            <Icon path=ICON_CHEVRON_LEFT size="16" />
                        </button>
                        <div class="carousel-dots">{dots}</div>
                        <button
                            class="carousel-arrow"
                            aria-label="Next testimonial"
                            on:click=move |_| carousel.update(Carousel::next)
                        >
                            <Icon path=ICON_CHEVRON_RIGHT size="16" />
                        </button>
                    </div>
                </div>

                <div class="trusted">
                    <p class="trusted-label">"Trusted by leading companies worldwide"</p>
                    <div class="trusted-logos">{trusted}</div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let Testimonial {
        quote,
        name,
        position,
        company,
        avatar,
        logo,
        ..
    } = testimonial;

    view! {
        <article class="card testimonial-card">
            <div class="testimonial-quote-icon">
                <Icon path=ICON_QUOTE size="32" />
            </div>
            <blockquote class="testimonial-quote">{format!("\u{201c}{quote}\u{201d}")}</blockquote>
            <div class="testimonial-person">
                <div class="testimonial-avatar">
                    <img src=avatar alt=name.clone() />
                </div>
                <div>
                    <div class="testimonial-name">{name}</div>
                    <div class="testimonial-position">{position}</div>
                </div>
            </div>
            <div class="testimonial-logo">
                <img src=logo alt=company />
            </div>
        </article>
    }
}
