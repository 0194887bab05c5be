//! Behavioural checks for the page state machines, driven through the public
//! API the landing binary uses.

use agency_ui::{
    Carousel, ContactForm, ContactFormData, CountUp, Field, MobileMenu, SiteConfig, SiteContent,
};
use pretty_assertions::assert_eq;

#[test]
fn next_then_prev_is_identity_for_every_index() {
    for len in 1..=8 {
        for start in 0..len {
            let mut carousel = Carousel::new(len).unwrap();
            carousel.go_to(start);
            carousel.next();
            carousel.prev();
            assert_eq!(carousel.current(), start, "len={len} start={start}");

            carousel.prev();
            carousel.next();
            assert_eq!(carousel.current(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn one_autoplay_tick_advances_by_exactly_one() {
    let content = SiteContent::embedded().unwrap();
    let len = content.testimonials.len();
    let mut carousel = Carousel::new(len).unwrap();

    for expected in (1..=len * 2).map(|i| i % len) {
        carousel.auto_advance();
        assert_eq!(carousel.current(), expected);
    }
}

#[test]
fn hover_pauses_autoplay_until_leave() {
    let mut carousel = Carousel::new(6).unwrap();
    carousel.pause();
    for _ in 0..5 {
        carousel.auto_advance();
    }
    assert_eq!(carousel.current(), 0);

    carousel.resume();
    carousel.auto_advance();
    assert_eq!(carousel.current(), 1);
}

#[test]
fn counters_are_monotonic_and_exact_for_site_targets() {
    let content = SiteContent::embedded().unwrap();
    let steps = content.config.counter_steps;
    let targets = content
        .metrics
        .iter()
        .map(|m| m.value)
        .chain(content.stats.iter().map(|s| s.value));

    for target in targets {
        let mut counter = CountUp::new(target, steps);
        assert!(counter.start());
        let mut previous = counter.value();
        while !counter.is_done() {
            let value = counter.tick();
            assert!(value >= previous, "target {target} went {previous} -> {value}");
            assert!(value <= target);
            previous = value;
        }
        assert_eq!(counter.value(), target);
    }
}

#[test]
fn submit_enabled_only_with_required_fields() {
    let mut form = ContactForm::new();
    assert!(!form.can_submit());

    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Company, "Analytical Engines Ltd");
    assert!(!form.can_submit());

    form.set_field(Field::Message, "Hiring.");
    assert!(form.can_submit());

    form.set_field(Field::Name, "");
    assert!(!form.can_submit());
}

#[test]
fn submission_cycle_resets_every_field() {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Company, "Analytical Engines Ltd");
    form.set_field(Field::Position, "full-time");
    form.set_field(Field::Message, "Hiring.");

    form.begin_submit().unwrap();
    assert!(form.is_submitting());
    assert!(!form.can_submit());

    form.finish_submit();
    assert!(!form.is_submitting());
    assert_eq!(form.data(), &ContactFormData::default());
}

#[test]
fn menu_toggle_and_link_close() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert!(menu.is_open());
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn default_timings_match_the_page() {
    let config = SiteConfig::default();
    assert_eq!(config.carousel_interval_ms, 5000);
    assert_eq!(config.counter_duration_ms, 2000);
    assert_eq!(config.counter_steps, 60);
    assert_eq!(config.submit_delay_ms, 1000);
}
