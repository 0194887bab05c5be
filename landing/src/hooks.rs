//! Browser-backed reactive helpers: reveal-on-scroll and count-up timers.

use std::time::Duration;

use agency_ui::{CountUp, SiteConfig};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Flips to `true` the first time `target` scrolls into view, then stops
/// observing. `threshold` is the visible fraction that counts as "in view".
///
/// Browsers without `IntersectionObserver` reveal immediately.
pub fn use_reveal_once(target: NodeRef<Div>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let observer = StoredValue::new_local(None::<IntersectionObserver>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if revealed.get_untracked() || observer.with_value(Option::is_some) {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, obs: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if visible {
                    set_revealed.set(true);
                    obs.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(obs) => {
                obs.observe(&element);
                observer.set_value(Some(obs));
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
                set_revealed.set(true);
            }
        }

        // Lives as long as the observer; disconnect() stops further calls.
        callback.forget();
    });

    on_cleanup(move || {
        observer.try_with_value(|obs| {
            if let Some(obs) = obs {
                obs.disconnect();
            }
        });
    });

    revealed
}

/// Counts from 0 to `target` once `revealed` turns true, after `delay`.
///
/// Step count and tick length come from the [`SiteConfig`] in context. The
/// animation runs at most once per mount; both timers are cleared on
/// teardown.
pub fn use_count_up(target: u64, delay: Duration, revealed: ReadSignal<bool>) -> Signal<u64> {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let tick = config.counter_tick();
    let counter = RwSignal::new(CountUp::new(target, config.counter_steps));
    let interval = StoredValue::new(None::<IntervalHandle>);
    let timeout = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        if !revealed.get() {
            return;
        }
        if !counter.try_update(CountUp::start).unwrap_or(false) {
            return;
        }
        log::debug!("counter: animating to {target} after {delay:?}");

        let begin = move || {
            timeout.set_value(None);
            let stepper = set_interval_with_handle(
                move || {
                    let done = counter
                        .try_update(|c| {
                            c.tick();
                            c.is_done()
                        })
                        .unwrap_or(true);
                    if done {
                        if let Some(handle) = interval.try_get_value().flatten() {
                            handle.clear();
                        }
                        interval.try_set_value(None);
                    }
                },
                tick,
            );
            match stepper {
                Ok(handle) => interval.set_value(Some(handle)),
                Err(err) => {
                    log::warn!("counter: interval failed, jumping to {target}: {err:?}");
                    counter.update(CountUp::finish);
                }
            }
        };

        match set_timeout_with_handle(begin, delay) {
            Ok(handle) => timeout.set_value(Some(handle)),
            Err(err) => {
                log::warn!("counter: timeout failed, jumping to {target}: {err:?}");
                counter.update(CountUp::finish);
            }
        }
    });

    on_cleanup(move || {
        if let Some(handle) = timeout.try_get_value().flatten() {
            handle.clear();
        }
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
    });

    Signal::derive(move || counter.with(CountUp::value))
}
