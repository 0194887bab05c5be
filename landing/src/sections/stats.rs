use std::time::Duration;

use agency_ui::content::Stat;
use agency_ui::format::thousands;
use leptos::html::Div;
use leptos::prelude::*;

use crate::hooks::{use_count_up, use_reveal_once};
use crate::icons::NamedIcon;

#[component]
pub fn StatsSection(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Proven Track Record"</h2>
                    <p class="section-description">
                        "Our commitment to excellence is reflected in the numbers. "
                        "See how we've been making a difference in the recruitment industry."
                    </p>
                </div>

                <div class="stats-grid">
                    {stats
                        .into_iter()
                        .enumerate()
                        .map(|(index, stat)| view! { <StatCard stat=stat index=index /> })
                        .collect_view()}
                </div>

                <div class="stats-callout">
                    <p class="stats-callout-lead">"Ready to join our success stories?"</p>
                    <p class="stats-callout-text">
                        "Let us help you find your next great opportunity or the perfect candidate for your team."
                    </p>
                </div>
            </div>
        </section>
    }
}

/// Cards slide in staggered; all four counters start together.
#[component]
fn StatCard(stat: Stat, index: usize) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal_once(node, 0.3);
    let count = use_count_up(stat.value, Duration::ZERO, revealed);
    let delay = format!("--delay: {}ms", index * 100);
    let Stat {
        icon,
        suffix,
        label,
        description,
        ..
    } = stat;
    let has_suffix = !suffix.is_empty();

    view! {
        <div
            node_ref=node
            class=move || if revealed.get() { "card stat-card reveal is-visible" } else { "card stat-card reveal" }
            style=delay
        >
            <div class="stat-head">
                <div class="stat-icon">
                    <NamedIcon name=icon />
                </div>
                <div class="stat-figure">
                    <div class="stat-number">
                        <span class="stat-value">{move || thousands(count.get())}</span>
                        <Show when=move || has_suffix>
                            <span class="stat-suffix">{suffix.clone()}</span>
                        </Show>
                    </div>
                    <p class="stat-label">{label}</p>
                </div>
            </div>
            <p class="stat-description">{description}</p>
        </div>
    }
}
