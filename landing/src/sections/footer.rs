use agency_ui::content::{FooterColumn, FooterContent};
use leptos::prelude::*;

use crate::icons::NamedIcon;

#[component]
pub fn Footer(footer: FooterContent) -> impl IntoView {
    let FooterContent {
        brand,
        blurb,
        contact,
        columns,
        legal,
        social,
    } = footer;
    let year = js_sys::Date::new_0().get_full_year();
    let copyright = format!("© {year} {brand}. All rights reserved.");

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-about">
                        <a href="/" class="footer-brand">{brand}</a>
                        <p class="footer-blurb">{blurb}</p>
                        <div class="footer-contact">
                            {contact
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <div class="footer-contact-line">
                                            <NamedIcon name=line.icon size="16" />
                                            <span>{line.text}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {columns.into_iter().map(|column| view! { <LinkColumn column=column /> }).collect_view()}
                </div>

                <hr class="footer-separator" />

                <div class="footer-bottom">
                    <div class="footer-legal">
                        {legal
                            .into_iter()
                            .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                            .collect_view()}
                    </div>
                    <div class="footer-meta">
                        <div class="footer-social">
                            {social
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.href class="footer-link" aria-label=link.name>
                                            <NamedIcon name=link.icon size="20" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <p class="footer-copyright">{copyright}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(column: FooterColumn) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h3 class="footer-column-title">{column.title}</h3>
            <ul class="footer-column-links">
                {column
                    .links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class="footer-link">{link.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
