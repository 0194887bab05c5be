use agency_ui::MobileMenu;
use agency_ui::content::NavItem;
use leptos::prelude::*;

use crate::icons::{ICON_CLOSE, ICON_MENU, Icon};

#[component]
pub fn Header(brand: String, nav: Vec<NavItem>) -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());
    let nav = StoredValue::new(nav);

    let desktop_links = nav.with_value(|items| {
        items
            .iter()
            .map(|item| {
                view! {
                    <a href=item.href.clone() class="header-link">
                        {item.label.clone()}
                        <span class="header-link-underline"></span>
                    </a>
                }
            })
            .collect_view()
    });

    view! {
        <header class="site-header">
            <div class="container">
                <div class="header-inner">
                    <a href="/" class="header-brand">{brand}</a>

                    <nav class="header-nav">{desktop_links}</nav>

                    <div class="header-actions">
                        <a href="/get-started" class="btn btn-accent btn-sm">"Get Started"</a>
                        <button
                            class="menu-toggle"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu.with(MobileMenu::is_open).to_string()
                            on:click=move |_| menu.update(MobileMenu::toggle)
                        >
                            {move || {
                                if menu.with(MobileMenu::is_open) {
                                    view! { <Icon path=ICON_CLOSE size="20" /> }
                                } else {
                                    view! { <Icon path=ICON_MENU size="20" /> }
                                }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile drawer
                <Show when=move || menu.with(MobileMenu::is_open)>
                    <nav class="mobile-nav">
                        {nav
                            .with_value(|items| {
                                items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <a
                                                href=item.href.clone()
                                                class="mobile-nav-link"
                                                on:click=move |_| menu.update(MobileMenu::close)
                                            >
                                                {item.label.clone()}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            })}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
