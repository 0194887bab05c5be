use agency_ui::contact::SUCCESS_MESSAGE;
use agency_ui::content::{ContactInfo, IconName};
use agency_ui::{ContactForm, Field, PositionType, SiteConfig};
use leptos::prelude::*;
use web_sys::SubmitEvent;

use crate::icons::NamedIcon;
use crate::toast::use_toaster;

#[component]
pub fn ContactSection(contact: ContactInfo) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let toaster = use_toaster();
    let form = RwSignal::new(ContactForm::new());
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let delay = config.submit_delay();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                log::debug!("contact form: submit ignored: {err}");
                return;
            }
            None => return,
        }
        log::info!("contact form: sending (simulated, {delay:?})");

        let finish = move || {
            pending.try_set_value(None);
            let sent = form.try_update(ContactForm::finish_submit).flatten();
            if let Some(sent) = sent {
                log::debug!(
                    "contact form: cleared after send (company: {:?}, position: {:?})",
                    sent.company,
                    sent.position
                );
                if let Some(toaster) = toaster {
                    toaster.success(SUCCESS_MESSAGE);
                }
            }
        };

        match set_timeout_with_handle(finish, delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                log::warn!("contact form: could not schedule send: {err:?}");
                form.update(|f| {
                    f.finish_submit();
                });
            }
        }
    };

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title section-title-lg">"Get in Touch"</h2>
                    <p class="section-description">
                        "Ready to start your next project? We'd love to hear from you. "
                        "Send us a message and we'll respond as soon as possible."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="card contact-form-card">
                        <form class="contact-form" on:submit=on_submit>
                            <div class="form-row">
                                <TextInput
                                    form=form
                                    field=Field::Name
                                    label="Full Name *"
                                    placeholder="John Doe"
                                    required=true
                                />
                                <TextInput
                                    form=form
                                    field=Field::Email
                                    label="Email Address *"
                                    kind="email"
                                    placeholder="john@company.com"
                                    required=true
                                />
                            </div>

                            <div class="form-row">
                                <TextInput
                                    form=form
                                    field=Field::Company
                                    label="Company"
                                    placeholder="Your Company"
                                />
                                <div class="form-field">
                                    <label for="position" class="form-label">"Position Type"</label>
                                    <select
                                        id="position"
                                        class="form-input"
                                        prop:value=move || form.with(|f| f.field(Field::Position).to_owned())
                                        on:change=move |ev| {
                                            form.update(|f| f.set_field(Field::Position, event_target_value(&ev)))
                                        }
                                    >
                                        <option value="" disabled=true>"Select position type"</option>
                                        {PositionType::ALL
                                            .into_iter()
                                            .map(|p| view! { <option value=p.value()>{p.label()}</option> })
                                            .collect_view()}
                                    </select>
                                </div>
                            </div>

                            <div class="form-field">
                                <label for="message" class="form-label">"Message *"</label>
                                <textarea
                                    id="message"
                                    class="form-input form-textarea"
                                    placeholder="Tell us about your project or opportunity..."
                                    required=true
                                    prop:value=move || form.with(|f| f.field(Field::Message).to_owned())
                                    on:input=move |ev| {
                                        form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                class="btn btn-accent btn-block"
                                disabled=move || !form.with(ContactForm::can_submit)
                            >
                                {move || if form.with(ContactForm::is_submitting) { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>

                    <ContactDetails contact=contact />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TextInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=field.as_str() class="form-label">{label}</label>
            <input
                id=field.as_str()
                type=kind
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn ContactDetails(contact: ContactInfo) -> impl IntoView {
    let ContactInfo {
        email,
        phone,
        hours,
        offices,
        social,
    } = contact;

    view! {
        <div class="contact-details">
            <div>
                <h3 class="contact-heading">"Contact Information"</h3>
                <div class="contact-list">
                    <ContactRow icon=IconName::Mail title="Email" lines=vec![email] />
                    <ContactRow icon=IconName::Phone title="Phone" lines=vec![phone] />
                    <ContactRow icon=IconName::Clock title="Business Hours" lines=hours />
                </div>
            </div>

            <div>
                <h3 class="contact-heading">"Office Locations"</h3>
                <div class="contact-list">
                    {offices
                        .into_iter()
                        .map(|office| {
                            view! { <ContactRow icon=IconName::MapPin title=office.city lines=office.lines /> }
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 class="contact-heading">"Follow Us"</h3>
                <div class="social-row">
                    {social
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="social-tile" aria-label=link.name>
                                    <NamedIcon name=link.icon size="20" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactRow(icon: IconName, #[prop(into)] title: String, lines: Vec<String>) -> impl IntoView {
    view! {
        <div class="contact-row">
            <div class="contact-row-icon">
                <NamedIcon name=icon size="20" />
            </div>
            <div>
                <p class="contact-row-title">{title}</p>
                {lines
                    .into_iter()
                    .map(|line| view! { <p class="contact-row-line">{line}</p> })
                    .collect_view()}
            </div>
        </div>
    }
}
