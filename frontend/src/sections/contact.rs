use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::motion::{Ease, Pose, Reveal};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::zone::Threshold;
use crate::config::{SUBMITTED_DISPLAY_MS, SUBMIT_LATENCY_MS};
use crate::content::{self, ContactConfig, SectionConfig};
use crate::icons::{Icon, IconView};
use crate::scroll::tel_href;

const LABEL: Reveal = Reveal::new(Pose::offset_y(20.0)).duration(600).at(Threshold::Top(85));
const TITLE: Reveal = Reveal::new(Pose::offset_y(50.0))
    .duration(1000)
    .ease(Ease::ExpoOut)
    .delay(100);
const FORM: Reveal = Reveal::new(Pose::offset_y(40.0)).duration(800).delay(200);
const INFO: Reveal = Reveal::new(Pose::offset_y(30.0))
    .duration(600)
    .delay(300)
    .stagger(".info-item", 100)
    .at(Threshold::Top(85));

pub fn reveal_plan(config: &ContactConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    vec![LABEL, TITLE, FORM, INFO]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    InquiryType,
    Message,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    /// The visitor pressed submit; the simulated request is in flight.
    Submit,
    /// The simulated request finished.
    Sent,
    /// The confirmation has been shown long enough.
    ClearNotice,
}

/// State of the contact form. Lives only as long as the section is mounted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub inquiry_type: String,
    pub message: String,
    pub submitting: bool,
    pub submitted: bool,
}

impl ContactForm {
    /// Name, email and message are required; the inquiry type is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty() && !self.message.trim().is_empty()
    }

    pub fn apply(&self, action: FormAction) -> ContactForm {
        match action {
            FormAction::Edit(field, value) => {
                let mut next = self.clone();
                match field {
                    Field::Name => next.name = value,
                    Field::Email => next.email = value,
                    Field::InquiryType => next.inquiry_type = value,
                    Field::Message => next.message = value,
                }
                next
            }
            FormAction::Submit if self.submitting || !self.is_complete() => self.clone(),
            FormAction::Submit => ContactForm {
                submitting: true,
                submitted: false,
                ..self.clone()
            },
            FormAction::Sent if !self.submitting => self.clone(),
            FormAction::Sent => ContactForm {
                submitting: false,
                submitted: true,
                ..ContactForm::default()
            },
            FormAction::ClearNotice => ContactForm {
                submitted: false,
                ..self.clone()
            },
        }
    }

    pub fn submission(&self) -> ContactSubmission<'_> {
        ContactSubmission {
            name: &self.name,
            email: &self.email,
            inquiry_type: &self.inquiry_type,
            message: &self.message,
        }
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// What would be sent if the form had a transport. Only ever logged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub inquiry_type: &'a str,
    pub message: &'a str,
}

/// Timers of the in-flight submission. At most one submission runs at a
/// time, so starting a new one drops whatever the last one left behind.
#[derive(Debug)]
pub struct PendingTimers<T> {
    timers: Vec<T>,
}

impl<T> Default for PendingTimers<T> {
    fn default() -> Self {
        Self { timers: Vec::new() }
    }
}

impl<T> PendingTimers<T> {
    /// Starts a new submission with its first timer.
    pub fn restart(&mut self, first: T) {
        self.timers.clear();
        self.timers.push(first);
    }

    /// Adds a follow-up timer to the current submission.
    pub fn push(&mut self, timer: T) {
        self.timers.push(timer);
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

pub fn button_label(config: &ContactConfig, form: &ContactForm) -> &'static str {
    if form.submitting {
        config.sending_text
    } else if form.submitted {
        config.sent_text
    } else {
        config.submit_button_text
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or(&content::CONTACT)]
    pub config: &'static ContactConfig,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <ContactBody config={props.config} /> }
}

#[function_component(ContactBody)]
fn contact_body(props: &ContactProps) -> Html {
    let config = props.config;
    let label_ref = use_node_ref();
    let title_ref = use_node_ref();
    let form_ref = use_node_ref();
    let info_ref = use_node_ref();
    let inquiry_ref = use_node_ref();
    let form = use_reducer(ContactForm::default);
    let timers = use_mut_ref(PendingTimers::<Timeout>::default);

    use_scroll_reveal(
        "contact",
        Zone::bind(
            &[label_ref.clone(), title_ref.clone(), form_ref.clone(), info_ref.clone()],
            reveal_plan(config),
        ),
    );

    // Pending submit timers die with the section.
    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let mut timers = timers.borrow_mut();
                    if !timers.is_empty() {
                        debug!("contact: dropping {} form timers", timers.len());
                        timers.clear();
                    }
                }
            },
            (),
        );
    }

    // A select keeps whatever the visitor picked, so push resets back into it.
    {
        let inquiry_ref = inquiry_ref.clone();
        use_effect_with_deps(
            move |value: &String| {
                if let Some(select) = inquiry_ref.cast::<HtmlSelectElement>() {
                    select.set_value(value);
                }
                || ()
            },
            form.inquiry_type.clone(),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let timers = timers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.submitting || !form.is_complete() {
                return;
            }
            match serde_json::to_string(&form.submission()) {
                Ok(payload) => debug!("contact: simulated submit {}", payload),
                Err(e) => debug!("contact: could not serialise submission: {}", e),
            }
            form.dispatch(FormAction::Submit);

            let sent = {
                let form = form.clone();
                let timers = timers.clone();
                Timeout::new(SUBMIT_LATENCY_MS, move || {
                    info!("contact: message sent");
                    form.dispatch(FormAction::Sent);
                    let form = form.clone();
                    let notice = Timeout::new(SUBMITTED_DISPLAY_MS, move || {
                        form.dispatch(FormAction::ClearNotice);
                    });
                    timers.borrow_mut().push(notice);
                })
            };
            timers.borrow_mut().restart(sent);
        })
    };

    let edit_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };
    let on_inquiry = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::InquiryType, select.value()));
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, area.value()));
        })
    };

    html! {
        <section id="contact" class="section">
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-field label {
                    display: block;
                    margin-bottom: 0.5rem;
                }
                .contact-field input,
                .contact-field select,
                .contact-field textarea {
                    width: 100%;
                    padding: 1rem 0;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    font: inherit;
                    outline: none;
                    transition: border-color 0.3s;
                }
                .contact-field input:focus,
                .contact-field select:focus,
                .contact-field textarea:focus {
                    border-color: rgba(255, 255, 255, 0.6);
                }
                .contact-field select option {
                    background: #000;
                }
                .contact-field textarea {
                    resize: vertical;
                    min-height: 8rem;
                }
                .contact-submit {
                    align-self: flex-start;
                }
                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .info-item {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }
                .info-item a {
                    color: inherit;
                    text-decoration: none;
                }
                .info-item a:hover {
                    text-decoration: underline;
                }
                .contact-image {
                    width: 100%;
                    height: auto;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                @media (min-width: 1024px) {
                    .contact-layout { grid-template-columns: 3fr 2fr; }
                }
                "#}
            </style>
            <div class="grid-bg" style="opacity: 0.3;"></div>

            <div class="section-inner">
                <div ref={label_ref} class="section-label">
                    <span class="text-caption muted">{config.label}</span>
                </div>
                <div ref={title_ref}>
                    <h2 class="text-h1 section-title">{config.title}</h2>
                    <p class="text-body section-subtitle">{config.subtitle}</p>
                </div>

                <div class="contact-layout">
                    <form ref={form_ref} class="contact-form" onsubmit={onsubmit}>
                        <div class="contact-field">
                            <label for="contact-name" class="text-caption muted">{config.name_label}</label>
                            <input
                                id="contact-name"
                                type="text"
                                required=true
                                placeholder={config.name_placeholder}
                                value={form.name.clone()}
                                oninput={edit_input(Field::Name)}
                            />
                        </div>
                        <div class="contact-field">
                            <label for="contact-email" class="text-caption muted">{config.email_label}</label>
                            <input
                                id="contact-email"
                                type="email"
                                required=true
                                placeholder={config.email_placeholder}
                                value={form.email.clone()}
                                oninput={edit_input(Field::Email)}
                            />
                        </div>
                        <div class="contact-field">
                            <label for="contact-inquiry" class="text-caption muted">{config.project_type_label}</label>
                            <select ref={inquiry_ref} id="contact-inquiry" onchange={on_inquiry}>
                                <option value="">{config.project_type_placeholder}</option>
                                { for config.project_type_options.iter().map(|option| html! {
                                    <option key={option.value} value={option.value}>{option.label}</option>
                                }) }
                            </select>
                        </div>
                        <div class="contact-field">
                            <label for="contact-message" class="text-caption muted">{config.message_label}</label>
                            <textarea
                                id="contact-message"
                                rows="5"
                                required=true
                                placeholder={config.message_placeholder}
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                        </div>
                        <button type="submit" class="btn-primary contact-submit" disabled={form.submitting}>
                            {button_label(config, &form)}
                            <IconView icon={Icon::Send} class="btn-icon-shift" />
                        </button>
                    </form>

                    <div ref={info_ref} class="contact-info">
                        {
                            if !config.image.is_empty() {
                                html! { <img class="contact-image info-item" src={config.image} alt={config.company_name} loading="lazy" /> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if !config.company_name.is_empty() {
                                html! {
                                    <div class="info-item">
                                        <IconView icon={Icon::Building} />
                                        <span class="text-body">{config.company_name}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if !config.address.is_empty() {
                                html! {
                                    <div class="info-item">
                                        <IconView icon={Icon::MapPin} />
                                        <span class="text-body-sm muted">{config.address}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if !config.phone.is_empty() {
                                html! {
                                    <div class="info-item">
                                        <IconView icon={Icon::Phone} />
                                        <a class="text-body-sm muted" href={tel_href(config.phone)}>{config.phone}</a>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if !config.contact_info.is_empty() {
                                html! {
                                    <p class="info-item text-body-sm faint">{config.contact_info}</p>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing::{assert_in_order, render, without_markers};

    fn filled() -> ContactForm {
        ContactForm::default()
            .apply(FormAction::Edit(Field::Name, "Ada".into()))
            .apply(FormAction::Edit(Field::Email, "ada@example.com".into()))
            .apply(FormAction::Edit(Field::InquiryType, "partnership".into()))
            .apply(FormAction::Edit(Field::Message, "Hello".into()))
    }

    #[test]
    fn disabled_contact_has_no_zones() {
        let config = ContactConfig { title: "", ..content::CONTACT };
        assert!(reveal_plan(&config).is_empty());
        assert_eq!(reveal_plan(&content::CONTACT).len(), 4);
    }

    #[test]
    fn submit_runs_through_sending_sent_and_back() {
        let form = filled();
        assert!(form.is_complete());

        let sending = form.apply(FormAction::Submit);
        assert!(sending.submitting);
        assert!(!sending.submitted);
        assert_eq!(sending.name, "Ada");

        let sent = sending.apply(FormAction::Sent);
        assert!(!sent.submitting);
        assert!(sent.submitted);
        assert_eq!(
            (sent.name.as_str(), sent.email.as_str(), sent.inquiry_type.as_str(), sent.message.as_str()),
            ("", "", "", "")
        );

        let idle = sent.apply(FormAction::ClearNotice);
        assert_eq!(idle, ContactForm::default());
    }

    #[test]
    fn incomplete_forms_do_not_submit() {
        let form = ContactForm::default().apply(FormAction::Edit(Field::Name, "Ada".into()));
        assert_eq!(form.apply(FormAction::Submit), form);

        let blank = filled().apply(FormAction::Edit(Field::Message, "   ".into()));
        assert!(!blank.is_complete());
        assert!(!blank.apply(FormAction::Submit).submitting);
    }

    #[test]
    fn inquiry_type_is_optional() {
        let form = filled().apply(FormAction::Edit(Field::InquiryType, String::new()));
        assert!(form.apply(FormAction::Submit).submitting);
    }

    #[test]
    fn stray_sent_is_ignored() {
        let form = filled();
        assert_eq!(form.apply(FormAction::Sent), form);
    }

    #[test]
    fn button_follows_the_submit_state() {
        let config = &content::CONTACT;
        let form = filled();
        assert_eq!(button_label(config, &form), "Send Message");
        let sending = form.apply(FormAction::Submit);
        assert_eq!(button_label(config, &sending), "Sending...");
        assert_eq!(button_label(config, &sending.apply(FormAction::Sent)), "Message Sent!");
    }

    #[test]
    fn repeated_submissions_keep_only_the_latest_timers() {
        let mut timers = PendingTimers::default();
        assert!(timers.is_empty());
        for round in 0..10 {
            timers.restart(round * 2);
            timers.push(round * 2 + 1);
            assert_eq!(timers.len(), 2);
        }
        timers.clear();
        assert!(timers.is_empty());
    }

    #[test]
    fn submission_serialises_in_camel_case() {
        let form = filled();
        let json = serde_json::to_value(form.submission()).unwrap();
        assert_eq!(json["inquiryType"], "partnership");
        assert_eq!(json["name"], "Ada");
        assert!(json.get("inquiry_type").is_none());
    }

    #[test]
    fn rendered_contact_reproduces_its_copy() {
        let config = &content::CONTACT;
        let html = render::<Contact>(ContactProps { config });
        let mut texts = vec![
            config.label,
            config.title,
            config.subtitle,
            config.name_label,
            config.email_label,
            config.project_type_label,
            config.project_type_placeholder,
        ];
        texts.extend(config.project_type_options.iter().map(|o| o.label));
        texts.extend([
            config.message_label,
            config.submit_button_text,
            config.company_name,
            config.address,
            config.phone,
            config.contact_info,
        ]);
        assert_in_order(&html, &texts);
    }

    #[test]
    fn disabled_contact_renders_nothing() {
        static OFF: ContactConfig = ContactConfig { title: "", ..content::CONTACT };
        let html = render::<Contact>(ContactProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
