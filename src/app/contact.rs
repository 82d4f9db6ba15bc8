use leptos::{html, prelude::*};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use super::sections::SectionHeader;
use super::toast::use_toaster;

const CONTACT_EMAIL: &str = "hello@babjikilaru.com";

// encodeURIComponent's unreserved characters
const MAILTO_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("That doesn't look like an email address.")]
    InvalidEmail,
    #[error("Please write a short message.")]
    MissingMessage,
}

fn validate(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(FormError::InvalidEmail),
    }
    if message.trim().is_empty() {
        return Err(FormError::MissingMessage);
    }
    Ok(())
}

/// Build the `mailto:` URL handed to the platform browser. The message body
/// carries a reply-to trailer because `mailto:` has no from-field.
fn mailto_href(name: &str, email: &str, message: &str) -> String {
    format!(
        "mailto:{CONTACT_EMAIL}?subject=Portfolio%20Contact%20from%20{}&body={}%0D%0A%0D%0AReply%20to:%20{}",
        utf8_percent_encode(name.trim(), MAILTO_ENCODE),
        utf8_percent_encode(message.trim(), MAILTO_ENCODE),
        utf8_percent_encode(email.trim(), MAILTO_ENCODE),
    )
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let toaster = use_toaster();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<FormError>);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let (name, email, message) = (name.value(), email.value(), message.value());

        if let Err(err) = validate(&name, &email, &message) {
            set_error(Some(err));
            set_sent(false);
            return;
        }
        set_error(None);

        let _ = window()
            .location()
            .set_href(&mailto_href(&name, &email, &message));
        set_sent(true);
        toaster.toast(
            "Draft ready",
            "Opening your email client with your details pre-filled.",
        );
    };

    view! {
        <section id="contact" class="section-anchor py-16 lg:py-24">
            <div class="container mx-auto px-6 lg:px-12">
                <SectionHeader
                    eyebrow="Contact"
                    title="Let's build something together."
                    description="Send a quick note. I usually respond within a business day."
                />

                <div class="grid lg:grid-cols-3 gap-6">
                    <form
                        class="lg:col-span-2 space-y-4 bg-card border border-muted/30 rounded-2xl p-6 shadow-sm"
                        on:submit=on_submit
                    >
                        <div class="grid md:grid-cols-2 gap-4">
                            <label class="flex flex-col gap-2 text-sm text-muted">
                                "Name"
                                <input
                                    node_ref=name_ref
                                    type="text"
                                    class="input"
                                    placeholder="Your name"
                                />
                            </label>
                            <label class="flex flex-col gap-2 text-sm text-muted">
                                "Email"
                                <input
                                    node_ref=email_ref
                                    type="email"
                                    class="input"
                                    placeholder="you@example.com"
                                />
                            </label>
                        </div>
                        <label class="flex flex-col gap-2 text-sm text-muted">
                            "Message"
                            <textarea
                                node_ref=message_ref
                                class="input min-h-[140px] resize-y"
                                placeholder="What can we collaborate on?"
                            ></textarea>
                        </label>

                        <div class="flex items-center gap-3">
                            <button
                                type="submit"
                                class="inline-flex items-center gap-2 px-5 py-3 rounded-xl bg-primary text-background font-medium hover:-translate-y-0.5 transition-transform duration-200"
                            >
                                "Send message"
                            </button>
                            <a
                                href=format!("mailto:{CONTACT_EMAIL}")
                                class="inline-flex items-center gap-2 text-sm text-foreground hover:text-primary"
                            >
                                "Prefer email? " {CONTACT_EMAIL}
                            </a>
                        </div>
                        {move || {
                            error()
                                .map(|err| view! { <p class="text-sm text-red">{err.to_string()}</p> })
                        }}
                        {move || {
                            sent()
                                .then(|| {
                                    view! { <p class="text-sm text-green">"Opening your email client..."</p> }
                                })
                        }}
                    </form>

                    <div class="bg-card/60 border border-muted/30 rounded-2xl p-6 shadow-sm space-y-4">
                        <h3 class="text-lg font-semibold text-foreground">"Availability"</h3>
                        <p class="text-sm text-muted">
                            "Open to backend, platform, or full-stack opportunities. Happy to consult on cloud migrations or DX upgrades too."
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {["New engagements", "Mentorship", "Advisory"]
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="px-3 py-1.5 rounded-full bg-card text-xs text-foreground border border-muted/40">
                                            {*tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_incomplete_input() {
        assert_eq!(
            validate("", "a@b.com", "hi"),
            Err(FormError::MissingName)
        );
        assert_eq!(validate("Ada", "", "hi"), Err(FormError::MissingEmail));
        assert_eq!(
            validate("Ada", "not-an-address", "hi"),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            validate("Ada", "@example.com", "hi"),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            validate("Ada", "ada@localhost", "hi"),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            validate("Ada", "ada@example.com", "  "),
            Err(FormError::MissingMessage)
        );
    }

    #[test]
    fn accepts_a_complete_form() {
        assert_eq!(validate("Ada", "ada@example.com", "hello there"), Ok(()));
    }

    #[test]
    fn mailto_encodes_every_field() {
        let href = mailto_href("Ada Lovelace", "ada@example.com", "Hi there, let's talk");

        assert!(href.starts_with("mailto:hello@babjikilaru.com?subject="));
        assert!(href.contains("Portfolio%20Contact%20from%20Ada%20Lovelace"));
        assert!(href.contains("Hi%20there%2C%20let's%20talk"));
        assert!(href.contains("%0D%0A%0D%0AReply%20to:%20ada%40example.com"));
    }
}
