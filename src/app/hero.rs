mod typewriter;

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use super::motion::use_reduced_motion;
use super::social::SocialLinks;
use typewriter::{Typewriter, TYPE_MS};

const ROLES: [&str; 5] = [
    "Full Stack Software Engineer",
    "Java/Spring Boot Developer",
    "React & Angular Engineer",
    "Cloud & Backend Developer",
    "API & Microservices Builder",
];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center px-6 pt-32 pb-16">
            <div class="flex flex-col items-center text-center gap-6 max-w-3xl">
                <div class="w-24 h-24 rounded-full bg-primary flex items-center justify-center text-background text-3xl font-bold">
                    "BK"
                </div>
                <p class="text-sm uppercase tracking-[0.18em] text-muted">"Hello, I'm"</p>
                <h1 class="text-4xl md:text-6xl font-bold text-foreground">"Babji Kilaru"</h1>
                <p class="text-xl md:text-2xl text-muted h-8">
                    <TypewriterText />
                </p>
                <p class="text-base md:text-lg text-muted leading-relaxed">
                    "I build resilient backend services, clean user interfaces, and the cloud infrastructure that keeps them running."
                </p>
                <div class="flex flex-col sm:flex-row items-center gap-4 mt-2">
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-xl bg-primary text-background font-medium hover:-translate-y-0.5 transition-transform duration-200"
                    >
                        "View Projects"
                    </a>
                    <a
                        href="mailto:hello@babjikilaru.com?subject=Intro%20call"
                        class="px-6 py-3 rounded-xl border border-muted/40 text-foreground font-medium hover:bg-card transition-colors duration-200"
                    >
                        "Book a Call"
                    </a>
                </div>
                <SocialLinks />
            </div>
        </section>
    }
}

/// Drives the [`Typewriter`] with a self-rescheduling timeout. The chain
/// stops as soon as the text signal is disposed, and the pending handle is
/// cleared on unmount.
#[component]
fn TypewriterText() -> impl IntoView {
    let reduced = use_reduced_motion().get_untracked();
    let initial = if reduced {
        ROLES[0].to_string()
    } else {
        String::new()
    };
    let (text, set_text) = signal(initial);
    let machine = StoredValue::new(Typewriter::new(&ROLES));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    if !reduced {
        schedule(machine, set_text, pending, Duration::from_millis(TYPE_MS));
    }

    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    view! {
        <span class="inline-flex items-center">
            <span>{text}</span>
            {(!reduced)
                .then(|| view! { <span class="ml-1 w-0.5 h-6 bg-foreground animate-pulse"></span> })}
        </span>
    }
}

fn schedule(
    machine: StoredValue<Typewriter>,
    set_text: WriteSignal<String>,
    pending: StoredValue<Option<TimeoutHandle>>,
    delay: Duration,
) {
    let Ok(handle) = set_timeout_with_handle(
        move || {
            let Some((text, next)) = machine.try_update_value(|tw| {
                let next = tw.tick();
                (tw.text(), next)
            }) else {
                return;
            };
            if set_text.try_set(text).is_some() {
                // signal disposed, stop the chain
                return;
            }
            schedule(machine, set_text, pending, next);
        },
        delay,
    ) else {
        return;
    };
    let _ = pending.try_update_value(|slot| *slot = Some(handle));
}
