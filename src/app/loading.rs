use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use super::motion::use_reduced_motion;

const DISPLAY_FOR: Duration = Duration::from_millis(800);
const FADE_FOR: Duration = Duration::from_millis(300);

/// Splash overlay shown while the page settles. With reduced motion the
/// completion callback fires immediately and no timers are scheduled.
#[component]
pub fn LoadingScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let reduced = use_reduced_motion().get_untracked();
    let (fade_out, set_fade_out) = signal(false);
    let timers = StoredValue::new(Vec::<TimeoutHandle>::new());

    Effect::new(move |_| {
        if reduced {
            on_complete.run(());
            return;
        }
        let Ok(display) = set_timeout_with_handle(
            move || {
                let _ = set_fade_out.try_set(true);
                if let Ok(fade) = set_timeout_with_handle(move || on_complete.run(()), FADE_FOR) {
                    timers.try_update_value(|pending| pending.push(fade));
                }
            },
            DISPLAY_FOR,
        ) else {
            return;
        };
        timers.update_value(|pending| pending.push(display));
    });

    on_cleanup(move || {
        timers.update_value(|pending| {
            for handle in pending.drain(..) {
                handle.clear();
            }
        });
    });

    view! {
        <div class=move || {
            if fade_out() {
                "fixed inset-0 z-50 flex items-center justify-center bg-background transition-opacity duration-300 opacity-0"
            } else {
                "fixed inset-0 z-50 flex items-center justify-center bg-background transition-opacity duration-300 opacity-100"
            }
        }>
            <div class="relative" aria-live="polite">
                <div class=if reduced {
                    "w-12 h-12 rounded-full border-2 border-muted/40"
                } else {
                    "w-12 h-12 rounded-full border-2 border-muted/40 animate-pulse"
                }></div>
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-2 h-2 bg-foreground rounded-full"></div>
            </div>
        </div>
    }
}
