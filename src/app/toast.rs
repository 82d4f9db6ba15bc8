use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

const DISMISS_AFTER: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// App-wide notification queue. Each toast schedules its own dismissal;
/// every pending timer is cancelled when the provider is torn down so no
/// callback fires against a disposed view.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    timers: StoredValue<Vec<(u64, TimeoutHandle)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn toast(&self, title: impl Into<String>, description: impl Into<String>) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.into(),
                description: description.into(),
            })
        });

        let toasts = self.toasts;
        let timers = self.timers;
        if let Ok(handle) = set_timeout_with_handle(
            move || {
                let _ = toasts.try_update(|list| list.retain(|toast| toast.id != id));
                let _ = timers.try_update_value(|list| list.retain(|(timer_id, _)| *timer_id != id));
            },
            DISMISS_AFTER,
        ) {
            self.timers.update_value(|list| list.push((id, handle)));
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.timers.update_value(|list| {
            list.retain(|(timer_id, handle)| {
                if *timer_id == id {
                    handle.clear();
                    false
                } else {
                    true
                }
            })
        });
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    fn clear_timers(&self) {
        self.timers.update_value(|list| {
            for (_, handle) in list.drain(..) {
                handle.clear();
            }
        });
    }
}

pub fn provide_toaster() {
    let toaster = Toaster {
        toasts: RwSignal::new(Vec::new()),
        timers: StoredValue::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    on_cleanup(move || toaster.clear_timers());
    provide_context(toaster);
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div
            class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex flex-col gap-2 w-full max-w-sm px-4"
            aria-live="polite"
        >
            {move || {
                toaster
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="bg-card border border-muted/40 rounded-xl shadow-lg p-4">
                                <div class="flex items-start justify-between gap-3">
                                    <div>
                                        <p class="font-medium text-foreground">{toast.title}</p>
                                        <p class="text-sm text-muted">{toast.description}</p>
                                    </div>
                                    <button
                                        class="text-muted hover:text-foreground"
                                        aria-label="Dismiss notification"
                                        on:click=move |_| toaster.dismiss(id)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
