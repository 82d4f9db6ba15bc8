mod nav;

use leptos::{either::Either, ev, html, prelude::*};
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos_use::{use_event_listener, use_window, use_window_scroll};
use wasm_bindgen::JsCast;

use super::motion::use_reduced_motion;
use nav::{
    FocusTarget, Highlight, ItemRect, MenuKey, NavController, NavHost, NavItem, NavSnapshot,
    DEFAULT_TARGET,
};

const ABOUT_MENU_ID: &str = "about-menu";
const ABOUT_TRIGGER_ID: &str = "about-trigger";

const ABOUT_ITEMS: [NavItem; 5] = [
    NavItem {
        id: "about",
        label: "About",
    },
    NavItem {
        id: "skills",
        label: "Skills",
    },
    NavItem {
        id: "experience",
        label: "Experience",
    },
    NavItem {
        id: "education",
        label: "Education",
    },
    NavItem {
        id: "certifications",
        label: "Certifications",
    },
];

const PRIMARY_LINKS: [NavItem; 3] = [
    NavItem {
        id: "projects",
        label: "Projects",
    },
    NavItem {
        id: "resume",
        label: "Resume",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

fn item_dom_id(id: &str) -> String {
    format!("about-menu-item-{id}")
}

fn current_fragment() -> String {
    window()
        .location()
        .hash()
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

fn publish(host: &DomHost) {
    if let Some(snapshot) = host.nav.try_with_value(NavController::snapshot) {
        let _ = host.state.try_set(snapshot);
    }
}

fn apply_focus(target: FocusTarget) {
    let id = match target {
        FocusTarget::Item(id) => item_dom_id(id),
        FocusTarget::Trigger => ABOUT_TRIGGER_ID.to_string(),
    };
    let Some(el) = document().get_element_by_id(&id) else {
        return;
    };
    if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
        let _ = el.focus();
    }
}

/// [`NavHost`] backed by the real document. Copyable so the rAF closure and
/// every event handler can carry it around.
#[derive(Clone, Copy)]
struct DomHost {
    nav: StoredValue<NavController>,
    state: WriteSignal<NavSnapshot>,
}

impl NavHost for DomHost {
    fn scroll_to_section(&self, id: &str, smooth: bool) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            log::debug!("no anchor for #{id}, updating the fragment instead");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            web_sys::ScrollBehavior::Smooth
        } else {
            web_sys::ScrollBehavior::Auto
        });
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_fragment(&self, id: &str) {
        let _ = window().location().set_hash(id);
    }

    fn measure_item(&self, id: &str) -> Option<ItemRect> {
        let document = document();
        let menu = document.get_element_by_id(ABOUT_MENU_ID)?;
        let item = document.get_element_by_id(&item_dom_id(id))?;
        let menu_rect = menu.get_bounding_client_rect();
        let item_rect = item.get_bounding_client_rect();
        Some(ItemRect {
            height: item_rect.height(),
            top: item_rect.top() - menu_rect.top() + menu.scroll_top() as f64,
        })
    }

    fn set_scroll_lock(&self, locked: bool) {
        let Some(body) = document().body() else {
            return;
        };
        if locked {
            let _ = body.style().set_property("overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }

    fn request_frame(&self, generation: u64) {
        let host = *self;
        request_animation_frame(move || {
            // the component may have unmounted before the frame fired
            let focus = host
                .nav
                .try_update_value(|nav| nav.frame(&host, generation))
                .flatten();
            publish(&host);
            if let Some(target) = focus {
                apply_focus(target);
            }
        });
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let reduced = use_reduced_motion().get_untracked();
    let nav = StoredValue::new(NavController::new(&ABOUT_ITEMS, reduced));
    let (state, set_state) = signal(nav.with_value(NavController::snapshot));
    let host = DomHost {
        nav,
        state: set_state,
    };

    nav.update_value(|nav| nav.start(&current_fragment()));
    publish(&host);

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let offset = scroll_y.get();
        if nav
            .try_update_value(|nav| nav.on_scroll(offset))
            .unwrap_or(false)
        {
            publish(&host);
        }
    });

    let _ = use_event_listener(use_window(), ev::hashchange, move |_| {
        nav.update_value(|nav| nav.on_hash_change(&current_fragment()));
        publish(&host);
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        nav.update_value(|nav| nav.on_resize(&host));
    });

    on_cleanup(move || {
        let _ = nav.try_update_value(|nav| nav.stop(&host));
    });

    let scrolled = Memo::new(move |_| state().scrolled);
    let submenu_open = Memo::new(move |_| state().submenu_open);
    let active_item = Memo::new(move |_| state().active_item);
    let highlight = Memo::new(move |_| state().highlight);
    let mobile_open = Memo::new(move |_| state().mobile_open);
    let about_active =
        Memo::new(move |_| ABOUT_ITEMS.iter().any(|item| item.id == state().active_target));
    let is_current = move |id: &'static str| state.with(|s| s.active_target == id);

    let dropdown_ref = NodeRef::<html::Div>::new();

    let highlight_style = move || {
        let Highlight {
            height,
            top,
            opacity,
        } = highlight();
        format!("height: {height}px; transform: translateY({top}px); opacity: {opacity};")
    };

    let on_dropdown_focusout = move |ev: ev::FocusEvent| {
        let focus_within = ev
            .related_target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| {
                dropdown_ref
                    .get_untracked()
                    .map(|wrapper| wrapper.contains(Some(&node)))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        nav.update_value(|nav| nav.focus_out(focus_within));
        publish(&host);
    };

    let on_trigger_keydown = move |ev: ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "ArrowDown" | "Enter" | " ") {
            ev.prevent_default();
            nav.update_value(|nav| nav.open_submenu_with_focus(&host));
            publish(&host);
        }
    };

    let submenu_items = move || {
        ABOUT_ITEMS
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let id = item.id;
                view! {
                    <button
                        id=item_dom_id(id)
                        type="button"
                        role="menuitem"
                        tabindex="-1"
                        class=move || {
                            if active_item() == id {
                                "interactive-item text-foreground"
                            } else {
                                "interactive-item text-muted"
                            }
                        }
                        aria-current=move || is_current(id).then_some("page")
                        on:mouseenter=move |_| {
                            nav.update_value(|nav| nav.set_active_item(&host, id));
                            publish(&host);
                        }
                        on:focus=move |_| {
                            nav.update_value(|nav| nav.set_active_item(&host, id));
                            publish(&host);
                        }
                        on:click=move |_| {
                            nav.update_value(|nav| nav.select_item(&host, id));
                            publish(&host);
                        }
                        on:keydown=move |ev: ev::KeyboardEvent| {
                            let Some(key) = MenuKey::from_key(&ev.key()) else {
                                return;
                            };
                            if key != MenuKey::Escape {
                                ev.prevent_default();
                            }
                            let focus = nav
                                .try_update_value(|nav| nav.item_key(&host, index, key))
                                .flatten();
                            publish(&host);
                            if let Some(target) = focus {
                                apply_focus(target);
                            }
                        }
                    >
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header role="banner" class="fixed inset-x-0 top-4 z-40 flex flex-col items-center px-4 sm:px-5 md:px-6">
            <div class=move || {
                if scrolled() {
                    "header-elevated header-elevated-scrolled w-full max-w-5xl rounded-2xl"
                } else {
                    "header-elevated w-full max-w-5xl rounded-2xl"
                }
            }>
                <div class="flex items-center justify-between h-[76px] px-4 sm:px-5 lg:px-6">
                    <a
                        href="#main-content"
                        class="w-10 h-10 bg-primary rounded-full flex items-center justify-center text-background font-semibold text-sm hover:scale-105 transition-transform duration-200"
                        aria-label="Skip to main content"
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.update_value(|nav| nav.navigate_to(&host, DEFAULT_TARGET));
                            publish(&host);
                        }
                    >
                        "BK"
                    </a>

                    <nav class="hidden md:flex items-center gap-8" role="navigation" aria-label="Primary">
                        <div
                            class="relative"
                            node_ref=dropdown_ref
                            on:mouseenter=move |_| {
                                nav.update_value(|nav| nav.open_submenu(&host));
                                publish(&host);
                            }
                            on:mouseleave=move |_| {
                                nav.update_value(NavController::close_submenu);
                                publish(&host);
                            }
                            on:focusin=move |_| {
                                nav.update_value(|nav| nav.open_submenu(&host));
                                publish(&host);
                            }
                            on:touchstart=move |_| {
                                nav.update_value(|nav| nav.open_submenu(&host));
                                publish(&host);
                            }
                            on:focusout=on_dropdown_focusout
                        >
                            <button
                                id=ABOUT_TRIGGER_ID
                                class=move || {
                                    if about_active() {
                                        "nav-link nav-link-active flex items-center gap-1"
                                    } else {
                                        "nav-link flex items-center gap-1"
                                    }
                                }
                                aria-haspopup="menu"
                                aria-expanded=move || submenu_open().to_string()
                                aria-controls=ABOUT_MENU_ID
                                aria-current=move || about_active().then_some("page")
                                on:click=move |_| {
                                    nav.update_value(|nav| nav.toggle_submenu(&host));
                                    publish(&host);
                                }
                                on:keydown=on_trigger_keydown
                            >
                                "About"
                                <svg
                                    class=move || {
                                        if submenu_open() {
                                            "w-4 h-4 transition-transform duration-200 rotate-180"
                                        } else {
                                            "w-4 h-4 transition-transform duration-200"
                                        }
                                    }
                                    fill="none"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    viewBox="0 0 24 24"
                                    aria-hidden="true"
                                >
                                    <path stroke-linecap="round" stroke-linejoin="round" d="m6 9 6 6 6-6" />
                                </svg>
                            </button>

                            {move || {
                                submenu_open()
                                    .then(|| {
                                        view! {
                                            <div class="absolute top-full left-0 pt-3">
                                                <div
                                                    id=ABOUT_MENU_ID
                                                    role="menu"
                                                    aria-label="About sections"
                                                    class=if reduced {
                                                        "interactive-dropdown"
                                                    } else {
                                                        "interactive-dropdown animate-slide-down"
                                                    }
                                                >
                                                    <div
                                                        class="interactive-highlight"
                                                        style=highlight_style
                                                        aria-hidden="true"
                                                    ></div>
                                                    {submenu_items()}
                                                </div>
                                            </div>
                                        }
                                    })
                            }}
                        </div>

                        {PRIMARY_LINKS
                            .iter()
                            .map(|link| {
                                let id = link.id;
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class=move || {
                                            if is_current(id) { "nav-link nav-link-active" } else { "nav-link" }
                                        }
                                        aria-current=move || is_current(id).then_some("page")
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            nav.update_value(|nav| nav.navigate_to(&host, id));
                                            publish(&host);
                                        }
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <button
                        class="md:hidden p-2 text-foreground"
                        aria-expanded=move || mobile_open().to_string()
                        aria-controls="mobile-menu"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| {
                            nav.update_value(|nav| nav.toggle_mobile(&host));
                            publish(&host);
                        }
                    >
                        {move || {
                            if mobile_open() {
                                Either::Left(
                                    view! {
                                        <svg
                                            class="w-6 h-6"
                                            fill="none"
                                            stroke="currentColor"
                                            stroke-width="2"
                                            viewBox="0 0 24 24"
                                            aria-hidden="true"
                                        >
                                            <path stroke-linecap="round" stroke-linejoin="round" d="M6 18 18 6M6 6l12 12" />
                                        </svg>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <svg
                                            class="w-6 h-6"
                                            fill="none"
                                            stroke="currentColor"
                                            stroke-width="2"
                                            viewBox="0 0 24 24"
                                            aria-hidden="true"
                                        >
                                            <path stroke-linecap="round" stroke-linejoin="round" d="M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5" />
                                        </svg>
                                    },
                                )
                            }
                        }}
                    </button>
                </div>
            </div>

            {move || {
                mobile_open()
                    .then(|| {
                        view! {
                            <div
                                id="mobile-menu"
                                class=if reduced {
                                    "md:hidden w-full max-w-5xl rounded-2xl bg-card border border-muted/30 mt-2"
                                } else {
                                    "md:hidden w-full max-w-5xl rounded-2xl bg-card border border-muted/30 mt-2 animate-slide-down"
                                }
                            >
                                <nav class="px-6 py-6 flex flex-col gap-4" role="navigation" aria-label="Mobile">
                                    <div class="space-y-2">
                                        <p class="text-sm font-medium text-foreground">"About"</p>
                                        {ABOUT_ITEMS
                                            .iter()
                                            .map(|item| {
                                                let id = item.id;
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="w-full text-left pl-4 py-2 text-muted hover:text-foreground transition-colors focus-visible:outline-none focus-visible:text-foreground"
                                                        aria-current=move || is_current(id).then_some("page")
                                                        on:click=move |_| {
                                                            nav.update_value(|nav| nav.select_item(&host, id));
                                                            publish(&host);
                                                        }
                                                    >
                                                        {item.label}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {PRIMARY_LINKS
                                        .iter()
                                        .map(|link| {
                                            let id = link.id;
                                            view! {
                                                <a
                                                    href=format!("#{id}")
                                                    class="py-2 text-foreground font-medium"
                                                    aria-current=move || is_current(id).then_some("page")
                                                    on:click=move |ev| {
                                                        ev.prevent_default();
                                                        nav.update_value(|nav| nav.select_item(&host, id));
                                                        publish(&host);
                                                    }
                                                >
                                                    {link.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                            </div>
                        }
                    })
            }}
        </header>
    }
}
