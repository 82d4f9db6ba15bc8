use leptos::prelude::*;
use leptos_use::use_media_query;

/// Platform-wide reduced-motion preference, provided once at the app root.
/// Every animated behavior collapses to its instantaneous equivalent when
/// this is set; it is an accessibility contract, not a style option.
#[derive(Clone, Copy)]
pub struct ReducedMotion(Signal<bool>);

pub fn provide_reduced_motion() {
    let prefers = use_media_query("(prefers-reduced-motion: reduce)");
    provide_context(ReducedMotion(prefers));
}

pub fn use_reduced_motion() -> Signal<bool> {
    expect_context::<ReducedMotion>().0
}
