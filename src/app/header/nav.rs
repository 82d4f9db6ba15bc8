/// Fallback navigation target used when the URL carries no fragment.
pub const DEFAULT_TARGET: &str = "main-content";

/// Vertical offset after which the header switches to its elevated style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Position and size of the submenu highlight bar, relative to the menu
/// panel. `height`/`top` keep their last measured values while the menu is
/// closed so reopening never animates from zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Highlight {
    pub height: f64,
    pub top: f64,
    pub opacity: f64,
}

/// A measured menu item, relative to the menu panel's own box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub height: f64,
    pub top: f64,
}

/// Focus moves are returned to the caller instead of performed through
/// [`NavHost`]: focusing an element dispatches focus events synchronously,
/// and those handlers call back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Item(&'static str),
    Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Down,
    Up,
    Home,
    End,
    Select,
    Escape,
}

impl MenuKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" | " " => Some(Self::Select),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Everything the controller needs from the document. The real
/// implementation lives in the `Header` component; tests use a recording
/// fake so highlight geometry can be exercised without a layout engine.
pub trait NavHost {
    /// Scroll the section with `id` into view at the top of the viewport.
    /// Returns `false` when no such element exists.
    fn scroll_to_section(&self, id: &str, smooth: bool) -> bool;

    /// Set the URL fragment directly, triggering native jump behavior.
    fn set_fragment(&self, id: &str);

    /// Measure a menu item relative to the menu panel. `None` when either
    /// element is missing; the controller leaves the highlight untouched.
    fn measure_item(&self, id: &str) -> Option<ItemRect>;

    /// Lock or unlock page-level scrolling.
    fn set_scroll_lock(&self, locked: bool);

    /// Schedule `NavController::frame(generation)` for the next paint
    /// frame, after the open/active-item change has reached the DOM.
    fn request_frame(&self, generation: u64);
}

/// Immutable view of the controller state, published to the UI after every
/// transition.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSnapshot {
    pub scrolled: bool,
    pub active_target: String,
    pub submenu_open: bool,
    pub active_item: &'static str,
    pub highlight: Highlight,
    pub mobile_open: bool,
}

/// State machine behind the header: scroll/hash tracking, the About
/// disclosure submenu with its animated highlight, keyboard traversal, and
/// the mobile menu with its body scroll lock.
///
/// All transitions run synchronously inside event handlers. Geometry is
/// measured post-layout: state changes that can move the menu bump a
/// generation counter and ask the host for a frame callback; only the
/// latest generation is applied, so a superseded measurement can never
/// flash stale geometry.
#[derive(Debug)]
pub struct NavController {
    items: &'static [NavItem],
    reduced_motion: bool,
    scrolled: bool,
    active_target: String,
    submenu_open: bool,
    active_item: &'static str,
    highlight: Highlight,
    mobile_open: bool,
    scroll_locked: bool,
    generation: u64,
    pending_focus: bool,
}

impl NavController {
    /// Panics when `items` is empty: wrap-around traversal needs at least
    /// one item (a programming error, not a runtime condition).
    pub fn new(items: &'static [NavItem], reduced_motion: bool) -> Self {
        assert!(!items.is_empty(), "submenu needs at least one item");
        Self {
            items,
            reduced_motion,
            scrolled: false,
            active_target: DEFAULT_TARGET.to_string(),
            submenu_open: false,
            active_item: items[0].id,
            highlight: Highlight::default(),
            mobile_open: false,
            scroll_locked: false,
            generation: 0,
            pending_focus: false,
        }
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            scrolled: self.scrolled,
            active_target: self.active_target.clone(),
            submenu_open: self.submenu_open,
            active_item: self.active_item,
            highlight: self.highlight,
            mobile_open: self.mobile_open,
        }
    }

    /// Initialize `active_target` from the URL fragment present at mount.
    pub fn start(&mut self, fragment: &str) {
        self.on_hash_change(fragment);
    }

    /// Reverses every effect the controller has on the page. Safe to call
    /// repeatedly; the component calls it from its cleanup hook so an
    /// interrupted lifecycle never leaves the page unscrollable.
    pub fn stop(&mut self, host: &impl NavHost) {
        self.close_submenu();
        self.mobile_open = false;
        self.release_scroll_lock(host);
    }

    /// Returns `true` when the elevated-header flag actually changed, so
    /// the caller can skip publishing on every scroll event.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD_PX;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn on_hash_change(&mut self, fragment: &str) {
        self.active_target = if fragment.is_empty() {
            DEFAULT_TARGET.to_string()
        } else {
            fragment.to_string()
        };
    }

    /// Scroll to a named section, falling back to a plain fragment update
    /// when the anchor does not exist. `active_target` is set either way:
    /// the UI reflects user intent even before the DOM settles.
    pub fn navigate_to(&mut self, host: &impl NavHost, target: &str) {
        self.active_target = target.to_string();
        if !host.scroll_to_section(target, !self.reduced_motion) {
            host.set_fragment(target);
        }
    }

    /// Open is an idempotent set, not a toggle: a touch immediately
    /// followed by a synthesized focus event must not flicker the menu
    /// closed again.
    pub fn open_submenu(&mut self, host: &impl NavHost) {
        if self.submenu_open {
            return;
        }
        self.submenu_open = true;
        self.schedule_measure(host);
    }

    /// Keyboard activation of the trigger: open and move focus to the
    /// first item once the panel has rendered.
    pub fn open_submenu_with_focus(&mut self, host: &impl NavHost) {
        self.submenu_open = true;
        self.active_item = self.items[0].id;
        self.pending_focus = true;
        self.schedule_measure(host);
    }

    /// The trigger button itself still toggles on click.
    pub fn toggle_submenu(&mut self, host: &impl NavHost) {
        if self.submenu_open {
            self.close_submenu();
        } else {
            self.open_submenu(host);
        }
    }

    /// Fade the highlight out but keep its last geometry, so the panel
    /// never shows a zero-height bar snapping away.
    pub fn close_submenu(&mut self) {
        self.submenu_open = false;
        self.pending_focus = false;
        self.highlight.opacity = 0.0;
    }

    /// Called with whether the newly focused node is still inside the
    /// trigger-and-panel composite; leaving it closes the menu.
    pub fn focus_out(&mut self, focus_within: bool) {
        if !focus_within {
            self.close_submenu();
        }
    }

    /// Hover or focus landed on a menu item.
    pub fn set_active_item(&mut self, host: &impl NavHost, id: &str) {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            return;
        };
        if self.active_item == item.id && self.submenu_open {
            // focus echo of a keyboard move we already handled
            return;
        }
        self.active_item = item.id;
        if self.submenu_open {
            self.schedule_measure(host);
        }
    }

    /// Keyboard traversal while an item has focus. Returns where focus
    /// should move, if anywhere.
    pub fn item_key(
        &mut self,
        host: &impl NavHost,
        index: usize,
        key: MenuKey,
    ) -> Option<FocusTarget> {
        match key {
            MenuKey::Down => self.move_active(host, index as isize + 1),
            MenuKey::Up => self.move_active(host, index as isize - 1),
            MenuKey::Home => self.move_active(host, 0),
            MenuKey::End => self.move_active(host, self.items.len() as isize - 1),
            MenuKey::Select => {
                let id = self.items.get(index)?.id;
                self.select_item(host, id);
                None
            }
            MenuKey::Escape => {
                self.close_submenu();
                Some(FocusTarget::Trigger)
            }
        }
    }

    /// Select from the submenu, the mobile menu, or the keyboard:
    /// selection always dismisses any open disclosure.
    pub fn select_item(&mut self, host: &impl NavHost, id: &str) {
        self.navigate_to(host, id);
        self.close_submenu();
        self.mobile_open = false;
        self.release_scroll_lock(host);
    }

    pub fn toggle_mobile(&mut self, host: &impl NavHost) {
        if self.mobile_open {
            self.mobile_open = false;
            self.release_scroll_lock(host);
        } else {
            self.mobile_open = true;
            self.scroll_locked = true;
            host.set_scroll_lock(true);
        }
    }

    /// Window resize can reflow the menu; re-measure if it is open.
    pub fn on_resize(&mut self, host: &impl NavHost) {
        if self.submenu_open {
            self.schedule_measure(host);
        }
    }

    /// Deferred measurement callback. Stale generations are dropped so a
    /// later state change in the same tick supersedes an in-flight one.
    pub fn frame(&mut self, host: &impl NavHost, generation: u64) -> Option<FocusTarget> {
        if generation != self.generation || !self.submenu_open {
            return None;
        }
        if let Some(rect) = host.measure_item(self.active_item) {
            self.highlight = Highlight {
                height: rect.height,
                top: rect.top,
                opacity: 1.0,
            };
        }
        if std::mem::take(&mut self.pending_focus) {
            Some(FocusTarget::Item(self.active_item))
        } else {
            None
        }
    }

    fn schedule_measure(&mut self, host: &impl NavHost) {
        self.generation += 1;
        host.request_frame(self.generation);
    }

    fn move_active(&mut self, host: &impl NavHost, index: isize) -> Option<FocusTarget> {
        // rem_euclid keeps the index valid for any direction or start
        let wrapped = index.rem_euclid(self.items.len() as isize) as usize;
        self.active_item = self.items[wrapped].id;
        self.schedule_measure(host);
        Some(FocusTarget::Item(self.active_item))
    }

    fn release_scroll_lock(&mut self, host: &impl NavHost) {
        if self.scroll_locked {
            self.scroll_locked = false;
            host.set_scroll_lock(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    const ITEMS: [NavItem; 3] = [
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
    ];

    #[derive(Default)]
    struct FakeHost {
        sections: Vec<&'static str>,
        rects: HashMap<&'static str, ItemRect>,
        scrolls: RefCell<Vec<(String, bool)>>,
        fragments: RefCell<Vec<String>>,
        locks: RefCell<Vec<bool>>,
        frames: RefCell<VecDeque<u64>>,
    }

    impl FakeHost {
        fn with_layout() -> Self {
            let mut host = Self {
                sections: vec!["about", "skills", "experience", "main-content"],
                ..Self::default()
            };
            for (i, item) in ITEMS.iter().enumerate() {
                host.rects.insert(
                    item.id,
                    ItemRect {
                        // uneven heights: geometry is measured, not derived
                        // from item order
                        height: 40.0 + i as f64,
                        top: 44.0 * i as f64,
                    },
                );
            }
            host
        }
    }

    impl NavHost for FakeHost {
        fn scroll_to_section(&self, id: &str, smooth: bool) -> bool {
            if !self.sections.iter().any(|section| *section == id) {
                return false;
            }
            self.scrolls.borrow_mut().push((id.to_string(), smooth));
            true
        }

        fn set_fragment(&self, id: &str) {
            self.fragments.borrow_mut().push(id.to_string());
        }

        fn measure_item(&self, id: &str) -> Option<ItemRect> {
            self.rects.get(id).copied()
        }

        fn set_scroll_lock(&self, locked: bool) {
            self.locks.borrow_mut().push(locked);
        }

        fn request_frame(&self, generation: u64) {
            self.frames.borrow_mut().push_back(generation);
        }
    }

    /// Drain scheduled frames in order, like the browser delivering rAF
    /// callbacks after the handlers that queued them.
    fn run_frames(nav: &mut NavController, host: &FakeHost) -> Option<FocusTarget> {
        let generations: Vec<u64> = host.frames.borrow_mut().drain(..).collect();
        let mut focus = None;
        for generation in generations {
            if let Some(target) = nav.frame(host, generation) {
                focus = Some(target);
            }
        }
        focus
    }

    fn controller() -> NavController {
        NavController::new(&ITEMS, false)
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn empty_item_list_is_a_programming_error() {
        NavController::new(&[], false);
    }

    #[test]
    fn navigate_scrolls_existing_section_once() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.navigate_to(&host, "skills");

        assert_eq!(nav.snapshot().active_target, "skills");
        assert_eq!(
            *host.scrolls.borrow(),
            vec![("skills".to_string(), true)]
        );
        assert!(host.fragments.borrow().is_empty());
    }

    #[test]
    fn missing_target_falls_back_to_fragment() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.navigate_to(&host, "nonexistent");

        assert_eq!(nav.snapshot().active_target, "nonexistent");
        assert!(host.scrolls.borrow().is_empty());
        assert_eq!(*host.fragments.borrow(), vec!["nonexistent".to_string()]);
    }

    #[test]
    fn reduced_motion_never_scrolls_smoothly() {
        let host = FakeHost::with_layout();
        let mut nav = NavController::new(&ITEMS, true);

        nav.navigate_to(&host, "about");

        assert_eq!(*host.scrolls.borrow(), vec![("about".to_string(), false)]);
    }

    #[test]
    fn opening_defaults_to_first_item_and_fades_in() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.open_submenu(&host);
        run_frames(&mut nav, &host);

        let snap = nav.snapshot();
        assert!(snap.submenu_open);
        assert_eq!(snap.active_item, "about");
        assert_eq!(snap.highlight.opacity, 1.0);
        assert_eq!(snap.highlight.height, host.rects["about"].height);
    }

    #[test]
    fn open_is_idempotent() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.open_submenu(&host);
        nav.open_submenu(&host);

        assert_eq!(host.frames.borrow().len(), 1);
    }

    #[test]
    fn arrow_down_wraps_through_all_items() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.open_submenu(&host);

        // full cycle from every starting index returns to the start
        for start in 0..ITEMS.len() {
            let mut index = start;
            for _ in 0..ITEMS.len() {
                let focus = nav.item_key(&host, index, MenuKey::Down);
                let Some(FocusTarget::Item(id)) = focus else {
                    panic!("arrow moves must request focus");
                };
                index = ITEMS.iter().position(|item| item.id == id).unwrap();
            }
            assert_eq!(index, start);
        }
    }

    #[test]
    fn arrow_up_wraps_through_all_items() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.open_submenu(&host);

        let mut index = 1;
        for _ in 0..ITEMS.len() {
            let Some(FocusTarget::Item(id)) = nav.item_key(&host, index, MenuKey::Up) else {
                panic!("arrow moves must request focus");
            };
            index = ITEMS.iter().position(|item| item.id == id).unwrap();
        }
        assert_eq!(index, 1);
    }

    #[test]
    fn down_then_wrap_scenario() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.open_submenu(&host);
        assert_eq!(nav.snapshot().active_item, "about");

        let _ = nav.item_key(&host, 0, MenuKey::Down);
        assert_eq!(nav.snapshot().active_item, "skills");

        let _ = nav.item_key(&host, 1, MenuKey::Down);
        let _ = nav.item_key(&host, 2, MenuKey::Down);
        assert_eq!(nav.snapshot().active_item, "about");
    }

    #[test]
    fn home_and_end_jump_to_the_edges() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.open_submenu(&host);

        assert_eq!(
            nav.item_key(&host, 1, MenuKey::Home),
            Some(FocusTarget::Item("about"))
        );
        assert_eq!(
            nav.item_key(&host, 0, MenuKey::End),
            Some(FocusTarget::Item("experience"))
        );
    }

    #[test]
    fn selection_dismisses_every_disclosure() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.open_submenu(&host);
        nav.toggle_mobile(&host);

        let _ = nav.item_key(&host, 1, MenuKey::Select);

        let snap = nav.snapshot();
        assert!(!snap.submenu_open);
        assert!(!snap.mobile_open);
        assert_eq!(snap.active_target, "skills");
        assert_eq!(*host.locks.borrow(), vec![true, false]);
    }

    #[test]
    fn escape_closes_and_refocuses_the_trigger() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.open_submenu(&host);
        run_frames(&mut nav, &host);

        let focus = nav.item_key(&host, 0, MenuKey::Escape);

        assert_eq!(focus, Some(FocusTarget::Trigger));
        let snap = nav.snapshot();
        assert!(!snap.submenu_open);
        // fade out without snapping the bar to zero height
        assert_eq!(snap.highlight.opacity, 0.0);
        assert_eq!(snap.highlight.height, host.rects["about"].height);
    }

    #[test]
    fn keyboard_open_focuses_the_first_item() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.set_active_item(&host, "experience");

        nav.open_submenu_with_focus(&host);
        let focus = run_frames(&mut nav, &host);

        assert_eq!(focus, Some(FocusTarget::Item("about")));
        assert_eq!(nav.snapshot().active_item, "about");
    }

    #[test]
    fn stale_frame_generations_are_dropped() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.open_submenu(&host);
        let stale = host.frames.borrow_mut().pop_front().unwrap();
        nav.set_active_item(&host, "skills");
        let latest = host.frames.borrow_mut().pop_front().unwrap();

        // delivered out of order: the superseded measurement must not apply
        assert!(nav.frame(&host, stale).is_none());
        assert_eq!(nav.snapshot().highlight.opacity, 0.0);

        let _ = nav.frame(&host, latest);
        assert_eq!(nav.snapshot().highlight.height, host.rects["skills"].height);
    }

    #[test]
    fn resize_remeasures_only_while_open() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.on_resize(&host);
        assert!(host.frames.borrow().is_empty());

        nav.open_submenu(&host);
        nav.on_resize(&host);
        assert_eq!(host.frames.borrow().len(), 2);
    }

    #[test]
    fn mobile_toggle_locks_and_releases_scroll() {
        let host = FakeHost::with_layout();
        let mut nav = controller();

        nav.toggle_mobile(&host);
        assert!(nav.snapshot().mobile_open);
        assert_eq!(*host.locks.borrow(), vec![true]);

        nav.toggle_mobile(&host);
        assert!(!nav.snapshot().mobile_open);
        assert_eq!(*host.locks.borrow(), vec![true, false]);
    }

    #[test]
    fn stop_releases_the_lock_exactly_once() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.toggle_mobile(&host);

        nav.stop(&host);
        nav.stop(&host);

        assert_eq!(*host.locks.borrow(), vec![true, false]);
    }

    #[test]
    fn scroll_flag_reports_changes_only() {
        let mut nav = controller();

        assert!(!nav.on_scroll(4.0));
        assert!(nav.on_scroll(24.0));
        assert!(!nav.on_scroll(300.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.snapshot().scrolled);
    }

    #[test]
    fn hash_initialization_and_default() {
        let mut nav = controller();

        nav.start("contact");
        assert_eq!(nav.snapshot().active_target, "contact");

        nav.start("");
        assert_eq!(nav.snapshot().active_target, DEFAULT_TARGET);
    }

    #[test]
    fn focus_leaving_the_composite_closes_the_menu() {
        let host = FakeHost::with_layout();
        let mut nav = controller();
        nav.open_submenu(&host);

        nav.focus_out(true);
        assert!(nav.snapshot().submenu_open);

        nav.focus_out(false);
        assert!(!nav.snapshot().submenu_open);
    }
}
