use std::time::Duration;

pub const TYPE_MS: u64 = 80;
pub const DELETE_MS: u64 = 30;
pub const HOLD_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Cycles through role strings one character at a time: type forward, hold
/// on the full text, delete back, move to the next role. Pure state; the
/// component drives it with a cancellable timeout chain.
#[derive(Debug)]
pub struct Typewriter {
    roles: &'static [&'static str],
    role: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: &'static [&'static str]) -> Self {
        assert!(!roles.is_empty(), "typewriter needs at least one role");
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    /// Advance one step and return the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                if self.shown < self.len() {
                    self.shown += 1;
                }
                if self.shown == self.len() {
                    self.phase = Phase::Deleting;
                    Duration::from_millis(HOLD_MS)
                } else {
                    Duration::from_millis(TYPE_MS)
                }
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    Duration::from_millis(TYPE_MS)
                } else {
                    Duration::from_millis(DELETE_MS)
                }
            }
        }
    }

    fn current(&self) -> &'static str {
        self.roles[self.role]
    }

    fn len(&self) -> usize {
        self.current().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 3] = ["One", "Two!", "Three"];

    #[test]
    fn types_the_first_role_then_holds() {
        let mut tw = Typewriter::new(&ROLES);

        assert_eq!(tw.tick(), Duration::from_millis(TYPE_MS));
        assert_eq!(tw.text(), "O");
        assert_eq!(tw.tick(), Duration::from_millis(TYPE_MS));
        let hold = tw.tick();
        assert_eq!(tw.text(), "One");
        assert_eq!(hold, Duration::from_millis(HOLD_MS));
    }

    #[test]
    fn deletes_back_and_advances_to_the_next_role() {
        let mut tw = Typewriter::new(&ROLES);
        while tw.text() != "One" {
            tw.tick();
        }

        assert_eq!(tw.tick(), Duration::from_millis(DELETE_MS));
        assert_eq!(tw.text(), "On");
        tw.tick();
        let next = tw.tick();
        assert_eq!(tw.text(), "");
        // empty again means the machine moved on and types at full speed
        assert_eq!(next, Duration::from_millis(TYPE_MS));

        tw.tick();
        assert_eq!(tw.text(), "T");
    }

    #[test]
    fn wraps_past_the_last_role() {
        let mut tw = Typewriter::new(&ROLES);
        let mut completed = Vec::new();

        // run long enough to see every role complete once, plus the wrap
        for _ in 0..200 {
            let delay = tw.tick();
            if delay == Duration::from_millis(HOLD_MS) {
                completed.push(tw.text());
                if completed.len() == 4 {
                    break;
                }
            }
        }

        assert_eq!(completed, vec!["One", "Two!", "Three", "One"]);
    }
}
