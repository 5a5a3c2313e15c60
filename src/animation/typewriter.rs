use std::time::{Duration, Instant};

use crate::constants::TYPE_INTERVAL_MS;

/// Character-by-character reveal of a target string.
///
/// Runs on a repeating 35ms schedule; each tick reveals one more character and
/// the schedule clears itself once the full string is out. The displayed text
/// is always a prefix of the target. Re-entering a typing-eligible phase calls
/// `restart`, which replays the reveal from the beginning.
#[derive(Debug)]
pub struct Typewriter {
    target: &'static str,
    index: usize,
    next_tick: Option<Instant>,
}

impl Typewriter {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            index: 0,
            next_tick: None,
        }
    }

    /// Cancels any pending schedule and replays the reveal from index 0.
    pub fn restart(&mut self, now: Instant) {
        self.index = 0;
        self.next_tick = Some(now + Self::interval());
    }

    /// Consumes every tick due by `now`, catching up after a late frame.
    /// Returns true if the revealed text changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let len = self.target.chars().count();
        let mut changed = false;
        while let Some(due) = self.next_tick {
            if now < due {
                break;
            }
            if self.index < len {
                self.index += 1;
                changed = true;
            }
            self.next_tick = if self.index >= len {
                None
            } else {
                Some(due + Self::interval())
            };
        }
        changed
    }

    /// The revealed prefix, always on a char boundary.
    pub fn text(&self) -> &str {
        match self.target.char_indices().nth(self.index) {
            Some((byte, _)) => &self.target[..byte],
            None => self.target,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// True while the reveal schedule is live.
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    fn interval() -> Duration {
        Duration::from_millis(TYPE_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_idle_until_restarted() {
        let start = Instant::now();
        let mut tw = Typewriter::new("Hi");
        assert!(!tw.is_running());
        assert!(!tw.update(at(start, 10_000)));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let start = Instant::now();
        let mut tw = Typewriter::new("Hi");
        tw.restart(start);

        assert!(!tw.update(at(start, 34)));
        assert_eq!(tw.text(), "");

        assert!(tw.update(at(start, 35)));
        assert_eq!(tw.text(), "H");

        assert!(tw.update(at(start, 70)));
        assert_eq!(tw.text(), "Hi");
        assert!(!tw.is_running());
    }

    #[test]
    fn test_exactly_len_ticks_then_stops() {
        let start = Instant::now();
        let mut tw = Typewriter::new("abcde");
        tw.restart(start);

        let mut reveals = 0;
        for ms in (0..2000).step_by(5) {
            if tw.update(at(start, ms)) {
                reveals += 1;
            }
        }
        assert_eq!(reveals, 5);
        assert_eq!(tw.index(), 5);
        assert!(!tw.is_running());
        // No further movement ever.
        assert!(!tw.update(at(start, 1_000_000)));
        assert_eq!(tw.index(), 5);
    }

    #[test]
    fn test_catches_up_after_late_frame() {
        let start = Instant::now();
        let mut tw = Typewriter::new("abcdef");
        tw.restart(start);

        // One late poll swallows three due ticks at once.
        assert!(tw.update(at(start, 3 * 35)));
        assert_eq!(tw.text(), "abc");
        assert!(tw.is_running());

        // And a very late poll finishes the rest without overshooting.
        assert!(tw.update(at(start, 10_000)));
        assert_eq!(tw.text(), "abcdef");
        assert!(!tw.is_running());
    }

    #[test]
    fn test_text_is_monotonic_prefix() {
        let start = Instant::now();
        let mut tw = Typewriter::new("Guide the process.");
        tw.restart(start);

        let mut last_len = 0;
        for ms in (0..1500).step_by(16) {
            tw.update(at(start, ms));
            let text = tw.text();
            assert!(tw.target.starts_with(text));
            assert!(text.chars().count() >= last_len);
            last_len = text.chars().count();
        }
        assert_eq!(tw.text(), tw.target);
    }

    #[test]
    fn test_restart_replays_from_zero() {
        let start = Instant::now();
        let mut tw = Typewriter::new("Hi");
        tw.restart(start);
        tw.update(at(start, 1000));
        assert_eq!(tw.text(), "Hi");

        let again = at(start, 2000);
        tw.restart(again);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 0);
        assert!(tw.is_running());

        tw.update(at(start, 2035));
        assert_eq!(tw.text(), "H");
    }

    #[test]
    fn test_multibyte_prefixes_stay_on_boundaries() {
        let start = Instant::now();
        let mut tw = Typewriter::new("héllo");
        tw.restart(start);

        tw.update(at(start, 2 * 35));
        assert_eq!(tw.text(), "hé");
        tw.update(at(start, 5 * 35));
        assert_eq!(tw.text(), "héllo");
        assert!(!tw.is_running());
    }

    #[test]
    fn test_empty_target_finishes_immediately() {
        let start = Instant::now();
        let mut tw = Typewriter::new("");
        tw.restart(start);
        assert!(!tw.update(at(start, 35)));
        assert_eq!(tw.text(), "");
        assert!(!tw.is_running());
    }
}
