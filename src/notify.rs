//! Single-slot advisory state.
//!
//! The slot holds at most one [`Notice`]. Showing a message replaces whatever
//! is there and hands back the [`NoticeId`] its dismiss timer must present
//! when it fires; [`NotificationSlot::expire`] ignores ids that are no longer
//! current, so a timer left over from a replaced message cannot clear a newer
//! one.

use std::time::Duration;

/// How long a notice stays up without user interaction.
pub const DISMISS_AFTER: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
}

#[derive(Debug, Default, Clone)]
pub struct NotificationSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current notice. The returned id is the only one that
    /// [`expire`](Self::expire) will honor until the next call.
    pub fn show(&mut self, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.current = Some(Notice {
            id,
            message: message.into(),
        });
        id
    }

    /// Timer path. Clears only if `id` is still the notice on display.
    pub fn expire(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// User path. Clears unconditionally.
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.current.take()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Virtual clock that fires pending dismiss timers in deadline order.
    struct Timeline {
        now: Duration,
        pending: Vec<(Duration, NoticeId)>,
        slot: NotificationSlot,
    }

    impl Timeline {
        fn new() -> Self {
            Self {
                now: Duration::ZERO,
                pending: Vec::new(),
                slot: NotificationSlot::new(),
            }
        }

        fn show(&mut self, message: &str) {
            let id = self.slot.show(message);
            self.pending.push((self.now + DISMISS_AFTER, id));
        }

        fn advance(&mut self, by: Duration) {
            self.now += by;
            self.pending.sort_by_key(|(deadline, _)| *deadline);
            let now = self.now;
            let (due, later): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(d, _)| *d <= now);
            self.pending = later;
            for (_, id) in due {
                self.slot.expire(id);
            }
        }
    }

    #[test]
    fn test_new_message_replaces_current() {
        let mut tl = Timeline::new();
        tl.show("A");
        tl.advance(Duration::from_millis(100));
        tl.show("B");
        assert_eq!(tl.slot.message(), Some("B"));

        // walk through the rest of the window, "A" must never come back
        for _ in 0..50 {
            tl.advance(Duration::from_millis(100));
            assert_ne!(tl.slot.message(), Some("A"));
        }
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_message() {
        let mut tl = Timeline::new();
        tl.show("A");
        tl.advance(Duration::from_secs(2));
        tl.show("B");

        // past A's deadline (6s), before B's (8s)
        tl.advance(Duration::from_secs(5));
        assert_eq!(tl.slot.message(), Some("B"));

        tl.advance(Duration::from_secs(1));
        assert!(!tl.slot.is_showing());
    }

    #[test]
    fn test_stale_timer_with_identical_text() {
        let mut tl = Timeline::new();
        tl.show("same");
        tl.advance(Duration::from_secs(3));
        tl.show("same");
        tl.advance(Duration::from_secs(4));
        assert_eq!(tl.slot.message(), Some("same"));
    }

    #[test]
    fn test_auto_dismiss() {
        let mut tl = Timeline::new();
        tl.show("A");
        tl.advance(DISMISS_AFTER - Duration::from_millis(1));
        assert!(tl.slot.is_showing());
        tl.advance(Duration::from_millis(1));
        assert!(!tl.slot.is_showing());
        assert_eq!(tl.slot.message(), None);
    }

    #[test]
    fn test_manual_dismiss() {
        let mut tl = Timeline::new();
        tl.show("A");
        let dismissed = tl.slot.dismiss();
        assert_eq!(dismissed.map(|n| n.message), Some("A".to_string()));
        assert!(!tl.slot.is_showing());

        // the pending timer firing later is harmless
        tl.advance(DISMISS_AFTER);
        assert!(!tl.slot.is_showing());
    }

    #[test]
    fn test_dismiss_when_empty() {
        let mut slot = NotificationSlot::new();
        assert_eq!(slot.dismiss(), None);
        assert!(!slot.is_showing());
    }

    #[test]
    fn test_expire_reports_whether_cleared() {
        let mut slot = NotificationSlot::new();
        let a = slot.show("A");
        let b = slot.show("B");
        assert_ne!(a, b);
        assert!(!slot.expire(a));
        assert!(slot.expire(b));
        assert!(!slot.expire(b));
    }

    #[test]
    fn test_empty_message_is_accepted() {
        let mut slot = NotificationSlot::new();
        slot.show("");
        assert!(slot.is_showing());
        assert_eq!(slot.message(), Some(""));
    }
}
